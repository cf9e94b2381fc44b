
/// Module `google_tts` - Handles Text-to-Speech (TTS) conversion using the
/// Google Translate speech endpoint.
///
/// # Overview
/// This module provides functionality to convert text input to speech audio,
/// interfacing with the unauthenticated Google Translate TTS service. One
/// GET request per utterance, MP3 bytes back. The endpoint expects a browser
/// User-Agent and the `client=tw-ob` marker, and throttles with 429s or
/// empty bodies.
///
/// # Structures
/// `Request`: Represents a TTS request with the utterance text, language
/// code and speaking rate, serialized into the query string.
///
/// # Error Handling
/// Utilizes `ApiError` for consistent error management across the application.
///
use bytes::Bytes;
use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;
use tokio::time::Duration;

use crate::ApiError;

// The endpoint answers 403 to clients without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const SPEED_NORMAL: f32 = 1.0;
const SPEED_SLOW: f32 = 0.3;

/// Query parameters for one synthesis request.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    ie: &'static str,
    #[serde(rename = "q")]
    text: &'a str,
    #[serde(rename = "tl")]
    language: &'a str,
    client: &'static str,
    ttsspeed: f32,
    textlen: usize,
}

impl<'a> Request<'a> {
    pub fn new(text: &'a str, language: &'a str, slow: bool) -> Self {
        Request {
            ie: "UTF-8",
            text,
            language,
            client: "tw-ob",
            ttsspeed: if slow { SPEED_SLOW } else { SPEED_NORMAL },
            textlen: text.chars().count(),
        }
    }
}

/// Fetch one utterance as MP3 bytes.
///
/// 429, 5xx, transport errors and empty bodies are retried with exponential
/// backoff up to `max_attempts`; any other non-success status fails at once.
pub async fn tts(
    client: &Client,
    endpoint: &str,
    request: &Request<'_>,
    max_attempts: u32,
) -> Result<Bytes, ApiError> {
    let mut attempts = 0;
    while attempts < max_attempts {
        debug!(
            "TTS request for '{}' ({}), attempt {}/{}",
            request.text,
            request.language,
            attempts + 1,
            max_attempts
        );

        let response = client
            .get(endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(request)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    let audio = resp.bytes().await?;
                    if !audio.is_empty() {
                        debug!("TTS response for '{}': {} bytes", request.text, audio.len());
                        return Ok(audio);
                    }
                    // An empty 200 is the endpoint's quiet throttle signal.
                    warn!("TTS returned an empty body for '{}'", request.text);
                } else {
                    let body = resp.text().await.unwrap_or_default();
                    let excerpt: String = body.chars().take(200).collect();
                    if status.as_u16() != 429 && !status.is_server_error() {
                        return Err(ApiError::Error(format!(
                            "TTS request for '{}' failed with status {}: {}",
                            request.text, status, excerpt
                        )));
                    }
                    warn!(
                        "TTS status {} for '{}': {}",
                        status, request.text, excerpt
                    );
                }
            }
            Err(e) => {
                warn!("TTS transport error for '{}': {}", request.text, e);
                if attempts + 1 >= max_attempts {
                    return Err(ApiError::RequestError(e));
                }
            }
        }

        attempts += 1;
        if attempts < max_attempts {
            let wait = Duration::from_secs(2u64.pow(attempts));
            warn!("Retrying '{}' in {}s...", request.text, wait.as_secs());
            tokio::time::sleep(wait).await;
        }
    }

    Err(ApiError::Error(format!(
        "TTS gave no audio for '{}' after {} attempts",
        request.text, max_attempts
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_the_wire_defaults() {
        let req = Request::new("двадесет и две", "bg", false);
        assert_eq!(req.ie, "UTF-8");
        assert_eq!(req.client, "tw-ob");
        assert_eq!(req.ttsspeed, SPEED_NORMAL);
        // textlen counts characters, not UTF-8 bytes
        assert_eq!(req.textlen, 14);
    }

    #[test]
    fn slow_flag_reduces_the_speaking_rate() {
        let req = Request::new("пет", "bg", true);
        assert_eq!(req.ttsspeed, SPEED_SLOW);
    }
}
