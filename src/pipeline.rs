
/*
    Batch speech generation: one TTS call and one MP3 file per number.
*/
use log::{debug, info, warn};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::Duration;

use crate::args::Args;
use crate::google_tts::{self, Request};
use crate::numbers::number_to_bulgarian;
use crate::ApiError;

// One unit of work: the number, its spoken form and the file it lands in.
#[derive(Clone, Debug)]
pub struct SpeechJob {
    pub number: u32,
    pub word: String,
    pub path: PathBuf,
}

/// Expand the configured range into jobs, validating it against the word
/// table before any network traffic happens.
pub fn build_jobs(args: &Args) -> Result<Vec<SpeechJob>, ApiError> {
    if args.start > args.end {
        return Err(ApiError::Error(format!(
            "start {} is past end {}",
            args.start, args.end
        )));
    }

    let out_dir = Path::new(&args.output_dir);
    let mut jobs = Vec::with_capacity((args.end - args.start + 1) as usize);
    for number in args.start..=args.end {
        let word = number_to_bulgarian(number)
            .ok_or_else(|| ApiError::Error(format!("no Bulgarian word form for {}", number)))?;
        jobs.push(SpeechJob {
            number,
            word,
            path: out_dir.join(format!("{}.mp3", number)),
        });
    }
    Ok(jobs)
}

/// Run the batch: synthesize every job in order and write the MP3 files.
///
/// Files that already exist are reused unless `--overwrite` is set, so an
/// interrupted run resumes without re-paying API calls. The loop polls
/// `running` between numbers and stops at a file boundary when it clears.
/// Returns the paths written or reused, in numeric order.
pub async fn generate_audio(
    args: &Args,
    running: Arc<AtomicBool>,
) -> Result<Vec<PathBuf>, ApiError> {
    let jobs = build_jobs(args)?;
    std::fs::create_dir_all(&args.output_dir)?;

    let client = Client::new();
    let total = jobs.len();
    let mut written = Vec::with_capacity(total);

    for (index, job) in jobs.iter().enumerate() {
        if !running.load(Ordering::SeqCst) {
            warn!(
                "Stopping after {}/{} files on shutdown signal",
                index, total
            );
            break;
        }

        if job.path.exists() && !args.overwrite {
            debug!("{} exists, skipping synthesis", job.path.display());
            written.push(job.path.clone());
            continue;
        }

        info!(
            "[{}/{}] {} -> {}",
            index + 1,
            total,
            job.word,
            job.path.display()
        );

        let request = Request::new(&job.word, &args.language, args.slow);
        let audio = google_tts::tts(&client, &args.tts_endpoint, &request, args.max_attempts).await?;
        std::fs::write(&job.path, &audio)?;
        written.push(job.path.clone());

        if args.delay_ms > 0 && index + 1 < total {
            tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_from(argv: &[&str]) -> Args {
        let mut full = vec!["bgnum"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn jobs_cover_the_range_in_order() {
        let args = args_from(&["--start", "19", "--end", "22", "--output-dir", "out"]);
        let jobs = build_jobs(&args).unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].number, 19);
        assert_eq!(jobs[0].word, "деветнадесет");
        assert_eq!(jobs[3].word, "двадесет и две");
        assert_eq!(jobs[1].path, Path::new("out").join("20.mp3"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let args = args_from(&["--start", "10", "--end", "5"]);
        assert!(build_jobs(&args).is_err());
    }

    #[test]
    fn range_past_the_word_table_is_rejected() {
        let args = args_from(&["--start", "95", "--end", "120"]);
        assert!(build_jobs(&args).is_err());
    }
}
