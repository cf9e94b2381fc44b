/*
 * lib.rs
 * ------
 *
 * This file contains the main library for the Bulgarian number audio
 * generation modules for bgnum.
*/

pub mod archive;
pub mod args;
pub mod google_tts;
pub mod numbers;
pub mod pipeline;

#[derive(Debug)]
pub enum ApiError {
    Error(String),
    RequestError(reqwest::Error),
    IoError(std::io::Error),
    ZipError(zip::result::ZipError),
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        ApiError::RequestError(value)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(value: std::io::Error) -> Self {
        ApiError::IoError(value)
    }
}

impl From<zip::result::ZipError> for ApiError {
    fn from(value: zip::result::ZipError) -> Self {
        ApiError::ZipError(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Error(msg) => write!(f, "{}", msg),
            ApiError::RequestError(e) => write!(f, "Request error: {}", e),
            ApiError::IoError(e) => write!(f, "IO error: {}", e),
            ApiError::ZipError(e) => write!(f, "Zip error: {}", e),
        }
    }
}
