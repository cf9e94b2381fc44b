
use clap::Parser;

/// Bgnum Configuration
#[derive(Parser, Debug, Clone)]
#[clap(
    version = "0.1.0",
    about = "Bulgarian number speech audio generator"
)]
pub struct Args {
    /// First number
    #[clap(
        long,
        env = "START",
        default_value = "1",
        help = "First number to synthesize, 0 to 99."
    )]
    pub start: u32,

    /// Last number
    #[clap(
        long,
        env = "END",
        default_value = "90",
        help = "Last number to synthesize, 0 to 99, not below --start."
    )]
    pub end: u32,

    /// Language code sent to the TTS service
    #[clap(
        long,
        env = "TTS_LANGUAGE",
        default_value = "bg",
        help = "Language code sent to the TTS service, bg for Bulgarian."
    )]
    pub language: String,

    /// Output directory for the audio files
    #[clap(
        long,
        env = "OUTPUT_DIR",
        default_value = "bg_numbers_audio",
        help = "Directory the per-number MP3 files are written into."
    )]
    pub output_dir: String,

    /// Zip archive path
    #[clap(
        long,
        env = "ZIP_FILE",
        default_value = "bulgarian_numbers_audio_1_to_90.zip",
        help = "Path of the zip archive bundling the generated files."
    )]
    pub zip_file: String,

    /// TTS endpoint
    #[clap(
        long,
        env = "TTS_ENDPOINT",
        default_value = "https://translate.google.com/translate_tts",
        help = "Base URL of the Google Translate TTS endpoint."
    )]
    pub tts_endpoint: String,

    /// Delay between TTS requests
    #[clap(
        long,
        env = "DELAY_MS",
        default_value = "250",
        help = "Milliseconds to wait between TTS requests, 0 to disable."
    )]
    pub delay_ms: u64,

    /// Max attempts per TTS request
    #[clap(
        long,
        env = "MAX_ATTEMPTS",
        default_value = "3",
        help = "Attempts per utterance before giving up, throttles and transport errors are retried."
    )]
    pub max_attempts: u32,

    /// Slow speech
    #[clap(
        long,
        env = "SLOW_SPEECH",
        default_value = "false",
        help = "Slow speech, it will ask the service for the reduced speaking rate."
    )]
    pub slow: bool,

    /// Overwrite existing files
    #[clap(
        long,
        env = "OVERWRITE",
        default_value = "false",
        help = "Re-synthesize numbers whose MP3 file already exists."
    )]
    pub overwrite: bool,

    /// Skip the zip archive
    #[clap(
        long,
        env = "NO_ZIP",
        default_value = "false",
        help = "Generate the audio files only, without bundling them into a zip."
    )]
    pub no_zip: bool,

    /// Log level
    #[clap(
        long,
        env = "LOGLEVEL",
        default_value = "info",
        help = "Log level, one of error, warn, info, debug, trace."
    )]
    pub loglevel: String,
}
