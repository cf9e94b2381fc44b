
/*
 * bgnum - Bulgarian number speech audio generator
 * This program builds the spoken Bulgarian form for a range of numbers
 * (1 to 90 by default), synthesizes one MP3 per number through the Google
 * Translate text-to-speech endpoint and bundles the results into a zip
 * archive.
 * The program is written in Rust and uses the reqwest crate for making HTTP requests.
 * The program uses the clap crate for parsing command line arguments.
 * The program uses the log crate for logging.
 * The program uses the tokio crate for asynchronous IO.
 * The program uses the dotenv crate for reading environment variables from a .env file.
 *
*/

use clap::Parser;
use ctrlc;
use log::{error, info, warn};
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use bgnum::archive::bundle_zip;
use bgnum::args::Args;
use bgnum::pipeline::generate_audio;

#[tokio::main]
async fn main() {
    // Read .env file
    dotenv::dotenv().ok();

    // Initialize logging
    let _ = env_logger::try_init();

    // Parse command line arguments
    let args = Args::parse();

    // Create an atomic bool to track if Ctrl+C is pressed
    let running = Arc::new(AtomicBool::new(true));
    let rctrlc = running.clone();

    // Set up the Ctrl+C handler
    ctrlc::set_handler(move || {
        println!("");
        println!("Ctrl+C received, finishing the file in flight and stopping...");
        rctrlc.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    // Set Rust log level with --loglevel if it is set
    let loglevel = args.loglevel.to_lowercase();
    match loglevel.as_str() {
        "error" => {
            log::set_max_level(log::LevelFilter::Error);
        }
        "warn" => {
            log::set_max_level(log::LevelFilter::Warn);
        }
        "info" => {
            log::set_max_level(log::LevelFilter::Info);
        }
        "debug" => {
            log::set_max_level(log::LevelFilter::Debug);
        }
        "trace" => {
            log::set_max_level(log::LevelFilter::Trace);
        }
        _ => {
            log::set_max_level(log::LevelFilter::Info);
        }
    }

    info!(
        "Generating Bulgarian number audio {}..={} into {}",
        args.start, args.end, args.output_dir
    );

    let files = match generate_audio(&args, running.clone()).await {
        Ok(files) => files,
        Err(e) => {
            error!("Audio generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if !running.load(Ordering::SeqCst) {
        warn!(
            "Interrupted; {} files left in {} and no archive written",
            files.len(),
            args.output_dir
        );
        return;
    }

    info!("Generated {} audio files in {}", files.len(), args.output_dir);

    if args.no_zip {
        return;
    }

    match bundle_zip(Path::new(&args.output_dir), Path::new(&args.zip_file)) {
        Ok(count) => {
            info!("Bundled {} files into {}", count, args.zip_file);
        }
        Err(e) => {
            error!("Zip bundling failed: {}", e);
            std::process::exit(1);
        }
    }
}
