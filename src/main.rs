use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use symlink_track::cli::Cli;
use symlink_track::core::{Status, TrackOptions};
use symlink_track::fs::RealFileSystem;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    if !cli.extra.is_empty() {
        eprintln!("Warning: Currently, symlink-track supports only one file at a time.");
    }

    let options = TrackOptions {
        max_hops: cli.max_hops,
    };
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match symlink_track::run(&RealFileSystem, &cli.path, options, &mut out, &mut err) {
        Ok(Status::Complete) => ExitCode::SUCCESS,
        Ok(Status::Broken) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("symlink-track: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("symlink_track=warn"));

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
