use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

use pdfjpeg::cli::Cli;
use pdfjpeg::extraction::Extractor;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("Extracting images from {}...", cli.input.display());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.uses_default_markers() {
        tracing::info!(
            "Using custom markers {} .. {}",
            hex::encode(&cli.start_marker.0),
            hex::encode(&cli.end_marker.0)
        );
    }

    Extractor::new(cli.to_options()).run()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
