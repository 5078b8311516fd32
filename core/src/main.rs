use clap::Parser;
use dicombatch_core::cli::{Cli, OutputFormat};
use dicombatch_core::{BatchExtractor, BatchSummary, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let config = cli.to_config();
    info!(
        "Extracting [{}] from {} input path(s)",
        config.tag_list,
        config.inputs.len()
    );

    let summary = match BatchExtractor::new(&config).and_then(BatchExtractor::run) {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    output_summary(&summary, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_summary(summary: &BatchSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(summary));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
