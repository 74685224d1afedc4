// src/main.rs

use anyhow::Result;
use clap::Parser;
use gunzip_tree::cli::Cli;
use gunzip_tree::config::ConfigBuilder;
use gunzip_tree::constants::NO_FILES_MESSAGE;
use gunzip_tree::errors::Error;
use gunzip_tree::run;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Initialize logging from RUST_LOG; this crate's own target is pinned to
    // 'debug' in debug builds and 'info' in release builds.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "gunzip_tree=debug".parse()?
                } else {
                    "gunzip_tree=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting gunzip-tree v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully: {:?}", config);

    let mut writer = BufWriter::new(io::stdout().lock());
    let result = run(&config, &mut writer);
    drop(writer);

    // --- Error Handling ---
    match result {
        Ok(summary) => {
            // Partial failures are reported in the summary and signalled by exit status.
            if summary.has_failures() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(Error::NoFilesFound) => {
            println!("{}", NO_FILES_MESSAGE);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
