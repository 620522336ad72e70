//! CLI that reads a saved page from stdin (or a file) and prints JSON to stdout.
//!
//! `article` prints an article record, or an error record with exit code 1.
//! `listing` prints the resolved article URLs as a JSON array.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rs_sharelinks::{extract_article_bytes, resolve, ErrorRecord, ExtractionOutcome, Options};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "extract_stdin", about = "Extract share links from saved article and listing pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title, tags and share links from an article page
    Article {
        /// URL the page was fetched from
        #[arg(short, long)]
        url: String,
        /// Read HTML from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Resolve article URLs from a listing page
    Listing {
        /// URL of the listing page, used to resolve relative links
        #[arg(short, long)]
        base_url: String,
        /// Max article URLs to return
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
        /// Read HTML from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options::default();

    match cli.command {
        Commands::Article { url, input } => {
            let outcome = match read_input(input.as_ref()) {
                Ok(bytes) => match extract_article_bytes(&bytes, &url) {
                    Ok(record) => ExtractionOutcome::Article(record),
                    Err(err) => ExtractionOutcome::Error(ErrorRecord::from_error(&err, &options)),
                },
                Err(err) => ExtractionOutcome::Error(ErrorRecord::new(format!("Failed to read input: {err}"), &options)),
            };
            print_json(&outcome);
            if outcome.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Listing { base_url, limit, input } => {
            let result = read_input(input.as_ref())
                .map_err(|err| format!("Failed to read input: {err}"))
                .and_then(|bytes| {
                    let html = rs_sharelinks::encoding::transcode_to_utf8(&bytes);
                    resolve(&html, &base_url, limit).map_err(|err| err.to_string())
                });
            match result {
                Ok(urls) => {
                    tracing::info!("Resolved {} article URLs from {}", urls.len(), base_url);
                    print_json(&urls);
                    ExitCode::SUCCESS
                }
                Err(msg) => {
                    print_json(&ErrorRecord::new(msg, &options));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!("Failed to serialize output: {}", err),
    }
}
