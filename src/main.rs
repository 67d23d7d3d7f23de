use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dirls::ListOptions;
use dirls::cli::Cli;
use dirls::core::{scan, write_descriptions};
use dirls::fs::RealFileSystem;
use dirls::models::FileDescription;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing();

    let options = ListOptions::from(&cli);
    match run(&cli.dirname, &options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirls: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(dir: &Path, options: &ListOptions) -> anyhow::Result<()> {
    let records = scan(&RealFileSystem, dir, options).await?;

    write_listing(&mut io::stdout().lock(), &records, options)
}

// A reader that goes away early (`dirls | head`) ends the listing, not the run.
fn write_listing<W: Write>(
    writer: &mut W,
    records: &[FileDescription],
    options: &ListOptions,
) -> anyhow::Result<()> {
    match write_descriptions(writer, records, options).and_then(|()| writer.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the listing was complete");
            Ok(())
        }
        result => result.context("failed to write listing"),
    }
}

// Diagnostics go to stderr so stdout carries only the listing.
fn setup_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "dirls=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
