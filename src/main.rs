//! # Award Archive
//!
//! Collects every year of one BAFTA awards archive section and emits the
//! nominations as JSON.
//!
//! ## Usage
//!
//! ```sh
//! award_archive television -j ./json
//! RUST_LOG=debug award_archive games --concurrency 4
//! ```
//!
//! ## Pipeline
//!
//! 1. **Configure**: YAML config (optional) overlaid with CLI flags
//! 2. **Collect**: fetch each year page of the section, skipping failures
//! 3. **Output**: write `<section>.json` or print it to stdout

use award_archive::archive;
use award_archive::cli::Cli;
use award_archive::config::ArchiveConfig;
use award_archive::fetch::HttpFetcher;
use award_archive::models::ContentType;
use award_archive::outputs::json;
use award_archive::utils::ensure_writable_dir;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("award_archive starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let content_type: ContentType = match args.content_type.parse() {
        Ok(ct) => ct,
        Err(e) => {
            error!(error = %e, "Unsupported archive section");
            return Err(e.into());
        }
    };

    // ---- Config ----
    let config = match args.config {
        Some(ref path) => ArchiveConfig::load(path)?,
        None => ArchiveConfig::default(),
    };
    let config = args.apply_overrides(config);
    let base_url = config.base_url()?;
    info!(%base_url, final_year = config.final_year, concurrency = config.concurrency, "Using configuration");

    // Early check: fail before a long crawl if the output dir is unusable
    if let Some(ref dir) = args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    // ---- Collect ----
    let fetcher = HttpFetcher::new(config.timeout())?;
    let report = archive::collect(&fetcher, &config, &base_url, content_type).await;
    if report.succeeded() == 0 && report.attempted > 0 {
        warn!(attempted = report.attempted, "No archive years could be fetched");
    }
    let snapshot = report.into_snapshot();

    // ---- Output ----
    match args.json_output_dir {
        Some(ref dir) => {
            if let Err(e) = json::write_snapshot(&snapshot, dir).await {
                error!(error = %e, "Failed to write JSON");
                return Err(e.into());
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        years = snapshot.years.len(),
        skipped = snapshot.skipped_years.len(),
        "Execution complete"
    );

    Ok(())
}
