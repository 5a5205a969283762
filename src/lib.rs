//! # Award Archive
//!
//! Collects award nominations from the BAFTA awards archive and normalizes
//! them into `year -> category -> nominees`.
//!
//! ## Architecture
//!
//! 1. **Driver** ([`archive`]): walk a section's year range, skip failed years
//! 2. **Extractor** ([`scrapers::bafta`]): fetch one year page, parse result blocks
//! 3. **Normalizer** ([`normalize`]): reduce block titles to the category name
//!
//! ```no_run
//! use award_archive::{archive, config::ArchiveConfig, fetch::HttpFetcher, models::ContentType};
//!
//! # async fn run() -> award_archive::error::Result<()> {
//! let config = ArchiveConfig::default();
//! let fetcher = HttpFetcher::new(config.timeout())?;
//! let report = archive::collect(&fetcher, &config, &config.base_url()?, ContentType::Games).await;
//! println!("{} of {} years collected", report.succeeded(), report.attempted);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod outputs;
pub mod scrapers;
pub mod utils;
