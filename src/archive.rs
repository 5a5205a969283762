//! Year-range collection.
//!
//! Walks every year of a section from its first archived year up to the
//! configured final year, fetching each year page independently. A year that
//! fails is recorded as skipped and left out of the archive; it never stops
//! the other years.
//!
//! With `concurrency > 1` several years are fetched at once through
//! `buffer_unordered`. Each future owns its year and results are merged by
//! the single collecting loop, so the archive is the same whatever order the
//! pages arrive in.

use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::fetch::PageFetcher;
use crate::models::{ArchiveSnapshot, AwardArchive, ContentType, YearResult};
use crate::scrapers::bafta::fetch_year;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// What happened to a single year.
#[derive(Debug)]
pub enum YearOutcome {
    Collected(u16, YearResult),
    Skipped(u16, ArchiveError),
}

/// The archive for one section plus an account of every year attempted.
#[derive(Debug)]
pub struct CollectReport {
    pub content_type: ContentType,
    pub archive: AwardArchive,
    /// Number of years requested.
    pub attempted: usize,
    /// Years that failed, ascending.
    pub skipped: Vec<u16>,
}

impl CollectReport {
    fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            archive: AwardArchive::new(),
            attempted: 0,
            skipped: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.archive.len()
    }

    /// Freeze the report into the serializable snapshot, stamped with the current time.
    pub fn into_snapshot(self) -> ArchiveSnapshot {
        ArchiveSnapshot {
            content_type: self.content_type,
            generated_at: Utc::now().to_rfc3339(),
            attempted_years: self.attempted,
            skipped_years: self.skipped,
            years: self.archive,
        }
    }

    fn record(&mut self, outcome: YearOutcome) {
        self.attempted += 1;
        match outcome {
            YearOutcome::Collected(year, categories) => {
                self.archive.insert(year, categories);
            }
            YearOutcome::Skipped(year, e) => {
                warn!(year, error = %e, "Skipping year");
                self.skipped.push(year);
            }
        }
    }
}

/// Years requested for a section: its first archived year up to `final_year`, exclusive.
pub fn year_range(content_type: ContentType, final_year: u16) -> std::ops::Range<u16> {
    content_type.min_year()..final_year
}

/// Collect every year of `content_type`.
///
/// # Arguments
///
/// * `fetcher` - Transport shared by every year request
/// * `config` - Supplies the final (exclusive) year and the concurrency limit
/// * `base` - Archive root URL
/// * `content_type` - Archive section; its first year starts the range
///
/// # Returns
///
/// A [`CollectReport`] with the archive and the attempted/skipped years.
/// This never fails: years whose fetch fails are listed in
/// [`CollectReport::skipped`] and absent from the archive.
#[instrument(level = "info", skip(fetcher, config, base))]
pub async fn collect<F: PageFetcher>(
    fetcher: &F,
    config: &ArchiveConfig,
    base: &Url,
    content_type: ContentType,
) -> CollectReport {
    let t0 = Instant::now();
    let years = year_range(content_type, config.final_year);
    let concurrency = config.concurrency.max(1);
    info!(
        first = years.start,
        end = years.end,
        concurrency,
        "Collecting archive years"
    );

    let outcomes: Vec<YearOutcome> = stream::iter(years)
        .map(|year| async move {
            match fetch_year(fetcher, base, year, content_type).await {
                Ok(categories) => {
                    debug!(year, categories = categories.len(), "Collected year");
                    YearOutcome::Collected(year, categories)
                }
                Err(e) => YearOutcome::Skipped(year, e),
            }
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut report = CollectReport::new(content_type);
    for outcome in outcomes {
        report.record(outcome);
    }
    report.skipped.sort_unstable();

    let elapsed = t0.elapsed();
    info!(
        attempted = report.attempted,
        succeeded = report.succeeded(),
        skipped = %report.skipped.iter().join(","),
        elapsed_ms = elapsed.as_millis() as u64,
        "Finished collecting archive"
    );
    report
}

/// Collect a section named by its slug.
///
/// An unknown slug is an [`ArchiveError::UnrecognizedContentType`]; a known
/// section whose range is empty is `Ok` with an empty archive.
pub async fn collect_slug<F: PageFetcher>(
    fetcher: &F,
    config: &ArchiveConfig,
    base: &Url,
    slug: &str,
) -> Result<CollectReport> {
    let content_type: ContentType = slug.parse()?;
    Ok(collect(fetcher, config, base, content_type).await)
}
