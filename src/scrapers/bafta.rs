//! BAFTA awards archive scraper.
//!
//! Each archive page lists one section (television, film, ...) for one year
//! at `http://awards.bafta.org/award/<year>/<section>`. The page is a series
//! of `.search-result-wrapper` blocks, one per award category:
//!
//! ```text
//! .search-result-wrapper
//! ├── .search-result-title      "Television | Drama Series in 2013"
//! ├── .search-result-headline   "Last Tango in Halifax"   (work)
//! ├── .search-result-subtitle   "Sally Wainwright, ..."   (people)
//! ├── .search-result-headline   ...
//! └── .search-result-subtitle   ...
//! ```
//!
//! Headlines and subtitles are paired by position. The first pair listed in a
//! block is taken to be the winner.

use crate::error::{ArchiveError, Result};
use crate::fetch::PageFetcher;
use crate::models::{CategoryResult, ContentType, Nominee, YearResult};
use crate::normalize::normalize_title;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

static BLOCK: Lazy<Selector> = Lazy::new(|| selector(".search-result-wrapper"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector(".search-result-title"));
static HEADLINE: Lazy<Selector> = Lazy::new(|| selector(".search-result-headline"));
static SUBTITLE: Lazy<Selector> = Lazy::new(|| selector(".search-result-subtitle"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Build the archive URL for one section and year.
///
/// `base` is the archive root, e.g. `http://awards.bafta.org/`. Its path is
/// kept whether or not it ends in `/`, so `http://mirror.test/bafta` gives
/// `http://mirror.test/bafta/award/<year>/<section>`.
pub fn year_url(base: &Url, year: u16, content_type: ContentType) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("award")
        .push(&year.to_string())
        .push(content_type.slug());
    Ok(url)
}

/// Fetch and parse one year of a section.
///
/// Performs exactly one fetch. Any body the fetcher returns is parsed as-is,
/// so an error page simply yields an empty map. The section's first year is
/// not checked here.
///
/// # Arguments
///
/// * `fetcher` - Transport used for the single page request
/// * `base` - Archive root URL
/// * `year` - Award year to fetch
/// * `content_type` - Archive section
///
/// # Returns
///
/// Category title to nominees for that year.
///
/// # Errors
///
/// - [`ArchiveError::InvalidUrl`] if `base` cannot carry a path
/// - [`ArchiveError::Fetch`] if the transport fails
#[instrument(level = "info", skip(fetcher, base))]
pub async fn fetch_year<F: PageFetcher>(
    fetcher: &F,
    base: &Url,
    year: u16,
    content_type: ContentType,
) -> Result<YearResult> {
    let url = year_url(base, year, content_type)?;
    let body = fetcher.fetch(&url).await?;
    let categories = parse_year_page(&body);

    if categories.is_empty() {
        debug!(body = %truncate_for_log(&body, 200), "No category blocks on page");
    }
    info!(
        categories = categories.len(),
        nominees = categories.values().map(Vec::len).sum::<usize>(),
        "Parsed archive year"
    );
    Ok(categories)
}

/// Extract every category block from an archive page.
///
/// Blocks whose headline and subtitle counts differ are skipped. When two
/// blocks normalize to the same title the later one wins.
pub fn parse_year_page(html: &str) -> YearResult {
    let document = Html::parse_document(html);
    let mut categories = YearResult::new();

    for block in document.select(&BLOCK) {
        match parse_block(block) {
            Ok((title, nominees)) => {
                if categories.insert(title.clone(), nominees).is_some() {
                    debug!(%title, "Duplicate category title; keeping later block");
                }
            }
            Err(e) => warn!(error = %e, "Skipping malformed category block"),
        }
    }

    categories
}

fn parse_block(block: ElementRef<'_>) -> Result<(String, CategoryResult)> {
    let raw_title: String = block
        .select(&TITLE)
        .flat_map(|el| el.text())
        .collect();
    let title = normalize_title(&raw_title);

    let headlines = trimmed_texts(block, &HEADLINE);
    let subtitles = trimmed_texts(block, &SUBTITLE);

    if headlines.len() != subtitles.len() {
        return Err(ArchiveError::MisalignedBlock {
            title,
            headlines: headlines.len(),
            subtitles: subtitles.len(),
        });
    }

    Ok((title, build_nominees(headlines, subtitles)))
}

fn trimmed_texts(block: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    block
        .select(selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

// Callers check the lengths match; pairs with both sides empty are dropped
// and the first kept pair is the winner.
fn build_nominees(headlines: Vec<String>, subtitles: Vec<String>) -> CategoryResult {
    debug_assert_eq!(headlines.len(), subtitles.len());

    headlines
        .into_iter()
        .zip(subtitles)
        .filter(|(name, contributor)| !(name.is_empty() && contributor.is_empty()))
        .enumerate()
        .map(|(i, (name, contributor))| Nominee::new(name, contributor, i == 0))
        .collect()
}
