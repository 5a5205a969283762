//! Error types shared by the archive scraper.

use thiserror::Error;

/// Everything that can go wrong while collecting the award archive.
///
/// Only [`ArchiveError::UnrecognizedContentType`] and the configuration/IO
/// variants ever reach a caller. Fetch failures are recovered per year and
/// misaligned blocks are recovered per category by the collector.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("unrecognized content type: {0:?}")]
    UnrecognizedContentType(String),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("block {title:?} has {headlines} headlines but {subtitles} subtitles")]
    MisalignedBlock {
        title: String,
        headlines: usize,
        subtitles: usize,
    },

    #[error("invalid archive url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
