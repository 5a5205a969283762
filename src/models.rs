//! Data models for the award archive.
//!
//! This module defines the structures produced by the scraper:
//! - [`ContentType`]: The archive sections that can be collected
//! - [`Nominee`]: A single nominated entry within a category
//! - [`YearResult`] / [`AwardArchive`]: The per-year and aggregate mappings
//! - [`ArchiveSnapshot`]: The serialized envelope written by the binary

use crate::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One section of the award archive.
///
/// Each section has a first year below which the archive holds no data.
///
/// | Variant | Slug | First year |
/// |---------|------|------------|
/// | `Television` | `television` | 1954 |
/// | `Film` | `film` | 1954 |
/// | `Games` | `games` | 2004 |
/// | `TvCraft` | `tvcraft` | 1978 |
/// | `Childrens` | `childrens` | 1996 |
/// | `Cymru` | `cymru` | 1993 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Television,
    Film,
    Games,
    TvCraft,
    Childrens,
    Cymru,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Television,
        ContentType::Film,
        ContentType::Games,
        ContentType::TvCraft,
        ContentType::Childrens,
        ContentType::Cymru,
    ];

    /// First year the archive has data for this section.
    pub const fn min_year(self) -> u16 {
        match self {
            ContentType::Television | ContentType::Film => 1954,
            ContentType::Games => 2004,
            ContentType::TvCraft => 1978,
            ContentType::Childrens => 1996,
            ContentType::Cymru => 1993,
        }
    }

    /// The path segment used by the archive for this section.
    pub const fn slug(self) -> &'static str {
        match self {
            ContentType::Television => "television",
            ContentType::Film => "film",
            ContentType::Games => "games",
            ContentType::TvCraft => "tvcraft",
            ContentType::Childrens => "childrens",
            ContentType::Cymru => "cymru",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ContentType {
    type Err = ArchiveError;

    /// Matches the archive slug exactly (lowercase, no surrounding whitespace).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.slug() == s)
            .ok_or_else(|| ArchiveError::UnrecognizedContentType(s.to_string()))
    }
}

/// A nominated entry within one award category.
///
/// The winner flag is positional: the first entry listed for a category is
/// assumed to be the winner. The archive markup carries no explicit marker,
/// so treat it as best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Nominee {
    name: String,
    contributor: String,
    winner: bool,
}

impl Nominee {
    pub fn new(name: impl Into<String>, contributor: impl Into<String>, winner: bool) -> Self {
        Self {
            name: name.into(),
            contributor: contributor.into(),
            winner,
        }
    }

    /// The nominated work or entry (the block's headline text).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nominated person(s); may be empty.
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    pub fn is_winner(&self) -> bool {
        self.winner
    }
}

/// Nominees of one category, in document order.
pub type CategoryResult = Vec<Nominee>;

/// Category title to nominees for a single year.
pub type YearResult = BTreeMap<String, CategoryResult>;

/// Year to categories. Years that could not be fetched are absent.
pub type AwardArchive = BTreeMap<u16, YearResult>;

/// The JSON document written for one collected section.
#[derive(Debug, Deserialize, Serialize)]
pub struct ArchiveSnapshot {
    /// Section slug, e.g. `"television"`.
    pub content_type: ContentType,
    /// RFC 3339 timestamp of when the collection finished.
    pub generated_at: String,
    /// Number of years requested from the archive.
    pub attempted_years: usize,
    /// Years that failed and are missing from `years`.
    pub skipped_years: Vec<u16>,
    pub years: AwardArchive,
}
