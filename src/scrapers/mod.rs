//! Archive scrapers.
//!
//! Each scraper turns one archive page into structured results. The scrapers
//! never fetch directly; they go through a [`PageFetcher`](crate::fetch::PageFetcher)
//! so they can be driven from memory in tests.
//!
//! # Supported Archives
//!
//! | Archive | Module | Sections |
//! |---------|--------|----------|
//! | BAFTA Awards | [`bafta`] | television, film, games, tvcraft, childrens, cymru |

pub mod bafta;
