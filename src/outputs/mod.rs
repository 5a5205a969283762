//! Output generation for collected archives.
//!
//! # Submodules
//!
//! - [`json`]: Writes an [`ArchiveSnapshot`](crate::models::ArchiveSnapshot) per section

pub mod json;
