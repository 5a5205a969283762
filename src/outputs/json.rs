//! JSON output for collected archives.
//!
//! One file per section, overwritten on every run:
//! ```text
//! json_output_dir/
//! ├── television.json
//! ├── film.json
//! └── games.json
//! ```

use crate::error::Result;
use crate::models::ArchiveSnapshot;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write an [`ArchiveSnapshot`] to `{json_output_dir}/{content_type}.json`.
///
/// Creates the directory if needed. An existing file for the same section is
/// overwritten.
///
/// # Arguments
///
/// * `snapshot` - The collected section to serialize
/// * `json_output_dir` - Base directory for JSON output
///
/// # Returns
///
/// The path of the file written.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.as_ref().display()))]
pub async fn write_snapshot(
    snapshot: &ArchiveSnapshot,
    json_output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let dir = json_output_dir.as_ref();
    let json = serde_json::to_string_pretty(snapshot)?;

    if let Err(e) = fs::create_dir_all(dir).await {
        error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = dir.join(format!("{}.json", snapshot.content_type.slug()));
    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(
        path = %path.display(),
        years = snapshot.years.len(),
        "Wrote archive JSON"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AwardArchive, ContentType, Nominee, YearResult};

    #[tokio::test]
    async fn test_write_snapshot() {
        let dir = std::env::temp_dir().join(format!("award_archive_json_{}", std::process::id()));

        let mut year = YearResult::new();
        year.insert(
            "Leading Actress".to_string(),
            vec![
                Nominee::new("Phoebe Waller-Bridge", "Fleabag", true),
                Nominee::new("Jodie Comer", "Killing Eve", false),
            ],
        );
        let mut years = AwardArchive::new();
        years.insert(2017, year);
        let snapshot = ArchiveSnapshot {
            content_type: ContentType::Television,
            generated_at: "2021-06-01T00:00:00+00:00".to_string(),
            attempted_years: 1,
            skipped_years: vec![],
            years,
        };

        let path = write_snapshot(&snapshot, &dir).await.unwrap();
        assert_eq!(path, dir.join("television.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        let back: ArchiveSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(back.years[&2017]["Leading Actress"].len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
