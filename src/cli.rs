//! Command-line interface definitions.
//!
//! Flags override values from the YAML config file, which override the
//! built-in defaults in [`ArchiveConfig`].

use crate::config::ArchiveConfig;
use clap::Parser;

/// Collect BAFTA award nominations for one archive section.
///
/// # Examples
///
/// ```sh
/// # Print every television year as JSON
/// award_archive television
///
/// # Write games.json into ./json, four pages at a time
/// award_archive games -j ./json --concurrency 4
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Archive section: television, film, games, tvcraft, childrens or cymru
    pub content_type: String,

    /// Output directory for the JSON file (prints to stdout when omitted)
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Optional path to a config.yaml file
    #[arg(short, long, env = "AWARD_ARCHIVE_CONFIG")]
    pub config: Option<String>,

    /// Archive root URL
    #[arg(long, env = "AWARD_ARCHIVE_BASE_URL")]
    pub base_url: Option<String>,

    /// Collect years up to, but not including, this one
    #[arg(long)]
    pub final_year: Option<u16>,

    /// Maximum number of year pages fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Apply any flags that were given on top of `config`.
    pub fn apply_overrides(&self, mut config: ArchiveConfig) -> ArchiveConfig {
        if let Some(ref base_url) = self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(final_year) = self.final_year {
            config.final_year = final_year;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["award_archive", "film", "--json-output-dir", "./json"]);

        assert_eq!(cli.content_type, "film");
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
        assert_eq!(cli.concurrency, None);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["award_archive", "games", "-j", "/tmp/json", "-c", "awards.yaml"]);

        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
        assert_eq!(cli.config.as_deref(), Some("awards.yaml"));
    }

    #[test]
    fn test_unknown_content_type_is_accepted_by_parser() {
        let cli = Cli::parse_from(["award_archive", "unknownType"]);
        assert_eq!(cli.content_type, "unknownType");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "award_archive",
            "television",
            "--base-url",
            "http://localhost:9000/",
            "--concurrency",
            "8",
        ]);
        let config = cli.apply_overrides(ArchiveConfig::default());

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.final_year, 2022);
        assert_eq!(config.timeout_secs, None);
    }
}
