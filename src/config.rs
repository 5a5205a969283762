//! Runtime configuration.
//!
//! Settings come from an optional YAML file; missing keys fall back to the
//! defaults below and CLI flags override both.
//!
//! ```yaml
//! base_url: "http://awards.bafta.org/"
//! final_year: 2022
//! concurrency: 4
//! timeout_secs: 30
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://awards.bafta.org/";

/// Years are collected up to, but not including, this one.
pub const DEFAULT_FINAL_YEAR: u16 = 2022;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Archive root; year pages live under `award/<year>/<section>`.
    pub base_url: String,
    /// Exclusive upper bound of the year range.
    pub final_year: u16,
    /// Maximum number of year pages in flight. `1` fetches strictly in order.
    pub concurrency: usize,
    /// Per-request timeout. Unset means the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            final_year: DEFAULT_FINAL_YEAR,
            concurrency: 1,
            timeout_secs: None,
        }
    }
}

impl ArchiveConfig {
    /// Load a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&raw)?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
