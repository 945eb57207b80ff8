use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::data::sst::reference_date_for;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Where the two sources live and how the SST day offsets are anchored.
/// Every field has a default, so a partial (or absent) file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub profiles_path: PathBuf,
    pub sst_path: PathBuf,
    /// Day offset 0. When absent, September 1 of last year.
    pub reference_date: Option<NaiveDate>,
    /// Rows shown in each tabular preview.
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            profiles_path: PathBuf::from("data/BATS_temperature_profiles.xlsx"),
            sst_path: PathBuf::from("data/OCN330_BATS_SST.xlsx"),
            reference_date: None,
            preview_rows: 20,
        }
    }
}

impl DashboardConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load `path` if it exists; fall back to defaults otherwise, logging a
    /// warning when the file exists but cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("{} not found, using default sources", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    /// The configured reference date, or the one derived from `today`.
    pub fn reference_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| reference_date_for(today))
    }

    /// The configured reference date, or the one derived from the wall clock.
    pub fn resolve_reference_date(&self) -> NaiveDate {
        self.reference_date_or(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "sst_path": "data/sst.csv" }"#).unwrap();
        assert_eq!(config.sst_path, PathBuf::from("data/sst.csv"));
        assert_eq!(config.profiles_path, DashboardConfig::default().profiles_path);
        assert_eq!(config.preview_rows, 20);
        assert_eq!(config.reference_date, None);
    }

    #[test]
    fn reference_date_parses_as_iso() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "reference_date": "2019-09-01" }"#).unwrap();
        assert_eq!(config.reference_date_or(ymd(2026, 10, 18)), ymd(2019, 9, 1));
    }

    #[test]
    fn reference_date_defaults_to_last_september() {
        let config = DashboardConfig::default();
        assert_eq!(config.reference_date_or(ymd(2026, 10, 18)), ymd(2025, 9, 1));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let file = crate::data::fixtures::text_file(".json", b"{ not json");
        assert!(DashboardConfig::from_file(file.path()).is_err());
        assert_eq!(
            DashboardConfig::load_or_default(file.path()),
            DashboardConfig::default()
        );
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = Path::new("definitely-not-here/dashboard.json");
        assert_eq!(DashboardConfig::load_or_default(path), DashboardConfig::default());
        assert!(DashboardConfig::from_file(path).is_err());
    }
}
