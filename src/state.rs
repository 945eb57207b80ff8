use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::DashboardConfig;
use crate::data::error::PipelineError;
use crate::data::pipeline::{run_profiles, run_sst};
use crate::data::profile::ProfilePair;
use crate::data::sst::{season_spans, temperature_extent, SeasonSpan, SstRecord};

// ---------------------------------------------------------------------------
// SST view: cleaned records plus the reductions the chart needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SstSeries {
    pub records: Vec<SstRecord>,
    pub spans: Vec<SeasonSpan>,
    pub extent: Option<(f64, f64)>,
}

impl SstSeries {
    pub fn new(records: Vec<SstRecord>) -> Self {
        let spans = season_spans(&records);
        let extent = temperature_extent(&records);
        Self { records, spans, extent }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Each stage keeps its own
/// outcome so a failure in one never hides the other.
pub struct AppState {
    pub profiles_path: PathBuf,
    pub sst_path: PathBuf,
    pub reference_date: NaiveDate,
    pub preview_rows: usize,

    /// Outcome of the profile stage (None until first run).
    pub profiles: Option<Result<ProfilePair, PipelineError>>,

    /// Outcome of the SST stage (None until first run).
    pub sst: Option<Result<SstSeries, PipelineError>>,
}

impl AppState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            profiles_path: config.profiles_path.clone(),
            sst_path: config.sst_path.clone(),
            reference_date: config.resolve_reference_date(),
            preview_rows: config.preview_rows,
            profiles: None,
            sst: None,
        }
    }

    /// Re-read both sources.
    pub fn reload(&mut self) {
        self.reload_profiles();
        self.reload_sst();
    }

    pub fn reload_profiles(&mut self) {
        let outcome = run_profiles(&self.profiles_path);
        if let Err(e) = &outcome {
            log::error!("Profile stage failed ({}): {e}", e.kind());
        }
        self.profiles = Some(outcome);
    }

    pub fn reload_sst(&mut self) {
        let outcome = run_sst(&self.sst_path, self.reference_date).map(SstSeries::new);
        if let Err(e) = &outcome {
            log::error!("SST stage failed ({}): {e}", e.kind());
        }
        self.sst = Some(outcome);
    }

    pub fn set_profiles_path(&mut self, path: PathBuf) {
        self.profiles_path = path;
        self.reload_profiles();
    }

    pub fn set_sst_path(&mut self, path: PathBuf) {
        self.sst_path = path;
        self.reload_sst();
    }

    /// Re-anchor the SST day offsets.
    pub fn set_reference_date(&mut self, date: NaiveDate) {
        self.reference_date = date;
        self.reload_sst();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::text_file;

    #[test]
    fn broken_profiles_do_not_block_sst() {
        let sst = text_file(".csv", b"0,18.2\n121,15.0\n241,22.0\n");

        let config = DashboardConfig {
            profiles_path: PathBuf::from("no/such/profiles.xlsx"),
            sst_path: sst.path().to_path_buf(),
            reference_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            preview_rows: 20,
        };
        let mut state = AppState::from_config(&config);
        state.reload();

        assert!(matches!(state.profiles, Some(Err(PipelineError::SourceUnreadable { .. }))));
        let series = state.sst.unwrap().unwrap();
        assert_eq!(series.records.len(), 3);
        assert_eq!(series.spans.len(), 3);
        assert_eq!(series.extent, Some((15.0, 22.0)));
    }

    #[test]
    fn reference_date_change_redates_records() {
        let sst = text_file(".csv", b"31,18.2\n");

        let config = DashboardConfig {
            sst_path: sst.path().to_path_buf(),
            reference_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            ..DashboardConfig::default()
        };
        let mut state = AppState::from_config(&config);
        state.reload_sst();
        let before = state.sst.as_ref().unwrap().as_ref().unwrap().records[0].date;
        state.set_reference_date(NaiveDate::from_ymd_opt(2019, 9, 1).unwrap());
        let after = state.sst.as_ref().unwrap().as_ref().unwrap().records[0].date;

        assert_eq!(before, NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
        assert_eq!(after, NaiveDate::from_ymd_opt(2019, 10, 2).unwrap());
    }
}
