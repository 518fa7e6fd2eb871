//! Application state management.
//!
//! State is organized into logical groupings that correspond to
//! different areas of functionality: globe view settings, dataset
//! acquisition, and the chart panel.

mod chart;
mod dataset;
mod viz;

pub use chart::ChartState;
pub use dataset::{DataSource, DatasetState};
pub use viz::VizState;

use crate::data::{builtin_sales_records, FetchResult, PreparedDataset};

/// Root application state containing all sub-states.
pub struct AppState {
    /// Globe view settings
    pub viz_state: VizState,

    /// Dataset source and fetch status
    pub dataset_state: DatasetState,

    /// Chart panel options
    pub chart_state: ChartState,

    /// The dataset currently on display, already prepared
    pub dataset: PreparedDataset,

    /// Application status message displayed in the top bar
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        // Show the built-in dataset until the first fetch resolves
        let dataset = PreparedDataset::prepare(builtin_sales_records());

        Self {
            viz_state: VizState::default(),
            dataset_state: DatasetState::default(),
            chart_state: ChartState::default(),
            dataset,
            status_message: "Ready".to_string(),
        }
    }

    /// Applies a completed fetch result.
    ///
    /// The fetch only ever targets the REST Countries source, so a
    /// result arriving after the user switched to another source is
    /// stale and gets dropped; the currently selected dataset stays on
    /// display.
    pub fn apply_fetch_result(&mut self, result: FetchResult) {
        self.dataset_state.loading = false;

        if self.dataset_state.source != DataSource::RestCountries {
            log::info!("Dropping fetch result: source changed while loading");
            return;
        }

        match result {
            FetchResult::Success(records) => {
                let fetched = records.len();
                self.dataset = PreparedDataset::prepare(records);
                self.dataset_state.last_error = None;
                self.status_message = format!(
                    "Showing top {} of {} countries",
                    self.dataset.len(),
                    fetched
                );
                log::info!(
                    "Dataset loaded: {} fetched, {} displayed",
                    fetched,
                    self.dataset.len()
                );
            }
            FetchResult::Error(msg) => {
                log::error!("Error fetching data: {}", msg);
                self.status_message = format!("Fetch failed: {}", msg);
                self.dataset_state.last_error = Some(msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CountryRecord;

    #[test]
    fn test_new_state_has_a_displayable_dataset() {
        let state = AppState::new();
        assert!(!state.dataset.is_empty());
        assert!(state.dataset.max_metric >= state.dataset.min_metric);
    }

    #[test]
    fn test_fetch_success_installs_prepared_dataset() {
        let mut state = AppState::new();
        state.dataset_state.loading = true;

        state.apply_fetch_result(FetchResult::Success(vec![
            CountryRecord::new("Brazil", 215_313_498.0, -10.0, -55.0),
            CountryRecord::new("India", 1_417_173_173.0, 20.0, 77.0),
        ]));

        assert!(!state.dataset_state.loading);
        assert!(state.dataset_state.last_error.is_none());
        assert_eq!(state.dataset.len(), 2);
        assert_eq!(state.dataset.records[0].name, "India");
    }

    #[test]
    fn test_fetch_error_keeps_current_dataset() {
        let mut state = AppState::new();
        let before = state.dataset.clone();
        state.dataset_state.loading = true;

        state.apply_fetch_result(FetchResult::Error("network unreachable".to_string()));

        assert!(!state.dataset_state.loading);
        assert!(state.dataset_state.last_error.is_some());
        assert_eq!(state.dataset.records, before.records);
    }

    #[test]
    fn test_fetch_result_after_source_switch_is_dropped() {
        let mut state = AppState::new();
        state.dataset_state.loading = true;

        // User switches to the built-in source while the initial
        // REST Countries fetch is still in flight
        state.dataset_state.source = DataSource::BuiltinSales;
        let displayed = state.dataset.clone();

        state.apply_fetch_result(FetchResult::Success(vec![CountryRecord::new(
            "India",
            1_417_173_173.0,
            20.0,
            77.0,
        )]));

        // The stale result is dropped, not installed over the
        // selected dataset
        assert!(!state.dataset_state.loading);
        assert_eq!(state.dataset.records, displayed.records);
        assert_eq!(state.dataset.min_metric, displayed.min_metric);
        assert_eq!(state.dataset.max_metric, displayed.max_metric);
    }
}
