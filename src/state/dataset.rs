//! Dataset source selection and fetch status.

/// Where the displayed dataset comes from.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Country populations fetched from the REST Countries API.
    #[default]
    RestCountries,
    /// Compiled-in regional sales figures.
    BuiltinSales,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::RestCountries => "REST Countries (population)",
            DataSource::BuiltinSales => "Built-in (sales)",
        }
    }

    /// Name of the metric this source provides, for chart axes.
    pub fn metric_label(&self) -> &'static str {
        match self {
            DataSource::RestCountries => "Population",
            DataSource::BuiltinSales => "Sales",
        }
    }

    pub fn all() -> &'static [DataSource] {
        &[DataSource::RestCountries, DataSource::BuiltinSales]
    }
}

/// State for dataset acquisition.
pub struct DatasetState {
    /// Selected source
    pub source: DataSource,

    /// A fetch is in flight
    pub loading: bool,

    /// Last fetch failure, shown until the next successful load
    pub last_error: Option<String>,

    /// A (re)load of the selected source was requested by the UI
    pub reload_requested: bool,
}

impl Default for DatasetState {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            loading: false,
            last_error: None,
            // Kick off the initial fetch on the first frame
            reload_requested: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sources_have_distinct_labels() {
        let labels: Vec<&str> = DataSource::all().iter().map(|s| s.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[test]
    fn test_initial_state_requests_a_load() {
        let state = DatasetState::default();
        assert!(state.reload_requested);
        assert!(!state.loading);
        assert!(state.last_error.is_none());
    }
}
