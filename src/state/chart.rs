//! Chart panel state.

/// Display options for the companion bar chart.
pub struct ChartState {
    /// Show the chart panel
    pub visible: bool,

    /// Panel height in points
    pub height: f32,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            visible: true,
            height: 180.0,
        }
    }
}
