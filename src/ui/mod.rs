//! UI modules for the Globe Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, dataset source, and status
//! - Central canvas: Globe visualization
//! - Right panel: Globe and marker controls
//! - Bottom panel: Companion bar chart

mod canvas;
mod chart_panel;
mod right_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use chart_panel::render_chart_panel;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
