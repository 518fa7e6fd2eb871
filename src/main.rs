#![warn(clippy::all)]

//! Globe Workbench - A web-based 3D globe and chart visualization tool.
//!
//! Renders a rotating globe with per-country data markers sized by a
//! metric (population or sales) and a companion bar chart. Datasets
//! come from the REST Countries API or a built-in table.

mod data;
mod geo;
mod globe;
mod state;
mod ui;

use data::{builtin_sales_records, FetchChannel, PreparedDataset};
use eframe::egui;
use state::{AppState, DataSource};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Globe Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct GlobeApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Channel for async dataset fetch operations
    fetch_channel: FetchChannel,

    /// Monotonic instant of the previous frame, for spin timing
    last_frame: web_time::Instant,
}

impl GlobeApp {
    /// Creates a new GlobeApp instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(),
            fetch_channel: FetchChannel::new(),
            last_frame: web_time::Instant::now(),
        }
    }

    /// Starts loading the selected dataset source.
    fn load_selected_source(&mut self, ctx: &egui::Context) {
        match self.state.dataset_state.source {
            DataSource::BuiltinSales => {
                self.state.dataset = PreparedDataset::prepare(builtin_sales_records());
                self.state.dataset_state.last_error = None;
                self.state.status_message = format!(
                    "Loaded built-in dataset ({} records)",
                    self.state.dataset.len()
                );
            }
            DataSource::RestCountries => {
                if self.fetch_channel.is_loading() {
                    return;
                }
                log::info!("Fetching country data from REST Countries");
                self.state.dataset_state.loading = true;
                self.state.status_message = "Fetching country data...".to_string();
                self.fetch_channel.fetch(ctx.clone());
            }
        }
    }

}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle dataset (re)load requests from the UI
        if self.state.dataset_state.reload_requested {
            self.state.dataset_state.reload_requested = false;
            self.load_selected_source(ctx);
        }

        // Check for completed fetch operations. Results for a source
        // the user has since switched away from are dropped in
        // apply_fetch_result.
        if let Some(result) = self.fetch_channel.try_recv() {
            self.state.apply_fetch_result(result);
        }

        // Advance the auto-spin. Spin speed is radians per nominal
        // 60 Hz frame, so scale by elapsed time to stay frame-rate
        // independent.
        let now = web_time::Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.state.viz_state.spin_enabled {
            self.state.viz_state.yaw += self.state.viz_state.spin_speed * elapsed * 60.0;
            self.state.viz_state.yaw %= std::f32::consts::TAU;
        }

        // Render UI panels in the correct order for egui layout
        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_chart_panel(ctx, &mut self.state);
        ui::render_right_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state);
    }
}
