//! Dataset fetch pipeline.
//!
//! Fetches are async but egui's update() is synchronous, so results
//! travel over a channel from the fetch task back to the UI thread,
//! which polls with `try_recv` each frame. One fetch produces exactly
//! one terminal result: the parsed records or an error message.

use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;

use super::countries::{parse_rest_countries, CountryRecord};

/// REST Countries query for the fields the dataset needs.
pub const REST_COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,population,latlng";

/// Terminal result of a dataset fetch.
#[derive(Debug, Clone)]
pub enum FetchResult {
    /// Fetch and parse completed; records are unprepared.
    Success(Vec<CountryRecord>),
    /// Fetch failed with an error message.
    Error(String),
}

/// Channel-based bridge between the async fetch and the UI thread.
pub struct FetchChannel {
    sender: Sender<FetchResult>,
    receiver: Receiver<FetchResult>,
    in_flight: Cell<bool>,
}

impl Default for FetchChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: Cell::new(false),
        }
    }

    /// Spawns the fetch task for the REST Countries dataset.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context) {
        let sender = self.sender.clone();
        self.in_flight.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_countries().await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Native fetch on a worker thread using blocking HTTP.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context) {
        let sender = self.sender.clone();
        self.in_flight.set(true);

        std::thread::spawn(move || {
            let result = fetch_countries_blocking();
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<FetchResult> {
        let result = self.receiver.try_recv().ok();
        if result.is_some() {
            self.in_flight.set(false);
        }
        result
    }

    /// Whether a fetch has been started and not yet received.
    pub fn is_loading(&self) -> bool {
        self.in_flight.get()
    }
}

/// Performs the fetch via the browser fetch API.
#[cfg(target_arch = "wasm32")]
async fn fetch_countries() -> FetchResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = match web_sys::Request::new_with_str_and_init(REST_COUNTRIES_URL, &opts) {
        Ok(request) => request,
        Err(e) => return FetchResult::Error(format!("Failed to build request: {:?}", e)),
    };

    let Some(window) = web_sys::window() else {
        return FetchResult::Error("No window available".to_string());
    };

    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(value) => value,
        Err(e) => return FetchResult::Error(format!("Fetch failed: {:?}", e)),
    };

    let response: web_sys::Response = match response.dyn_into() {
        Ok(response) => response,
        Err(_) => return FetchResult::Error("Fetch returned a non-Response value".to_string()),
    };

    if !response.ok() {
        return FetchResult::Error(format!("HTTP {} from REST Countries", response.status()));
    }

    let text = match response.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(e) => return FetchResult::Error(format!("Failed to read body: {:?}", e)),
        },
        Err(e) => return FetchResult::Error(format!("Failed to read body: {:?}", e)),
    };

    log::info!("Fetched {} bytes from REST Countries", text.len());

    match parse_rest_countries(&text) {
        Ok(records) => FetchResult::Success(records),
        Err(e) => FetchResult::Error(format!("Failed to parse response: {}", e)),
    }
}

/// Blocking fetch for the native build.
#[cfg(not(target_arch = "wasm32"))]
fn fetch_countries_blocking() -> FetchResult {
    let response = match reqwest::blocking::get(REST_COUNTRIES_URL) {
        Ok(response) => response,
        Err(e) => return FetchResult::Error(format!("Fetch failed: {}", e)),
    };

    if !response.status().is_success() {
        return FetchResult::Error(format!("HTTP {} from REST Countries", response.status()));
    }

    let body = match response.text() {
        Ok(body) => body,
        Err(e) => return FetchResult::Error(format!("Failed to read body: {}", e)),
    };

    log::info!("Fetched {} bytes from REST Countries", body.len());

    match parse_rest_countries(&body) {
        Ok(records) => FetchResult::Success(records),
        Err(e) => FetchResult::Error(format!("Failed to parse response: {}", e)),
    }
}
