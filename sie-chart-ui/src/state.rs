//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sie_data::choropleth::ChoroplethLayer;
use sie_data::summary::CountyTable;
use sie_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the datasets are still loading
    pub loading: Signal<bool>,
    /// Error message if a load failed
    pub error_msg: Signal<Option<String>>,
    /// Currently selected state abbreviation
    pub selected_state: Signal<String>,
    /// Distinct states in the income table, sorted ascending
    pub states: Signal<Vec<String>>,
    /// County table view for the selected state
    pub county_table: Signal<Option<CountyTable>>,
    /// Styled choropleth layer (computed once after load)
    pub map_layer: Signal<Option<ChoroplethLayer>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_state: Signal::new(String::new()),
            states: Signal::new(Vec::new()),
            county_table: Signal::new(None),
            map_layer: Signal::new(None),
        }
    }
}
