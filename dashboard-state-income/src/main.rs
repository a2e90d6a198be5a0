//! State Income Explorer
//!
//! Single page showing county median household incomes for a selected state
//! next to a choropleth of state medians across the U.S.
//!
//! Data flow:
//! 1. On mount, `load_dashboard()` fetches the county income CSV, the state
//!    boundaries GeoJSON and the name-to-abbreviation list, and loads them into an
//!    in-memory SQLite database. This happens once per page load.
//! 2. The styled choropleth layer is built once from the joined state geometry and
//!    handed to `renderChoropleth()`.
//! 3. Each change of the selected state queries the county table and passes the rows
//!    to `renderDataTable()`; the medians and industry callout re-render with it.

use dioxus::prelude::*;
use sie_census::sources::Sources;
use sie_chart_ui::components::{
    ChartContainer, ChartHeader, ColumnDescriptions, CountyMedians, ErrorDisplay,
    IncomeCallout, LoadingSpinner, MapLegend, StateSelector,
};
use sie_chart_ui::js_bridge;
use sie_chart_ui::loader::load_dashboard;
use sie_chart_ui::state::AppState;
use sie_data::choropleth::ChoroplethLayer;
use sie_data::summary::TABLE_SUBTITLE;

const PAGE_TITLE: &str = "State Income Explorer";
const HEADING: &str = "U.S. Income Heatmap";

/// County table container DOM element ID used by D3.js to render into.
const TABLE_ID: &str = "county-income-table";
/// Choropleth container DOM element ID.
const MAP_ID: &str = "state-income-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("state-income-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load all remote datasets once on mount
    use_effect(move || {
        spawn(async move {
            match load_dashboard(&Sources::default()).await {
                Ok(data) => {
                    let layer = ChoroplethLayer::build(&data.state_geometry);
                    if let Some(first) = data.states.first() {
                        log::info!("[SIE Debug] dashboard: Default selection: {}", first);
                        state.selected_state.set(first.clone());
                    }
                    state.states.set(data.states);
                    state.map_layer.set(Some(layer));
                    state.db.set(Some(data.db));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load dashboard data: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                    state.loading.set(false);
                }
            }
        });
    });

    // Recompute the county table whenever the selection changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let selected = (state.selected_state)();
        if selected.is_empty() {
            return;
        }

        js_bridge::init_charts();

        let table = match db.query_county_table(&selected) {
            Ok(t) => t,
            Err(e) => {
                log::error!("Failed to query counties for {}: {}", selected, e);
                js_bridge::destroy_chart(TABLE_ID);
                return;
            }
        };

        let mut columns = vec![serde_json::json!({"key": "county", "label": "County"})];
        if table.show_adjusted_1989 {
            columns.push(serde_json::json!({
                "key": "income_1989_adjusted",
                "label": "Income 1989 (adjusted)",
                "format": "currency",
            }));
        }
        columns.push(serde_json::json!({
            "key": "income_2015",
            "label": "Income 2015",
            "format": "currency",
        }));

        let data_json = serde_json::to_string(&table.rows).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "columns": columns,
            "emptyMessage": format!("No counties listed for {}.", selected),
        }))
        .unwrap_or_default();

        js_bridge::render_data_table(TABLE_ID, &data_json, &config_json);
        state.county_table.set(Some(table));
    });

    // Draw the map once the layer is available
    use_effect(move || {
        let geojson = match &*state.map_layer.read() {
            Some(layer) => layer.to_geojson().to_string(),
            None => return,
        };
        js_bridge::init_charts();
        let config_json = serde_json::json!({"width": 960, "height": 600}).to_string();
        js_bridge::render_choropleth(MAP_ID, &geojson, &config_json);
    });

    let selected = (state.selected_state)();
    let county_table = (state.county_table)();
    let legend = state
        .map_layer
        .read()
        .as_ref()
        .and_then(|layer| layer.legend.clone());

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        div {
            style: "padding: 16px; max-width: 1000px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 { style: "margin: 0 0 8px 0;", "{HEADING}" }
            ColumnDescriptions {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                StateSelector {}

                if let Some(table) = county_table.as_ref() {
                    ChartHeader {
                        title: table.title(),
                        caption: TABLE_SUBTITLE.to_string(),
                    }
                }
                ChartContainer {
                    id: TABLE_ID.to_string(),
                    min_height: 200,
                }
                if let Some(table) = county_table {
                    CountyMedians { table }
                }

                if !selected.is_empty() {
                    IncomeCallout { state: selected.clone() }
                }

                ChartHeader { title: "Median Household Income by State".to_string() }
                ChartContainer {
                    id: MAP_ID.to_string(),
                    min_height: 400,
                }
                if let Some(legend) = legend {
                    MapLegend { legend }
                }
            }
        }
    }
}
