//! Loads the three remote datasets into a fresh in-memory database.
//!
//! The dashboard calls [`load_dashboard`] once on mount and keeps the result in
//! `AppState` for the lifetime of the page; nothing refreshes or invalidates it.

use crate::js_bridge::fetch_text;
use sie_census::geography::{StateAbbreviation, StateBoundary, StateGeometry};
use sie_census::income::IncomeTable;
use sie_census::sources::Sources;
use sie_db::Database;

/// Everything the views read after startup.
pub struct DashboardData {
    pub db: Database,
    pub states: Vec<String>,
    pub state_geometry: Vec<StateGeometry>,
}

/// Fetch the county income CSV, then the state boundaries and abbreviations,
/// and join them. Any fetch or parse failure aborts the whole load.
pub async fn load_dashboard(sources: &Sources) -> anyhow::Result<DashboardData> {
    let db = Database::new()?;

    let income_csv = fetch_text(&sources.county_income_csv).await?;
    let income = IncomeTable::parse_income_csv(&income_csv)?;
    db.load_county_income(&income)?;

    let boundaries_json = fetch_text(&sources.state_boundaries).await?;
    let abbreviations_json = fetch_text(&sources.state_abbreviations).await?;
    db.load_state_boundaries(&StateBoundary::parse_feature_collection(&boundaries_json)?)?;
    db.load_state_abbreviations(&StateAbbreviation::parse_abbreviation_json(
        &abbreviations_json,
    )?)?;

    let states = db.query_states()?;
    let state_geometry = db.query_state_geometry()?;
    log::info!(
        "[SIE Debug] loader: Dashboard ready with {} states in the selector and {} on the map",
        states.len(),
        state_geometry.len()
    );
    Ok(DashboardData {
        db,
        states,
        state_geometry,
    })
}
