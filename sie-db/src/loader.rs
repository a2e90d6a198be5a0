//! Loading functions for populating the in-memory SQLite database.
//!
//! Each loader takes records already parsed by `sie-census` and inserts
//! them into the corresponding table.

use crate::Database;
use rusqlite::params;
use sie_census::geography::{StateAbbreviation, StateBoundary};
use sie_census::income::{IncomeTable, COL_INCOME_1989_ADJUSTED};
use sie_data::stats::state_medians;

impl Database {
    /// Load the county income table, replacing any previously loaded records.
    ///
    /// Also records whether the adjusted 1989 column was present and computes
    /// the per-state 2015 medians (missing values ignored).
    pub fn load_county_income(&self, table: &IncomeTable) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(
            "DELETE FROM counties; DELETE FROM dataset_columns; DELETE FROM state_medians;",
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO counties (row_id, fips, county, state, income_2015,
                     income_1989_adjusted, income_1989_actual, pct_change)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for (row_id, r) in table.records.iter().enumerate() {
                stmt.execute(params![
                    row_id as i64,
                    r.fips,
                    r.county,
                    r.state,
                    r.income_2015,
                    r.income_1989_adjusted,
                    r.income_1989_actual,
                    r.change,
                ])?;
            }

            if table.has_adjusted_1989 {
                tx.execute(
                    "INSERT INTO dataset_columns (name) VALUES (?1)",
                    params![COL_INCOME_1989_ADJUSTED],
                )?;
            }

            let medians = state_medians(&table.records);
            let mut stmt = tx.prepare(
                "INSERT INTO state_medians (state, median_income_2015) VALUES (?1, ?2)",
            )?;
            for (state, median) in &medians {
                stmt.execute(params![state, median])?;
            }
            log::info!(
                "[SIE Debug] loader: Computed medians for {} states",
                medians.len()
            );
        }
        tx.commit()?;
        log::info!(
            "[SIE Debug] loader: Loaded {} income records",
            table.records.len()
        );
        Ok(())
    }

    /// Load the full-name to two-letter code list.
    ///
    /// Duplicate names keep the last entry.
    pub fn load_state_abbreviations(
        &self,
        abbreviations: &[StateAbbreviation],
    ) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for a in abbreviations {
            conn.execute(
                "INSERT OR REPLACE INTO state_abbreviations (name, alpha2) VALUES (?1, ?2)",
                params![a.name, a.alpha2],
            )?;
            count += 1;
        }
        log::info!("[SIE Debug] loader: Loaded {} state abbreviations", count);
        Ok(())
    }

    /// Load state boundaries, replacing any previously loaded ones.
    ///
    /// Geometry is stored as GeoJSON text; feature order is preserved.
    pub fn load_state_boundaries(&self, boundaries: &[StateBoundary]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM state_boundaries", [])?;
        for (row_id, b) in boundaries.iter().enumerate() {
            let geometry = serde_json::to_string(&b.geometry)?;
            conn.execute(
                "INSERT INTO state_boundaries (row_id, name, geometry) VALUES (?1, ?2, ?3)",
                params![row_id as i64, b.name, geometry],
            )?;
        }
        log::info!(
            "[SIE Debug] loader: Loaded {} state boundaries",
            boundaries.len()
        );
        Ok(())
    }
}
