//! Typed query methods for the dashboard views.
//!
//! All queries return types from `sie-census`, `sie-data` or [`crate::models`]
//! that can be serialized to JSON for consumption by D3.js components.

use crate::models::DatasetInfo;
use crate::Database;
use rusqlite::params;
use sie_census::geography::{Geometry, StateGeometry};
use sie_census::income::{IncomeRecord, COL_INCOME_1989_ADJUSTED};
use sie_data::summary::CountyTable;

impl Database {
    // ───────────────────── Income Queries ─────────────────────

    /// Distinct non-empty state abbreviations in the income table, sorted ascending.
    pub fn query_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT state FROM counties
             WHERE state <> ''
             ORDER BY state",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[SIE Debug] query: query_states returned {} states",
            rows.len()
        );
        Ok(rows)
    }

    /// County records for one state, sorted by 2015 income descending.
    ///
    /// Records without a 2015 value sort last; ties keep source order.
    pub fn query_counties(&self, state: &str) -> anyhow::Result<Vec<IncomeRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT fips, county, state, income_2015, income_1989_adjusted,
                    income_1989_actual, pct_change
             FROM counties
             WHERE state = ?1
             ORDER BY income_2015 IS NULL, income_2015 DESC, row_id",
        )?;
        let rows = stmt
            .query_map(params![state], |row| {
                Ok(IncomeRecord {
                    fips: row.get(0)?,
                    county: row.get(1)?,
                    state: row.get(2)?,
                    income_2015: row.get(3)?,
                    income_1989_adjusted: row.get(4)?,
                    income_1989_actual: row.get(5)?,
                    change: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SIE Debug] query: query_counties({}) returned {} records",
            state,
            rows.len()
        );
        Ok(rows)
    }

    /// Record count and optional-column presence of the loaded income table.
    pub fn query_dataset_info(&self) -> anyhow::Result<DatasetInfo> {
        let conn = self.conn.borrow();
        let records: i64 = conn.query_row("SELECT COUNT(*) FROM counties", [], |row| row.get(0))?;
        let adjusted: i64 = conn.query_row(
            "SELECT COUNT(*) FROM dataset_columns WHERE name = ?1",
            params![COL_INCOME_1989_ADJUSTED],
            |row| row.get(0),
        )?;
        Ok(DatasetInfo {
            records: records as usize,
            has_adjusted_1989: adjusted > 0,
        })
    }

    /// The county table view for one state: sorted rows plus state medians.
    pub fn query_county_table(&self, state: &str) -> anyhow::Result<CountyTable> {
        let records = self.query_counties(state)?;
        let info = self.query_dataset_info()?;
        Ok(CountyTable::new(state, &records, info.has_adjusted_1989))
    }

    // ───────────────────── Geography Queries ─────────────────────

    /// Joined per-state geometry in boundary feature order.
    ///
    /// Boundaries whose name has no abbreviation are dropped (inner join).
    /// States without any 2015 income keep their row with a missing median (left join).
    pub fn query_state_geometry(&self) -> anyhow::Result<Vec<StateGeometry>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT b.name, a.alpha2, b.geometry, m.median_income_2015
             FROM state_boundaries b
             INNER JOIN state_abbreviations a ON a.name = b.name
             LEFT JOIN state_medians m ON m.state = a.alpha2
             ORDER BY b.row_id",
        )?;
        let raw_rows: Vec<(String, String, String, Option<f64>)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut results = Vec::with_capacity(raw_rows.len());
        for (name, alpha2, geometry_json, median_income_2015) in raw_rows {
            let geometry: Geometry = serde_json::from_str(&geometry_json)?;
            results.push(StateGeometry {
                name,
                alpha2,
                geometry,
                median_income_2015,
            });
        }
        log::info!(
            "[SIE Debug] query: query_state_geometry returned {} states",
            results.len()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use sie_census::geography::{Geometry, StateAbbreviation, StateBoundary};
    use sie_census::income::IncomeTable;
    use sie_data::summary::IndustryCallout;

    const INCOME_CSV: &str = "\
fips,county,state,income-2015,income-1989a,income-1989b,change
01001,Autauga County,AL,56580,51081,26898,10.8
01003,Baldwin County,AL,52387,47348,24932,10.6
48001,Anderson County,TX,30000,33000,17929,-9.1
48003,Andrews County,TX,N/A,46000,24000,
48005,Angelina County,TX,50000,44000,19000,13.6
48007,Aransas County,TX,40000,38000,16000,5.3
06001,Alameda County,CA,79831,71000,34959,12.4
";

    const BOUNDARIES_JSON: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Alabama"},
         "geometry": {"type": "Polygon", "coordinates": [[[-88.2, 35.0], [-85.6, 34.9], [-85.0, 31.0], [-88.4, 30.4], [-88.2, 35.0]]]}},
        {"type": "Feature", "properties": {"name": "Texas"},
         "geometry": {"type": "Polygon", "coordinates": [[[-101.8, 36.5], [-94.0, 33.6], [-97.1, 25.9], [-106.6, 31.8], [-101.8, 36.5]]]}},
        {"type": "Feature", "properties": {"name": "Wyoming"},
         "geometry": {"type": "Polygon", "coordinates": [[[-111.0, 45.0], [-104.0, 45.0], [-104.0, 41.0], [-111.0, 41.0], [-111.0, 45.0]]]}},
        {"type": "Feature", "properties": {"name": "Puerto Rico"},
         "geometry": {"type": "Polygon", "coordinates": [[[-67.2, 18.5], [-65.6, 18.4], [-65.8, 18.0], [-67.2, 18.0], [-67.2, 18.5]]]}}
    ]}"#;

    const ABBREVIATIONS_JSON: &str = r#"[
        {"name": "Alabama", "alpha-2": "AL"},
        {"name": "California", "alpha-2": "CA"},
        {"name": "Texas", "alpha-2": "TX"},
        {"name": "Wyoming", "alpha-2": "WY"}
    ]"#;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_county_income(&IncomeTable::parse_income_csv(INCOME_CSV).unwrap())
            .unwrap();
        db.load_state_boundaries(&StateBoundary::parse_feature_collection(BOUNDARIES_JSON).unwrap())
            .unwrap();
        db.load_state_abbreviations(
            &StateAbbreviation::parse_abbreviation_json(ABBREVIATIONS_JSON).unwrap(),
        )
        .unwrap();
        db
    }

    #[test]
    fn query_states_sorted_ascending() {
        let db = sample_db();
        assert_eq!(db.query_states().unwrap(), vec!["AL", "CA", "TX"]);
    }

    #[test]
    fn query_counties_filters_by_state() {
        let db = sample_db();
        let counties = db.query_counties("AL").unwrap();
        assert_eq!(counties.len(), 2);
        assert!(counties.iter().all(|c| c.state == "AL"));
    }

    #[test]
    fn query_counties_sorts_descending_with_missing_last() {
        let db = Database::new().unwrap();
        let csv = "\
fips,county,state,income-2015
48001,First County,TX,30000
48003,Second County,TX,
48005,Third County,TX,50000
";
        db.load_county_income(&IncomeTable::parse_income_csv(csv).unwrap())
            .unwrap();
        let incomes: Vec<Option<f64>> = db
            .query_counties("TX")
            .unwrap()
            .iter()
            .map(|c| c.income_2015)
            .collect();
        assert_eq!(incomes, vec![Some(50000.0), Some(30000.0), None]);
    }

    #[test]
    fn query_counties_unknown_state_is_empty() {
        let db = sample_db();
        assert!(db.query_counties("ZZ").unwrap().is_empty());
    }

    #[test]
    fn query_county_table_for_texas() {
        let db = sample_db();
        let table = db.query_county_table("TX").unwrap();
        let counties: Vec<&str> = table.rows.iter().map(|r| r.county.as_str()).collect();
        assert_eq!(
            counties,
            vec!["Angelina County", "Aransas County", "Anderson County", "Andrews County"]
        );
        assert!(table.show_adjusted_1989);
        assert_eq!(table.median_2015, Some(40000.0));
        assert_eq!(table.median_1989_adjusted, Some(41000.0));
        assert_eq!(table.median_2015_line(), "Median (2015): $40,000");

        let callout = IndustryCallout::for_state(&table.state);
        assert_eq!(callout.industry, "Oil & Gas");
        assert_eq!(callout.quote, "Fueled by fire, driving the economy");
    }

    #[test]
    fn query_county_table_without_adjusted_column() {
        let db = Database::new().unwrap();
        let csv = "fips,county,state,income-2015\n06001,Alameda County,CA,79831\n";
        db.load_county_income(&IncomeTable::parse_income_csv(csv).unwrap())
            .unwrap();
        let table = db.query_county_table("CA").unwrap();
        assert!(!table.show_adjusted_1989);
        assert_eq!(
            table.median_1989_line(),
            "Adjusted income-1989 data not available in this dataset."
        );
    }

    #[test]
    fn query_dataset_info() {
        let db = sample_db();
        let info = db.query_dataset_info().unwrap();
        assert_eq!(info.records, 7);
        assert!(info.has_adjusted_1989);
    }

    #[test]
    fn query_states_skips_empty_state() {
        let db = Database::new().unwrap();
        let csv = "\
fips,county,state,income-2015
48001,Anderson County,TX,42146
01001,Autauga County,AL,56580
48003,Andrews County,TX,70121
00000,United States,,53889
";
        db.load_county_income(&IncomeTable::parse_income_csv(csv).unwrap())
            .unwrap();
        assert_eq!(db.query_states().unwrap(), vec!["AL", "TX"]);
    }

    #[test]
    fn query_state_geometry_attaches_medians() {
        let db = sample_db();
        let states = db.query_state_geometry().unwrap();
        // AL: (56580 + 52387) / 2
        let alabama = states.iter().find(|s| s.alpha2 == "AL").unwrap();
        assert_eq!(alabama.median_income_2015, Some(54483.5));
        // TX: 30000, 40000, 50000 (N/A ignored)
        let texas = states.iter().find(|s| s.alpha2 == "TX").unwrap();
        assert_eq!(texas.median_income_2015, Some(40000.0));
    }

    #[test]
    fn query_state_geometry_drops_unmatched_boundaries() {
        let db = sample_db();
        let states = db.query_state_geometry().unwrap();
        let names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alabama", "Texas", "Wyoming"]);
        assert!(!names.contains(&"Puerto Rico"));
    }

    #[test]
    fn query_state_geometry_keeps_states_without_income() {
        let db = sample_db();
        let states = db.query_state_geometry().unwrap();
        let wyoming = states.iter().find(|s| s.alpha2 == "WY").unwrap();
        assert!(wyoming.median_income_2015.is_none());

        let texas = states.iter().find(|s| s.alpha2 == "TX").unwrap();
        assert_eq!(texas.median_income_2015, Some(40000.0));
        assert!(matches!(texas.geometry, Geometry::Polygon(_)));
    }

    #[test]
    fn query_state_geometry_without_income_loaded() {
        let db = Database::new().unwrap();
        db.load_state_boundaries(&StateBoundary::parse_feature_collection(BOUNDARIES_JSON).unwrap())
            .unwrap();
        db.load_state_abbreviations(
            &StateAbbreviation::parse_abbreviation_json(ABBREVIATIONS_JSON).unwrap(),
        )
        .unwrap();
        let states = db.query_state_geometry().unwrap();
        assert_eq!(states.len(), 3);
        assert!(states.iter().all(|s| s.median_income_2015.is_none()));
    }
}
