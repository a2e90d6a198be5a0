//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// **Income tables:**
/// - `counties` - One row per source record; `row_id` keeps the source order
/// - `dataset_columns` - Names of optional CSV columns that were present
/// - `state_medians` - Median 2015 income per state (only states with data)
///
/// **Geography tables:**
/// - `state_abbreviations` - Full state name to two-letter code
/// - `state_boundaries` - Boundary geometry as GeoJSON text; `row_id` keeps feature order
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS counties (
        row_id INTEGER PRIMARY KEY,
        fips TEXT NOT NULL,
        county TEXT NOT NULL,
        state TEXT NOT NULL,
        income_2015 REAL,
        income_1989_adjusted REAL,
        income_1989_actual REAL,
        pct_change REAL
    );
    CREATE INDEX IF NOT EXISTS idx_counties_state ON counties(state);

    CREATE TABLE IF NOT EXISTS dataset_columns (
        name TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS state_medians (
        state TEXT PRIMARY KEY,
        median_income_2015 REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS state_abbreviations (
        name TEXT PRIMARY KEY,
        alpha2 TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS state_boundaries (
        row_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        geometry TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_boundaries_name ON state_boundaries(name);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = [
            "counties",
            "dataset_columns",
            "state_medians",
            "state_abbreviations",
            "state_boundaries",
        ];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
