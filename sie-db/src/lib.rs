//! In-memory SQLite database layer for county income and state geometry.
//!
//! Parsed records from `sie-census` are loaded into an in-memory SQLite
//! database; typed query methods serve the dashboard views.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Loaded once per process from the remote sources; there is no refresh path
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use sie_census::income::IncomeTable;
//! use sie_db::Database;
//!
//! let db = Database::new().unwrap();
//! let table = IncomeTable::parse_income_csv(
//!     "fips,county,state,income-2015\n48453,Travis County,TX,61939\n",
//! )
//! .unwrap();
//! db.load_county_income(&table).unwrap();
//!
//! let states = db.query_states().unwrap();
//! assert_eq!(states, vec!["TX".to_string()]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `counties` - County income records in source order
//! - `dataset_columns` - Optional source columns that were present
//! - `state_medians` - Median 2015 income per state abbreviation
//! - `state_abbreviations` - Full state name to two-letter code
//! - `state_boundaries` - State boundary geometry as GeoJSON text
//!
//! The per-state geometry record is derived by an INNER JOIN of boundaries with
//! abbreviations followed by a LEFT JOIN onto the state medians.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping county income and state geometry.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
