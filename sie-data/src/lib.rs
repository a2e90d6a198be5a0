//! Aggregation and presentation logic for county and state income data.
//!
//! This crate turns parsed income records and joined state geometry into
//! forms suitable for tables, callouts and the choropleth map.

pub mod choropleth;
pub mod colormap;
pub mod stats;
pub mod summary;
