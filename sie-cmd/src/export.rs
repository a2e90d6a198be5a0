//! Export the choropleth layer as a GeoJSON FeatureCollection.

use crate::source::DataSource;
use log::info;
use sie_data::choropleth::ChoroplethLayer;
use std::path::Path;

/// Write the styled state features and legend to `output`.
pub async fn run_export_map(source: &DataSource, output: &str) -> anyhow::Result<()> {
    let states = source.load_state_geometry().await?;
    let layer = ChoroplethLayer::build(states);
    write_geojson(&layer, Path::new(output))?;
    info!(
        "Exported {} states to {}",
        layer.features.len(),
        output
    );
    Ok(())
}

pub fn write_geojson(layer: &ChoroplethLayer, path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(&layer.to_geojson())?;
    std::fs::write(path, body)?;
    Ok(())
}
