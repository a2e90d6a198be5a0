//! State boundaries, state abbreviations and the joined per-state geometry record.

use serde::{Deserialize, Serialize};

/// A GeoJSON position: longitude, latitude (and optionally altitude).
pub type Position = Vec<f64>;

/// Boundary geometry of a state. Only areal GeoJSON geometries are meaningful here.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

/// A state boundary as published in the GeoJSON source, keyed by full state name.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateBoundary {
    pub name: String,
    pub geometry: Geometry,
}

/// Full state name to two-letter code, e.g. `{"name": "Texas", "alpha-2": "TX"}`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StateAbbreviation {
    pub name: String,
    #[serde(rename = "alpha-2")]
    pub alpha2: String,
}

/// A state boundary joined with its abbreviation and its median 2015 county income.
///
/// `median_income_2015` is `None` when no county record for the state carries a 2015 value.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StateGeometry {
    pub name: String,
    pub alpha2: String,
    pub geometry: Geometry,
    pub median_income_2015: Option<f64>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    geometry: Option<Geometry>,
}

#[derive(Deserialize, Default)]
struct FeatureProperties {
    name: Option<String>,
}

impl StateBoundary {
    /// Parse a GeoJSON FeatureCollection of state boundaries.
    ///
    /// Features without a `name` property or without geometry cannot be joined and are skipped.
    pub fn parse_feature_collection(json: &str) -> anyhow::Result<Vec<StateBoundary>> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let total = collection.features.len();
        let boundaries: Vec<StateBoundary> = collection
            .features
            .into_iter()
            .filter_map(|feature| match (feature.properties.name, feature.geometry) {
                (Some(name), Some(geometry)) => Some(StateBoundary { name, geometry }),
                (name, _) => {
                    log::warn!("Skipping boundary feature without name or geometry: {:?}", name);
                    None
                }
            })
            .collect();
        log::info!(
            "[SIE Debug] geography: Parsed {} of {} boundary features",
            boundaries.len(),
            total
        );
        Ok(boundaries)
    }

    /// Fetch and parse the state boundary GeoJSON from a remote URL.
    #[cfg(feature = "api")]
    pub async fn fetch(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<StateBoundary>> {
        let body = crate::sources::fetch_text(client, url).await?;
        StateBoundary::parse_feature_collection(&body)
    }
}

impl StateAbbreviation {
    /// Parse a JSON array of `{"name", "alpha-2"}` records.
    pub fn parse_abbreviation_json(json: &str) -> anyhow::Result<Vec<StateAbbreviation>> {
        let abbreviations: Vec<StateAbbreviation> = serde_json::from_str(json)?;
        log::info!(
            "[SIE Debug] geography: Parsed {} state abbreviations",
            abbreviations.len()
        );
        Ok(abbreviations)
    }

    /// Fetch and parse the abbreviation list from a remote URL.
    #[cfg(feature = "api")]
    pub async fn fetch(
        client: &reqwest::Client,
        url: &str,
    ) -> anyhow::Result<Vec<StateAbbreviation>> {
        let body = crate::sources::fetch_text(client, url).await?;
        StateAbbreviation::parse_abbreviation_json(&body)
    }
}
