//! The national choropleth layer: one styled, tooltipped feature per state.

use crate::colormap::{Legend, StepColormap, NO_DATA_COLOR};
use serde::Serialize;
use serde_json::json;
use sie_census::geography::{Geometry, StateGeometry};

pub const BORDER_COLOR: &str = "black";
pub const BORDER_WEIGHT: u32 = 3;
pub const FILL_OPACITY: f64 = 1.0;

pub const TOOLTIP_STATE_LABEL: &str = "State:";
pub const TOOLTIP_INCOME_LABEL: &str = "2015 Median Income (USD):";

/// Polygon style for a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStyle {
    pub fill_color: String,
    pub color: String,
    pub weight: u32,
    pub fill_opacity: f64,
}

/// A `label value` pair in a hover tooltip.
///
/// Numbers stay raw so the browser can group them for the viewer's locale;
/// `null` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipField {
    pub label: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFeature {
    pub name: String,
    pub alpha2: String,
    pub median_income_2015: Option<f64>,
    pub style: FeatureStyle,
    pub tooltip: Vec<TooltipField>,
    pub geometry: Geometry,
}

/// All state features plus the legend (absent when no state has income data).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethLayer {
    pub features: Vec<ChoroplethFeature>,
    pub legend: Option<Legend>,
}

impl ChoroplethLayer {
    /// Style every state against a scale spanning the min to max state median.
    pub fn build(states: &[StateGeometry]) -> Self {
        let colormap = StepColormap::income_scale(states.iter().map(|s| s.median_income_2015));
        let features: Vec<ChoroplethFeature> = states
            .iter()
            .map(|state| {
                let fill_color = match &colormap {
                    Some(cmap) => cmap.fill_for(state.median_income_2015),
                    None => NO_DATA_COLOR,
                };
                ChoroplethFeature {
                    name: state.name.clone(),
                    alpha2: state.alpha2.clone(),
                    median_income_2015: state.median_income_2015,
                    style: FeatureStyle {
                        fill_color: fill_color.to_string(),
                        color: BORDER_COLOR.to_string(),
                        weight: BORDER_WEIGHT,
                        fill_opacity: FILL_OPACITY,
                    },
                    tooltip: vec![
                        TooltipField {
                            label: TOOLTIP_STATE_LABEL.to_string(),
                            value: json!(state.name),
                        },
                        TooltipField {
                            label: TOOLTIP_INCOME_LABEL.to_string(),
                            value: json!(state.median_income_2015),
                        },
                    ],
                    geometry: state.geometry.clone(),
                }
            })
            .collect();
        let no_data = features
            .iter()
            .filter(|f| f.median_income_2015.is_none())
            .count();
        log::info!(
            "[SIE Debug] choropleth: Styled {} states ({} without data)",
            features.len(),
            no_data
        );
        Self {
            features,
            legend: colormap.map(|cmap| cmap.legend()),
        }
    }

    /// Export as a GeoJSON FeatureCollection with style and tooltip in the properties.
    pub fn to_geojson(&self) -> serde_json::Value {
        let features: Vec<serde_json::Value> = self
            .features
            .iter()
            .map(|f| {
                json!({
                    "type": "Feature",
                    "id": f.alpha2,
                    "properties": {
                        "name": f.name,
                        "alpha2": f.alpha2,
                        "median_income_2015": f.median_income_2015,
                        "fill_color": f.style.fill_color,
                        "color": f.style.color,
                        "weight": f.style.weight,
                        "fill_opacity": f.style.fill_opacity,
                        "tooltip": f.tooltip,
                    },
                    "geometry": f.geometry,
                })
            })
            .collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
            "legend": self.legend,
        })
    }
}
