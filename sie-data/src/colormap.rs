//! Stepped (discrete) color scale for the choropleth map.
//!
//! The value range `[vmin, vmax]` is cut into equal-width bands, one per color.
//! Values at or below `vmin` take the first color and values at or above `vmax`
//! take the last; missing values take [`NO_DATA_COLOR`] and never enter the scale.

use serde::Serialize;

/// Six steps from red (lowest income) through tan to green (highest income).
pub const INCOME_COLORS: [&str; 6] = [
    "#ff0000", "#fc8d59", "#fefa8b", "#d9ef8b", "#31ee5d", "#02ff12",
];

/// Fill for states without a median income.
pub const NO_DATA_COLOR: &str = "lightgray";

/// Caption shown on the legend.
pub const LEGEND_CAPTION: &str = "2015 Median Household Income (USD)";

/// A color scale with a fixed number of discrete bands.
#[derive(Debug, Clone, PartialEq)]
pub struct StepColormap {
    /// Never empty.
    colors: Vec<String>,
    /// Band edges, `colors.len() + 1` values from vmin to vmax.
    index: Vec<f64>,
    caption: String,
}

/// One band of the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendBand {
    pub color: String,
    pub lower: f64,
    pub upper: f64,
}

/// Legend describing the scale's value range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub caption: String,
    pub vmin: f64,
    pub vmax: f64,
    pub bands: Vec<LegendBand>,
    pub no_data_color: String,
}

impl StepColormap {
    /// Build a scale over `[vmin, vmax]` with evenly spaced band edges.
    ///
    /// Returns `None` for an empty palette or a non-finite bound.
    pub fn new(colors: &[&str], vmin: f64, vmax: f64, caption: &str) -> Option<Self> {
        if colors.is_empty() || !vmin.is_finite() || !vmax.is_finite() {
            return None;
        }
        let n = colors.len();
        let index = (0..=n)
            .map(|i| vmin + (vmax - vmin) * i as f64 / n as f64)
            .collect();
        Some(Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            index,
            caption: caption.to_string(),
        })
    }

    /// The income scale spanning the minimum to maximum of the present values.
    ///
    /// Returns `None` when no value is present, in which case everything is "no data".
    pub fn income_scale<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (vmin, vmax) = values
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;
        Self::new(&INCOME_COLORS, vmin, vmax, LEGEND_CAPTION)
    }

    pub fn vmin(&self) -> f64 {
        self.index[0]
    }

    pub fn vmax(&self) -> f64 {
        self.index[self.index.len() - 1]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Color of the band containing `x`.
    pub fn color_for(&self, x: f64) -> &str {
        let last = self.colors.len() - 1;
        if x <= self.vmin() {
            return &self.colors[0];
        }
        if x >= self.vmax() {
            return &self.colors[last];
        }
        // 0 < i < n edges lie at or below x
        let i = self.index.iter().filter(|edge| **edge <= x).count();
        &self.colors[i.saturating_sub(1).min(last)]
    }

    /// Fill color for an optional value; missing values get [`NO_DATA_COLOR`].
    pub fn fill_for(&self, value: Option<f64>) -> &str {
        match value {
            Some(v) if v.is_finite() => self.color_for(v),
            _ => NO_DATA_COLOR,
        }
    }

    pub fn legend(&self) -> Legend {
        let bands = self
            .colors
            .iter()
            .zip(self.index.windows(2))
            .map(|(color, edges)| LegendBand {
                color: color.clone(),
                lower: edges[0],
                upper: edges[1],
            })
            .collect();
        Legend {
            caption: self.caption.clone(),
            vmin: self.vmin(),
            vmax: self.vmax(),
            bands,
            no_data_color: NO_DATA_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> StepColormap {
        StepColormap::new(&INCOME_COLORS, 30000.0, 90000.0, LEGEND_CAPTION).unwrap()
    }

    #[test]
    fn test_band_edges_are_even() {
        let legend = scale().legend();
        assert_eq!(legend.bands.len(), 6);
        assert_eq!(legend.bands[0].lower, 30000.0);
        assert_eq!(legend.bands[0].upper, 40000.0);
        assert_eq!(legend.bands[5].lower, 80000.0);
        assert_eq!(legend.bands[5].upper, 90000.0);
        assert_eq!(legend.caption, "2015 Median Household Income (USD)");
    }

    #[test]
    fn test_extremes_take_first_and_last_color() {
        let cmap = scale();
        assert_eq!(cmap.color_for(30000.0), "#ff0000");
        assert_eq!(cmap.color_for(90000.0), "#02ff12");
        assert_eq!(cmap.color_for(10000.0), "#ff0000");
        assert_eq!(cmap.color_for(120000.0), "#02ff12");
    }

    #[test]
    fn test_values_inside_bands() {
        let cmap = scale();
        assert_eq!(cmap.color_for(35000.0), "#ff0000");
        assert_eq!(cmap.color_for(40000.0), "#fc8d59");
        assert_eq!(cmap.color_for(55000.0), "#fefa8b");
        assert_eq!(cmap.color_for(65000.0), "#d9ef8b");
        assert_eq!(cmap.color_for(79999.0), "#31ee5d");
        assert_eq!(cmap.color_for(85000.0), "#02ff12");
    }

    #[test]
    fn test_missing_value_is_no_data() {
        let cmap = scale();
        assert_eq!(cmap.fill_for(None), NO_DATA_COLOR);
        assert_eq!(cmap.fill_for(Some(f64::NAN)), NO_DATA_COLOR);
        assert_eq!(cmap.fill_for(Some(30000.0)), "#ff0000");
    }

    #[test]
    fn test_income_scale_spans_present_values() {
        let cmap = StepColormap::income_scale([Some(52000.0), None, Some(41000.0), Some(75000.0)])
            .unwrap();
        assert_eq!(cmap.vmin(), 41000.0);
        assert_eq!(cmap.vmax(), 75000.0);
        assert_eq!(cmap.colors().len(), 6);
    }

    #[test]
    fn test_income_scale_without_values() {
        assert!(StepColormap::income_scale([None, None]).is_none());
    }

    #[test]
    fn test_degenerate_range() {
        let cmap = StepColormap::new(&INCOME_COLORS, 50000.0, 50000.0, LEGEND_CAPTION).unwrap();
        assert_eq!(cmap.color_for(50000.0), "#ff0000");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(StepColormap::new(&[], 0.0, 1.0, LEGEND_CAPTION).is_none());
        assert!(StepColormap::new(&INCOME_COLORS, f64::NAN, 1.0, LEGEND_CAPTION).is_none());
        let single = StepColormap::new(&["#000000"], 0.0, 1.0, LEGEND_CAPTION).unwrap();
        assert_eq!(single.color_for(0.5), "#000000");
        assert_eq!(single.legend().bands.len(), 1);
    }
}
