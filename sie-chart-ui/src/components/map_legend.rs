//! Legend for the stepped choropleth color scale.

use dioxus::prelude::*;
use sie_data::colormap::Legend;
use sie_utils::format::format_currency;

#[derive(Props, Clone, PartialEq)]
pub struct MapLegendProps {
    pub legend: Legend,
}

/// One swatch per band, labelled with its value range, plus the no-data swatch.
#[component]
pub fn MapLegend(props: MapLegendProps) -> Element {
    let legend = props.legend;
    let bands: Vec<(String, String)> = legend
        .bands
        .iter()
        .map(|band| {
            let label = format!(
                "{} - {}",
                format_currency(Some(band.lower)),
                format_currency(Some(band.upper))
            );
            (band.color.clone(), label)
        })
        .collect();
    let range = format!(
        "{} to {}",
        format_currency(Some(legend.vmin)),
        format_currency(Some(legend.vmax))
    );

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px;",
            div {
                style: "font-weight: bold; margin-bottom: 6px;",
                "{legend.caption} ({range})"
            }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                for (color, label) in bands.iter() {
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        span {
                            style: "display: inline-block; width: 16px; height: 12px; background: {color}; border: 1px solid #999; border-radius: 2px;",
                        }
                        "{label}"
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 16px; height: 12px; background: {legend.no_data_color}; border: 1px solid #999; border-radius: 2px;",
                    }
                    "No data"
                }
            }
        }
    }
}
