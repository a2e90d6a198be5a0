//! Plain-text reports for the state map layer and the county table.

use crate::source::DataSource;
use log::info;
use sie_data::choropleth::ChoroplethLayer;
use sie_data::summary::{CountyTable, IndustryCallout, TABLE_SUBTITLE};
use sie_utils::format::{format_currency, format_thousands, MISSING};
use std::fmt::Write;

/// Print every mapped state with its median income and fill color, then the legend.
pub async fn run_states(source: &DataSource) -> anyhow::Result<()> {
    let states = source.load_state_geometry().await?;
    let layer = ChoroplethLayer::build(states);
    print!("{}", render_state_report(&layer));
    Ok(())
}

/// Print the county table view for a state (or the first state when none is given).
pub async fn run_counties(source: &DataSource, state: Option<&str>) -> anyhow::Result<()> {
    let db = source.database().await?;
    let states = db.query_states()?;
    let selected = match state {
        Some(s) => {
            let s = s.trim().to_uppercase();
            if !states.contains(&s) {
                anyhow::bail!("Unknown state '{}'. Available: {}", s, states.join(", "));
            }
            s
        }
        None => match states.first() {
            Some(first) => first.clone(),
            None => anyhow::bail!("The income dataset contains no states"),
        },
    };
    info!("Rendering county table for {}", selected);

    let table = db.query_county_table(&selected)?;
    let callout = IndustryCallout::for_state(&selected);
    print!("{}", render_county_report(&table, &callout));
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), format_thousands)
}

/// County table, medians and industry callout as text.
pub fn render_county_report(table: &CountyTable, callout: &IndustryCallout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", table.title());
    let _ = writeln!(out, "{}", TABLE_SUBTITLE);
    let _ = writeln!(out);

    if table.show_adjusted_1989 {
        let _ = writeln!(out, "{:<40} {:>14} {:>14}", "county", "income-1989a", "income-2015");
        for row in &table.rows {
            let _ = writeln!(
                out,
                "{:<40} {:>14} {:>14}",
                row.county,
                cell(row.income_1989_adjusted),
                cell(row.income_2015)
            );
        }
    } else {
        let _ = writeln!(out, "{:<40} {:>14}", "county", "income-2015");
        for row in &table.rows {
            let _ = writeln!(out, "{:<40} {:>14}", row.county, cell(row.income_2015));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", table.median_1989_line());
    let _ = writeln!(out, "{}", table.median_2015_line());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", callout.headline());
    let _ = writeln!(out, "{}", callout.tagline());
    out
}

/// Per-state medians with their fill colors, followed by the legend bands.
pub fn render_state_report(layer: &ChoroplethLayer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<24} {:>6} {:>14} {:>10}", "state", "code", "median-2015", "fill");
    for f in &layer.features {
        let _ = writeln!(
            out,
            "{:<24} {:>6} {:>14} {:>10}",
            f.name,
            f.alpha2,
            format_currency(f.median_income_2015),
            f.style.fill_color
        );
    }
    let _ = writeln!(out);
    match &layer.legend {
        Some(legend) => {
            let _ = writeln!(out, "{}", legend.caption);
            for band in &legend.bands {
                let _ = writeln!(
                    out,
                    "  {:<8} {} - {}",
                    band.color,
                    format_currency(Some(band.lower)),
                    format_currency(Some(band.upper))
                );
            }
            let _ = writeln!(out, "  {:<8} no data", legend.no_data_color);
        }
        None => {
            let _ = writeln!(out, "No state has 2015 income data.");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::mock_sources;
    use sie_census::geography::{Geometry, StateGeometry};
    use sie_census::income::IncomeRecord;
    use wiremock::MockServer;

    fn record(county: &str, adjusted: Option<f64>, income_2015: Option<f64>) -> IncomeRecord {
        IncomeRecord {
            fips: "48001".to_string(),
            county: county.to_string(),
            state: "TX".to_string(),
            income_2015,
            income_1989_adjusted: adjusted,
            income_1989_actual: None,
            change: None,
        }
    }

    #[test]
    fn county_report_lists_rows_medians_and_callout() {
        let table = CountyTable::new(
            "TX",
            &[
                record("Andrews County", Some(52000.0), Some(70121.0)),
                record("Anderson County", None, None),
            ],
            true,
        );
        let report = render_county_report(&table, &IndustryCallout::for_state("TX"));
        assert!(report.starts_with("County Incomes in TX\n"));
        assert!(report.contains("income-1989a"));
        assert!(report.contains("70,121"));
        assert!(report.contains("Anderson County"));
        assert!(report.contains("N/A"));
        assert!(report.contains("Median (1989 adjusted): $52,000"));
        assert!(report.contains("Median (2015): $70,121"));
        assert!(report.contains("TX Income Source: Oil & Gas"));
    }

    #[test]
    fn county_report_without_adjusted_column() {
        let table = CountyTable::new("TX", &[record("Andrews County", None, Some(70121.0))], false);
        let report = render_county_report(&table, &IndustryCallout::for_state("TX"));
        assert!(!report.contains("income-1989a"));
        assert!(report.contains("Adjusted income-1989 data not available in this dataset."));
    }

    #[test]
    fn state_report_shows_colors_and_legend() {
        let square = Geometry::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.0]]]);
        let layer = ChoroplethLayer::build(&[
            StateGeometry {
                name: "Alabama".to_string(),
                alpha2: "AL".to_string(),
                geometry: square.clone(),
                median_income_2015: Some(40000.0),
            },
            StateGeometry {
                name: "Wyoming".to_string(),
                alpha2: "WY".to_string(),
                geometry: square,
                median_income_2015: None,
            },
        ]);
        let report = render_state_report(&layer);
        assert!(report.contains("Alabama"));
        assert!(report.contains("$40,000"));
        assert!(report.contains("lightgray"));
        assert!(report.contains("2015 Median Household Income (USD)"));
    }

    #[tokio::test]
    async fn run_counties_rejects_unknown_state() {
        let server = MockServer::start().await;
        let source = DataSource::new(mock_sources(&server, 1, 0).await).unwrap();
        let err = run_counties(&source, Some("zz")).await.unwrap_err();
        assert!(err.to_string().contains("Unknown state 'ZZ'"));
        run_counties(&source, Some("tx")).await.unwrap();
    }
}
