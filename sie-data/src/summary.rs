//! County table view and industry callout for the selected state.

use crate::stats::median;
use serde::Serialize;
use sie_census::income::IncomeRecord;
use sie_census::industry::{industry_for, vibe_for};
use sie_utils::format::format_currency;

pub const TABLE_SUBTITLE: &str = "Includes 1989 and 2015 values, with state medians.";
pub const ADJUSTED_1989_UNAVAILABLE: &str =
    "Adjusted income-1989 data not available in this dataset.";

/// One displayed county row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRow {
    pub county: String,
    pub income_1989_adjusted: Option<f64>,
    pub income_2015: Option<f64>,
}

/// Counties of one state, already sorted by 2015 income (descending, missing last),
/// with the state medians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyTable {
    pub state: String,
    pub rows: Vec<CountyRow>,
    /// Whether the source had the adjusted 1989 column; controls the column and its median.
    pub show_adjusted_1989: bool,
    pub median_2015: Option<f64>,
    pub median_1989_adjusted: Option<f64>,
}

impl CountyTable {
    pub fn new(state: &str, records: &[IncomeRecord], show_adjusted_1989: bool) -> Self {
        let median_2015 = median(records.iter().map(|r| r.income_2015));
        let median_1989_adjusted = if show_adjusted_1989 {
            median(records.iter().map(|r| r.income_1989_adjusted))
        } else {
            None
        };
        Self {
            state: state.to_string(),
            rows: records
                .iter()
                .map(|r| CountyRow {
                    county: r.county.clone(),
                    income_1989_adjusted: r.income_1989_adjusted,
                    income_2015: r.income_2015,
                })
                .collect(),
            show_adjusted_1989,
            median_2015,
            median_1989_adjusted,
        }
    }

    pub fn title(&self) -> String {
        format!("County Incomes in {}", self.state)
    }

    /// "Median (1989 adjusted): $X", or the unavailable notice when the column is absent.
    pub fn median_1989_line(&self) -> String {
        if self.show_adjusted_1989 {
            format!(
                "Median (1989 adjusted): {}",
                format_currency(self.median_1989_adjusted)
            )
        } else {
            ADJUSTED_1989_UNAVAILABLE.to_string()
        }
    }

    pub fn median_2015_line(&self) -> String {
        format!("Median (2015): {}", format_currency(self.median_2015))
    }
}

/// Dominant industry and its quote for the selected state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryCallout {
    pub state: String,
    pub industry: String,
    pub quote: String,
    pub emoji: String,
}

impl IndustryCallout {
    pub fn for_state(state: &str) -> Self {
        let industry = industry_for(state);
        let vibe = vibe_for(industry);
        Self {
            state: state.to_string(),
            industry: industry.to_string(),
            quote: vibe.quote.to_string(),
            emoji: vibe.emoji.to_string(),
        }
    }

    pub fn headline(&self) -> String {
        format!("{} Income Source: {}", self.state, self.industry)
    }

    pub fn tagline(&self) -> String {
        format!("{} {}", self.quote, self.emoji)
    }
}
