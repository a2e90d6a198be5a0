//! Explains the columns of the county income dataset.

use dioxus::prelude::*;
use sie_census::income::{
    COL_CHANGE, COL_COUNTY, COL_FIPS, COL_INCOME_1989_ACTUAL, COL_INCOME_1989_ADJUSTED,
    COL_INCOME_2015, COL_STATE,
};

const DESCRIPTIONS: [(&str, &str); 7] = [
    (COL_FIPS, "Federal Information Processing Standards code identifying the county"),
    (COL_COUNTY, "County name"),
    (COL_STATE, "Two-letter state abbreviation"),
    (COL_INCOME_2015, "Median household income in 2015 (USD)"),
    (
        COL_INCOME_1989_ADJUSTED,
        "Median household income in 1989, adjusted to 2015 dollars",
    ),
    (
        COL_INCOME_1989_ACTUAL,
        "Median household income in 1989, in actual 1989 dollars",
    ),
    (COL_CHANGE, "Percent change in income from 1989 (adjusted) to 2015"),
];

#[component]
pub fn ColumnDescriptions() -> Element {
    rsx! {
        div {
            style: "margin: 8px 0 16px 0; font-size: 13px;",
            h4 { style: "margin: 0 0 4px 0;", "Column Descriptions" }
            ul {
                style: "margin: 0; padding-left: 20px;",
                for (column, description) in DESCRIPTIONS.iter() {
                    li {
                        code { "{column}" }
                        ": {description}"
                    }
                }
            }
        }
    }
}
