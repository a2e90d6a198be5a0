//! Median aggregation that skips missing values.

use sie_census::income::IncomeRecord;
use std::collections::BTreeMap;

/// Median of the present values; `None` if there are none.
///
/// An even count averages the two middle values.
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut present: Vec<f64> = values.into_iter().flatten().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.total_cmp(b));
    let mid = present.len() / 2;
    if present.len() % 2 == 0 {
        Some((present[mid - 1] + present[mid]) / 2.0)
    } else {
        Some(present[mid])
    }
}

/// Median 2015 income per state abbreviation.
///
/// States whose records carry no 2015 value are absent from the map.
pub fn state_medians(records: &[IncomeRecord]) -> BTreeMap<String, f64> {
    let mut grouped: BTreeMap<&str, Vec<Option<f64>>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.state.as_str())
            .or_default()
            .push(record.income_2015);
    }
    grouped
        .into_iter()
        .filter_map(|(state, values)| median(values).map(|m| (state.to_string(), m)))
        .collect()
}
