use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

/// Column headers as published by the remote income CSV.
pub const COL_FIPS: &str = "fips";
pub const COL_COUNTY: &str = "county";
pub const COL_STATE: &str = "state";
pub const COL_INCOME_2015: &str = "income-2015";
/// 1989 median income adjusted to 2015 dollars. Not every copy of the dataset carries it.
pub const COL_INCOME_1989_ADJUSTED: &str = "income-1989a";
/// 1989 median income in actual 1989 dollars.
pub const COL_INCOME_1989_ACTUAL: &str = "income-1989b";
pub const COL_CHANGE: &str = "change";

/// One row of the county income dataset.
///
/// `fips` is kept verbatim as text; leading zeros are significant.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub fips: String,
    pub county: String,
    /// Two-letter state abbreviation
    pub state: String,
    /// Median household income in 2015 dollars
    pub income_2015: Option<f64>,
    /// Median household income in 1989, adjusted to 2015 dollars
    pub income_1989_adjusted: Option<f64>,
    /// Median household income in 1989, actual 1989 dollars
    pub income_1989_actual: Option<f64>,
    /// Percent change between 1989 (adjusted) and 2015
    pub change: Option<f64>,
}

/// The full county income dataset, in source order.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct IncomeTable {
    pub records: Vec<IncomeRecord>,
    /// Whether the source provided the `income-1989a` column at all.
    pub has_adjusted_1989: bool,
}

/// Coerce a CSV cell to a number. Anything that does not parse as a finite decimal
/// becomes `None`; this never fails.
pub fn coerce_numeric(ess: &str) -> Option<f64> {
    match ess.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Header positions resolved by name, since optional columns may be absent.
struct ColumnIndex {
    fips: usize,
    county: usize,
    state: usize,
    income_2015: usize,
    income_1989_adjusted: Option<usize>,
    income_1989_actual: Option<usize>,
    change: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            position(name)
                .ok_or_else(|| anyhow::anyhow!("income CSV is missing required column '{}'", name))
        };
        Ok(Self {
            fips: required(COL_FIPS)?,
            county: required(COL_COUNTY)?,
            state: required(COL_STATE)?,
            income_2015: required(COL_INCOME_2015)?,
            income_1989_adjusted: position(COL_INCOME_1989_ADJUSTED),
            income_1989_actual: position(COL_INCOME_1989_ACTUAL),
            change: position(COL_CHANGE),
        })
    }
}

fn text_at(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

fn number_at(record: &StringRecord, idx: Option<usize>) -> Option<f64> {
    idx.and_then(|i| record.get(i)).and_then(coerce_numeric)
}

impl IncomeTable {
    /// Parse the income CSV (with headers) into a table.
    ///
    /// Expected columns: `fips,county,state,income-2015[,income-1989a][,income-1989b][,change]`.
    /// Numeric cells that fail coercion become missing; short rows are tolerated.
    pub fn parse_income_csv(csv_object: &str) -> anyhow::Result<IncomeTable> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut missing_2015 = 0u32;
        for row in rdr.records() {
            let rho = row?;
            let record = IncomeRecord {
                fips: text_at(&rho, columns.fips),
                county: text_at(&rho, columns.county),
                state: text_at(&rho, columns.state),
                income_2015: number_at(&rho, Some(columns.income_2015)),
                income_1989_adjusted: number_at(&rho, columns.income_1989_adjusted),
                income_1989_actual: number_at(&rho, columns.income_1989_actual),
                change: number_at(&rho, columns.change),
            };
            if record.income_2015.is_none() {
                missing_2015 += 1;
            }
            records.push(record);
        }
        log::info!(
            "[SIE Debug] income: Parsed {} records, {} without a 2015 value",
            records.len(),
            missing_2015
        );
        Ok(IncomeTable {
            records,
            has_adjusted_1989: columns.income_1989_adjusted.is_some(),
        })
    }

    /// Fetch and parse the income CSV from a remote URL.
    #[cfg(feature = "api")]
    pub async fn fetch(client: &reqwest::Client, url: &str) -> anyhow::Result<IncomeTable> {
        let body = crate::sources::fetch_text(client, url).await?;
        IncomeTable::parse_income_csv(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
fips,county,state,income-2015,income-1989a,income-1989b,change
01001,Autauga County,AL,56580,51081,26898,10.8
01003,Baldwin County,AL,N/A,47348,24932,
48001,Anderson County,TX,42146,,17929,-4.1
";

    #[test]
    fn test_parse_income_csv() {
        let table = IncomeTable::parse_income_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.records.len(), 3);
        assert!(table.has_adjusted_1989);

        let autauga = &table.records[0];
        assert_eq!(autauga.county, "Autauga County");
        assert_eq!(autauga.state, "AL");
        assert_eq!(autauga.income_2015, Some(56580.0));
        assert_eq!(autauga.income_1989_adjusted, Some(51081.0));
        assert_eq!(autauga.income_1989_actual, Some(26898.0));
        assert_eq!(autauga.change, Some(10.8));
    }

    #[test]
    fn test_fips_keeps_leading_zeros() {
        let table = IncomeTable::parse_income_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.records[0].fips, "01001");
        assert_eq!(table.records[1].fips, "01003");
    }

    #[test]
    fn test_non_numeric_income_becomes_missing() {
        let table = IncomeTable::parse_income_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.records[1].income_2015, None);
        assert_eq!(table.records[1].change, None);
        assert_eq!(table.records[2].income_1989_adjusted, None);
        assert_eq!(table.records[2].change, Some(-4.1));
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric("45678"), Some(45678.0));
        assert_eq!(coerce_numeric(" 45678 "), Some(45678.0));
        assert_eq!(coerce_numeric("N/A"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("45,678"), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
    }

    #[test]
    fn test_missing_adjusted_column() {
        let csv_data = "\
fips,county,state,income-2015,income-1989b,change
06001,Alameda County,CA,79831,34959,
";
        let table = IncomeTable::parse_income_csv(csv_data).unwrap();
        assert!(!table.has_adjusted_1989);
        assert_eq!(table.records[0].income_1989_adjusted, None);
        assert_eq!(table.records[0].income_1989_actual, Some(34959.0));
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let csv_data = "fips,county,income-2015\n01001,Autauga County,56580\n";
        let err = IncomeTable::parse_income_csv(csv_data).unwrap_err();
        assert!(err.to_string().contains("'state'"));
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv_data = "\
fips,county,state,income-2015,income-1989a,income-1989b,change
02013,Aleutians East Borough,AK
";
        let table = IncomeTable::parse_income_csv(csv_data).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].income_2015, None);
    }

    #[test]
    fn test_parse_empty_csv() {
        let csv_data = "fips,county,state,income-2015,income-1989a,income-1989b,change\n";
        let table = IncomeTable::parse_income_csv(csv_data).unwrap();
        assert!(table.records.is_empty());
        assert!(table.has_adjusted_1989);
    }
}
