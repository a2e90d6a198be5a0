//! Remote locations of the datasets behind the dashboard.

/// County, state and national median household income (1989 and 2015).
pub const COUNTY_INCOME_CSV_URL: &str =
    "https://raw.githubusercontent.com/pri-data/50-states/master/data/income-counties-states-national.csv";

/// GeoJSON feature collection of U.S. state boundaries, keyed by `properties.name`.
pub const STATE_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/python-visualization/folium-example-data/main/us_states.json";

/// JSON array of `{"name": ..., "alpha-2": ...}` state abbreviation records.
pub const STATE_ABBREVIATIONS_URL: &str =
    "https://gist.githubusercontent.com/tvpmb/4734703/raw/b54d03154c339ed3047c66fefcece4727dfc931a/US%2520State%2520List";

/// The three remote resources the dashboard loads at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Sources {
    pub county_income_csv: String,
    pub state_boundaries: String,
    pub state_abbreviations: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            county_income_csv: COUNTY_INCOME_CSV_URL.to_string(),
            state_boundaries: STATE_BOUNDARIES_URL.to_string(),
            state_abbreviations: STATE_ABBREVIATIONS_URL.to_string(),
        }
    }
}

/// GET a URL and return the body as text.
///
/// Uses the client's default timeouts. Transport errors and non-success statuses are
/// reported as [`FetchError`](sie_utils::error::FetchError); there is no retry.
#[cfg(feature = "api")]
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, sie_utils::error::FetchError> {
    use sie_utils::error::FetchError;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::new(url, e))?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("Bad response status for {}: {}", url, status);
        return Err(FetchError::new(url, format!("HTTP {}", status)));
    }
    let body = response.text().await.map_err(|e| FetchError::new(url, e))?;
    log::info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_point_at_published_datasets() {
        let sources = Sources::default();
        assert!(sources.county_income_csv.ends_with("income-counties-states-national.csv"));
        assert!(sources.state_boundaries.ends_with("us_states.json"));
        assert_eq!(sources.state_abbreviations, STATE_ABBREVIATIONS_URL);
    }
}
