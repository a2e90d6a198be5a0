//! Memoized access to the remote datasets.
//!
//! Each dataset is fetched at most once per process and kept for the rest of
//! the run; there is no invalidation or refresh. A failed load is not cached,
//! so the error surfaces to the caller unchanged.

use log::info;
use sie_census::geography::{StateAbbreviation, StateBoundary, StateGeometry};
use sie_census::income::IncomeTable;
use sie_census::sources::Sources;
use sie_db::Database;
use tokio::sync::OnceCell;

pub struct DataSource {
    client: reqwest::Client,
    sources: Sources,
    db: Database,
    county_income: OnceCell<IncomeTable>,
    state_geometry: OnceCell<Vec<StateGeometry>>,
}

impl DataSource {
    pub fn new(sources: Sources) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            sources,
            db: Database::new()?,
            county_income: OnceCell::new(),
            state_geometry: OnceCell::new(),
        })
    }

    /// The county income table, fetched and loaded into the database on first use.
    pub async fn load_county_income(&self) -> anyhow::Result<&IncomeTable> {
        self.county_income
            .get_or_try_init(|| async {
                info!("Loading county income from {}", self.sources.county_income_csv);
                let table =
                    IncomeTable::fetch(&self.client, &self.sources.county_income_csv).await?;
                self.db.load_county_income(&table)?;
                Ok::<_, anyhow::Error>(table)
            })
            .await
    }

    /// The database with the county income table loaded.
    pub async fn database(&self) -> anyhow::Result<&Database> {
        self.load_county_income().await?;
        Ok(&self.db)
    }

    /// Per-state geometry joined with abbreviations and median 2015 income.
    ///
    /// Forces the county income load first, since the medians come from it.
    pub async fn load_state_geometry(&self) -> anyhow::Result<&[StateGeometry]> {
        let states = self
            .state_geometry
            .get_or_try_init(|| async {
                self.load_county_income().await?;
                info!("Loading state boundaries from {}", self.sources.state_boundaries);
                let boundaries =
                    StateBoundary::fetch(&self.client, &self.sources.state_boundaries).await?;
                let abbreviations =
                    StateAbbreviation::fetch(&self.client, &self.sources.state_abbreviations)
                        .await?;
                self.db.load_state_boundaries(&boundaries)?;
                self.db.load_state_abbreviations(&abbreviations)?;
                self.db.query_state_geometry()
            })
            .await?;
        Ok(states.as_slice())
    }
}
