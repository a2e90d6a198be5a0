//! Command implementations for SIE CLI.
//!
//! Provides subcommands for inspecting the county income table, the
//! per-state medians behind the choropleth, and exporting the map layer.

use clap::{Args, Subcommand};
use sie_census::sources::{
    Sources, COUNTY_INCOME_CSV_URL, STATE_ABBREVIATIONS_URL, STATE_BOUNDARIES_URL,
};

pub mod export;
pub mod report;
pub mod source;

use source::DataSource;

#[derive(Subcommand)]
pub enum Command {
    /// List every mapped state with its median 2015 income and fill color
    States,

    /// Show the county income table, medians and industry for one state
    Counties {
        /// Two-letter state code (defaults to the first state in sorted order)
        #[arg(short = 's', long)]
        state: Option<String>,
    },

    /// Write the choropleth layer (styled states + legend) as GeoJSON
    ExportMap {
        /// Output path for the GeoJSON FeatureCollection
        #[arg(short = 'o', long)]
        output: String,
    },
}

/// Remote dataset locations; each defaults to the published source.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// County income CSV
    #[arg(long, global = true, default_value = COUNTY_INCOME_CSV_URL)]
    pub income_url: String,

    /// State boundary GeoJSON
    #[arg(long, global = true, default_value = STATE_BOUNDARIES_URL)]
    pub boundaries_url: String,

    /// State name/abbreviation JSON
    #[arg(long, global = true, default_value = STATE_ABBREVIATIONS_URL)]
    pub abbreviations_url: String,
}

impl From<SourceArgs> for Sources {
    fn from(args: SourceArgs) -> Self {
        Sources {
            county_income_csv: args.income_url,
            state_boundaries: args.boundaries_url,
            state_abbreviations: args.abbreviations_url,
        }
    }
}

pub async fn run(command: Command, sources: Sources) -> anyhow::Result<()> {
    let source = DataSource::new(sources)?;
    match command {
        Command::States => report::run_states(&source).await,
        Command::Counties { state } => report::run_counties(&source, state.as_deref()).await,
        Command::ExportMap { output } => export::run_export_map(&source, &output).await,
    }
}
