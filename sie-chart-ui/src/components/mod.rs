//! Reusable Dioxus RSX components for the state income dashboard.

mod chart_container;
mod chart_header;
mod column_descriptions;
mod county_medians;
mod error_display;
mod income_callout;
mod loading_spinner;
mod map_legend;
mod state_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use column_descriptions::ColumnDescriptions;
pub use county_medians::CountyMedians;
pub use error_display::ErrorDisplay;
pub use income_callout::IncomeCallout;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use state_selector::StateSelector;
