//! Query result model structs.

use serde::Serialize;

/// Shape of the loaded income dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetInfo {
    /// Number of income records loaded.
    pub records: usize,
    /// Whether the source carried the `income-1989a` column.
    pub has_adjusted_1989: bool,
}
