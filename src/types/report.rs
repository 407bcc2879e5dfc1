use super::scoring::{Category, QualityResult};
use serde::Serialize;

/// Descriptive counts of the evaluated dataset. Informational only; no score reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    pub total_cells: usize,
    pub missing_cells: usize,
    pub missing_percentage: f64,
    pub sparse_columns: usize,
    pub empty_columns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub source: String,
    pub evaluated_at: String,
    pub profile: DatasetProfile,
    pub result: QualityResult,
    pub category: Category,
}
