use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};

const MISSING_PENALTY_EXPONENT: f64 = 1.5;
const SPARSE_COLUMN_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingCounts {
    pub total_cells: usize,
    pub missing_cells: usize,
    pub empty_columns: usize,
    pub sparse_columns: usize,
}

pub fn count_missing(dataset: &Dataset) -> MissingCounts {
    let rows = dataset.row_count();
    let mut counts = MissingCounts {
        total_cells: rows * dataset.column_count(),
        ..MissingCounts::default()
    };
    for column in dataset.columns() {
        let missing = dataset
            .column_values(column)
            .filter(|value| value.is_missing())
            .count();
        counts.missing_cells += missing;
        if rows > 0 && missing == rows {
            counts.empty_columns += 1;
        }
        if rows > 0 && missing as f64 / rows as f64 > SPARSE_COLUMN_THRESHOLD {
            counts.sparse_columns += 1;
        }
    }
    counts
}

/// Cell-level measure: `10 × (1 − missing_ratio^1.5)`.
pub fn data_completeness(counts: &MissingCounts) -> Score {
    if counts.total_cells == 0 {
        return MAX_SCORE;
    }
    let ratio = counts.missing_cells as f64 / counts.total_cells as f64;
    (10.0 * (1.0 - ratio.powf(MISSING_PENALTY_EXPONENT))).clamp(0.0, MAX_SCORE)
}

pub fn completeness_score(dataset: &Dataset) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let counts = count_missing(dataset);
    let columns = dataset.column_count() as f64;
    let empty = counts.empty_columns as f64;

    let data = data_completeness(&counts);
    let column_completeness = 10.0 * (1.0 - empty / columns);
    let non_empty_columns = 10.0 * ((columns - empty) / columns);
    ((data + column_completeness + non_empty_columns) / 3.0).clamp(0.0, MAX_SCORE)
}
