use crate::error::Result;
use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};
use std::collections::HashSet;

/// `10 × (distinct − 1) / (count − 1)`: all distinct is 10, all identical is 0.
fn spread(distinct: usize, count: usize) -> Score {
    if count <= 1 {
        return MAX_SCORE;
    }
    (10.0 * (distinct.saturating_sub(1)) as f64 / (count - 1) as f64).clamp(0.0, MAX_SCORE)
}

/// Rows are compared by their compact JSON encoding.
pub fn row_uniqueness(dataset: &Dataset) -> Result<Score> {
    let signatures = dataset
        .records()
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<HashSet<String>>>()?;
    Ok(spread(signatures.len(), dataset.row_count()))
}

/// Columns are compared by the compact JSON of their value sequence.
pub fn column_uniqueness(dataset: &Dataset) -> Result<Score> {
    let signatures = dataset
        .columns()
        .iter()
        .map(|column| serde_json::to_string(&dataset.column_values(column).collect::<Vec<_>>()))
        .collect::<serde_json::Result<HashSet<String>>>()?;
    Ok(spread(signatures.len(), dataset.column_count()))
}

pub fn uniqueness_score(dataset: &Dataset) -> Result<Score> {
    if dataset.is_empty() {
        return Ok(MAX_SCORE);
    }
    let mean = (row_uniqueness(dataset)? + column_uniqueness(dataset)?) / 2.0;
    Ok(mean.clamp(0.0, MAX_SCORE))
}
