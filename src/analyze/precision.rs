use super::ValueKey;
use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};
use std::collections::HashSet;

const MIN_NUMERIC_VARIANCE: f64 = 0.1;
const MIN_DISTINCT_RATIO: f64 = 0.1;

fn is_disaggregated(dataset: &Dataset, column: &str) -> bool {
    let values: Vec<_> = dataset
        .column_values(column)
        .filter(|value| !value.is_null())
        .collect();
    let distinct: HashSet<ValueKey> = values
        .iter()
        .filter_map(|value| ValueKey::of(value))
        .collect();
    if distinct.len() < 2 {
        return false;
    }

    let numeric: Vec<f64> = values.iter().filter_map(|value| value.to_number()).collect();
    if numeric.is_empty() {
        return distinct.len() as f64 / values.len() as f64 > MIN_DISTINCT_RATIO;
    }
    let count = numeric.len() as f64;
    let mean = numeric.iter().sum::<f64>() / count;
    let variance = numeric.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / count;
    variance >= MIN_NUMERIC_VARIANCE
}

pub fn precision_score(dataset: &Dataset) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let qualifying = dataset
        .columns()
        .iter()
        .filter(|column| is_disaggregated(dataset, column))
        .count();
    ((qualifying as f64 / dataset.column_count() as f64) * 10.0).clamp(0.0, MAX_SCORE)
}
