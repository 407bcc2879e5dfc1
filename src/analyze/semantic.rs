use super::ValueKey;
use crate::types::dataset::{CellValue, Dataset};
use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};
use std::collections::HashMap;

const TOP_VALUES: usize = 5;

/// Most frequent non-null values, ties kept in first-seen order.
pub fn frequent_values<'a>(
    dataset: &'a Dataset,
    column: &'a str,
    top: usize,
) -> Vec<&'a CellValue> {
    let mut counts: HashMap<ValueKey, usize> = HashMap::new();
    let mut first_seen: Vec<(ValueKey, &CellValue)> = Vec::new();
    for value in dataset.column_values(column) {
        let Some(key) = ValueKey::of(value) else {
            continue;
        };
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push((key, value));
        }
        *count += 1;
    }

    let mut ranked: Vec<(&CellValue, usize)> = first_seen
        .into_iter()
        .map(|(key, value)| (value, counts.get(&key).copied().unwrap_or(0)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(top).map(|(value, _)| value).collect()
}

fn column_matches_description(dataset: &Dataset, column: &str, description: &str) -> bool {
    let description = description.to_lowercase();
    let words: Vec<&str> = description.split_whitespace().collect();
    frequent_values(dataset, column, TOP_VALUES)
        .into_iter()
        .map(|value| value.display().to_lowercase())
        .any(|value| words.iter().any(|word| value.contains(word)))
}

pub fn semantic_accuracy_score(dataset: &Dataset, metadata: Option<&DatasetMetadata>) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let flagged = dataset
        .columns()
        .iter()
        .filter(|column| {
            let description = metadata
                .and_then(|metadata| metadata.column_description(column))
                .unwrap_or(column.as_str());
            !column_matches_description(dataset, column, description)
        })
        .count();
    let share = flagged as f64 / dataset.column_count() as f64;
    (MAX_SCORE - 10.0 * share.powi(2)).clamp(0.0, MAX_SCORE)
}
