use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};

/// Positional comparison, not edit distance: `abc` and `bca` count three mismatches.
pub fn near_duplicates(left: &str, right: &str) -> bool {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    if left.len().abs_diff(right.len()) > 2 {
        return false;
    }

    let mut mismatches = 0;
    for position in 0..left.len().max(right.len()) {
        if left.get(position) != right.get(position) {
            mismatches += 1;
            if mismatches > 2 {
                return false;
            }
        }
    }
    mismatches > 0
}

fn distinct_texts(dataset: &Dataset, column: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    dataset
        .column_values(column)
        .map(|value| value.to_text())
        .filter(|text| !text.is_empty())
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

fn has_near_duplicates(values: &[String]) -> bool {
    values.iter().enumerate().any(|(index, left)| {
        values[index + 1..]
            .iter()
            .any(|right| near_duplicates(left, right))
    })
}

pub fn syntactic_accuracy_score(dataset: &Dataset) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let flagged = dataset
        .columns()
        .iter()
        .filter(|column| has_near_duplicates(&distinct_texts(dataset, column)))
        .count();
    let share = flagged as f64 / dataset.column_count() as f64;
    (10.0 * (1.0 - share.powi(2))).clamp(0.0, MAX_SCORE)
}
