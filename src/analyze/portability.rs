use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};

/// Letters, digits, underscore, hyphen and whitespace travel across encodings unchanged.
fn is_portable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace()
}

fn column_is_portable(dataset: &Dataset, column: &str) -> bool {
    dataset
        .column_values(column)
        .all(|value| value.to_text().chars().all(is_portable_char))
}

pub fn portability_score(dataset: &Dataset, completeness: Score, conformity: Score) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let portable = dataset
        .columns()
        .iter()
        .filter(|column| column_is_portable(dataset, column))
        .count();
    let plain_characters = (portable as f64 / dataset.column_count() as f64) * 10.0;
    (plain_characters * 0.5 + conformity * 0.25 + completeness * 0.25).clamp(0.0, MAX_SCORE)
}
