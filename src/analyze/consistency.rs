use crate::types::dataset::Dataset;
use crate::types::scoring::{Score, MAX_SCORE};
use std::collections::HashSet;

fn length_is_erratic(dataset: &Dataset, column: &str) -> bool {
    let lengths: Vec<f64> = dataset
        .column_values(column)
        .map(|value| value.to_text().chars().count() as f64)
        .collect();
    if lengths.is_empty() {
        return false;
    }
    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / count;
    let variance = lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / count;
    variance > mean * 2.0
}

/// Takes the syntactic accuracy score already computed for the same dataset.
pub fn consistency_score(dataset: &Dataset, syntactic_accuracy: Score) -> Score {
    if dataset.is_empty() {
        return MAX_SCORE;
    }
    let columns = dataset.columns();
    let erratic = columns
        .iter()
        .filter(|column| length_is_erratic(dataset, column))
        .count();
    let share = erratic as f64 / columns.len() as f64;
    let character_consistency = 10.0 * (1.0 - share.powi(2));

    let distinct_names: HashSet<&str> = columns.iter().map(String::as_str).collect();
    let unique_names = if distinct_names.len() == columns.len() {
        10.0
    } else {
        0.0
    };

    ((syntactic_accuracy + character_consistency + unique_names) / 3.0).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dataset::{CellValue, Record};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn uniform_lengths_keep_full_character_consistency() {
        let dataset = Dataset::new(vec![
            Record::new().with("code", text("AB")),
            Record::new().with("code", text("CD")),
        ]);
        assert!((consistency_score(&dataset, 10.0) - 10.0).abs() < 1e-9);
        assert!((consistency_score(&dataset, 4.0) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn erratic_lengths_are_flagged() {
        let dataset = Dataset::new(vec![
            Record::new().with("note", text("a")),
            Record::new().with("note", text(&"x".repeat(40))),
        ]);
        // one of one column flagged
        assert!((consistency_score(&dataset, 10.0) - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_column_names_zero_the_name_check() {
        let dataset = Dataset::new(vec![Record::from_cells(vec![
            ("id".to_string(), text("1")),
            ("id".to_string(), text("2")),
        ])]);
        assert!((consistency_score(&dataset, 10.0) - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_scores_ten() {
        assert_eq!(consistency_score(&Dataset::default(), 0.0), 10.0);
    }
}
