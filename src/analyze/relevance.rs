use crate::types::dataset::Dataset;
use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

const RECOMMENDED_ROWS: f64 = 50.0;
const LONG_DESCRIPTION_CHARS: usize = 50;

pub fn relevance_score(dataset: &Dataset, metadata: Option<&DatasetMetadata>) -> Score {
    let rows = ((dataset.row_count() as f64 / RECOMMENDED_ROWS) * 10.0).min(MAX_SCORE);
    let description = match metadata.and_then(DatasetMetadata::description) {
        Some(text) if text.chars().count() > LONG_DESCRIPTION_CHARS => 10.0,
        Some(_) => 7.0,
        None => 5.0,
    };
    ((rows + description) / 2.0).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dataset::{CellValue, Record};

    fn rows(count: usize) -> Dataset {
        Dataset::new(
            (0..count)
                .map(|n| Record::new().with("id", CellValue::Number(n as f64)))
                .collect(),
        )
    }

    #[test]
    fn row_measure_saturates_at_fifty_rows() {
        let long = DatasetMetadata {
            description: Some("d".repeat(51)),
            ..DatasetMetadata::default()
        };
        assert_eq!(relevance_score(&rows(50), Some(&long)), 10.0);
        assert_eq!(relevance_score(&rows(500), Some(&long)), 10.0);
    }

    #[test]
    fn description_tiers() {
        let short = DatasetMetadata {
            description: Some("d".repeat(50)),
            ..DatasetMetadata::default()
        };
        assert!((relevance_score(&rows(25), Some(&short)) - 6.0).abs() < 1e-9);
        assert!((relevance_score(&rows(25), None) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_uses_description_only() {
        assert!((relevance_score(&Dataset::default(), None) - 2.5).abs() < 1e-9);
    }
}
