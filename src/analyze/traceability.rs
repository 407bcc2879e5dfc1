use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

const TRACKED_FIELDS: f64 = 5.0;
// Weight given to external auditing, which is not evaluated and counts as neutral.
const AUDIT_NEUTRAL: Score = 5.0;

pub fn traceability_score(metadata: Option<&DatasetMetadata>) -> Score {
    let filled = metadata
        .map(|metadata| {
            [
                metadata.updated_at.is_some(),
                metadata.source().is_some(),
                metadata.publisher().is_some(),
                metadata.contact().is_some(),
                metadata.description().is_some(),
            ]
            .iter()
            .filter(|present| **present)
            .count()
        })
        .unwrap_or(0) as f64;

    let missing = 1.0 - filled / TRACKED_FIELDS;
    let completeness = 10.0 * (1.0 - missing.powi(2));
    (completeness * 0.75 + AUDIT_NEUTRAL * 0.25).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn no_metadata_keeps_only_the_neutral_share() {
        assert!((traceability_score(None) - 1.25).abs() < 1e-9);
    }

    #[test]
    fn all_fields_filled_scores_eight_point_seven_five() {
        let metadata = DatasetMetadata {
            updated_at: Some(Utc::now()),
            source: Some("datos.gov.co".to_string()),
            publisher: Some("MinTIC".to_string()),
            contact: Some("datos@gov.co".to_string()),
            description: Some("Censo".to_string()),
            ..DatasetMetadata::default()
        };
        assert!((traceability_score(Some(&metadata)) - 8.75).abs() < 1e-9);
    }

    #[test]
    fn one_field_filled() {
        let metadata = DatasetMetadata {
            description: Some("Censo".to_string()),
            ..DatasetMetadata::default()
        };
        assert!((traceability_score(Some(&metadata)) - 3.95).abs() < 1e-9);
    }
}
