use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

pub fn efficiency_score(completeness: Score, uniqueness: Score) -> Score {
    ((completeness + uniqueness) / 2.0).clamp(0.0, MAX_SCORE)
}

pub fn recoverability_score(accessibility: Score, metadata: Option<&DatasetMetadata>) -> Score {
    let provenance = match metadata {
        Some(metadata) if metadata.source().is_some() && metadata.publisher().is_some() => 10.0,
        _ => 5.0,
    };
    let audited = match metadata {
        Some(metadata) if metadata.updated_at.is_some() => 10.0,
        _ => 5.0,
    };
    ((accessibility + provenance + audited) / 3.0).clamp(0.0, MAX_SCORE)
}

pub fn availability_score(accessibility: Score, timeliness: Score) -> Score {
    ((accessibility + timeliness) / 2.0).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn efficiency_and_availability_average_their_inputs() {
        assert_eq!(efficiency_score(10.0, 6.0), 8.0);
        assert_eq!(availability_score(0.0, 5.0), 2.5);
    }

    #[test]
    fn recoverability_rewards_provenance_and_audit_dates() {
        assert!((recoverability_score(0.0, None) - 10.0 / 3.0).abs() < 1e-9);

        let metadata = DatasetMetadata {
            source: Some("datos.gov.co".to_string()),
            publisher: Some("MinTIC".to_string()),
            updated_at: Some(Utc::now()),
            ..DatasetMetadata::default()
        };
        assert!((recoverability_score(10.0, Some(&metadata)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn source_without_publisher_is_incomplete() {
        let metadata = DatasetMetadata {
            source: Some("datos.gov.co".to_string()),
            ..DatasetMetadata::default()
        };
        assert!((recoverability_score(5.0, Some(&metadata)) - 5.0).abs() < 1e-9);
    }
}
