use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

/// Description length saturates exponentially, tag count logarithmically.
pub fn understandability_score(metadata: Option<&DatasetMetadata>) -> Score {
    let description_len = metadata
        .and_then(DatasetMetadata::description)
        .map(|text| text.chars().count())
        .unwrap_or(0) as f64;
    let tag_count = metadata.map(DatasetMetadata::tag_count).unwrap_or(0) as f64;

    let description = ((1.0 - (-description_len / 100.0).exp()) * 10.0).min(MAX_SCORE);
    let tags = if tag_count > 0.0 {
        ((tag_count + 1.0).ln() * 3.0).min(MAX_SCORE)
    } else {
        0.0
    };

    (description * 0.6 + tags * 0.4).clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_metadata_scores_zero() {
        assert_eq!(understandability_score(None), 0.0);
    }

    #[test]
    fn short_description_and_three_tags() {
        let metadata = DatasetMetadata {
            description: Some("x".repeat(100)),
            tags: Some(vec!["a".into(), "b".into(), "c".into()]),
            ..DatasetMetadata::default()
        };
        let expected = (1.0 - (-1.0f64).exp()) * 10.0 * 0.6 + (4.0f64).ln() * 3.0 * 0.4;
        assert!((understandability_score(Some(&metadata)) - expected).abs() < 1e-9);
    }

    #[test]
    fn many_tags_cap_the_tag_measure() {
        let metadata = DatasetMetadata {
            description: Some("x".repeat(5_000)),
            tags: Some((0..100_000).map(|n| n.to_string()).collect()),
            ..DatasetMetadata::default()
        };
        let score = understandability_score(Some(&metadata));
        assert!(score <= MAX_SCORE);
        assert!(score > 9.9);
    }
}
