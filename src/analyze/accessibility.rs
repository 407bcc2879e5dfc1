use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

pub fn accessibility_score(metadata: Option<&DatasetMetadata>) -> Score {
    let mut score: Score = 0.0;
    if let Some(metadata) = metadata {
        if metadata.tag_count() > 0 {
            score += 5.0;
        }
        if metadata.link().is_some() {
            score += 5.0;
        }
    }
    score.clamp(0.0, MAX_SCORE)
}
