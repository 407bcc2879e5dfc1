use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};

pub fn credibility_score(metadata: Option<&DatasetMetadata>) -> Score {
    let Some(metadata) = metadata else {
        return 0.0;
    };
    let has_source = flag(metadata.source().is_some());
    let has_publisher = flag(metadata.publisher().is_some());
    let has_column_descriptions = flag(metadata.has_column_descriptions());

    let provenance = ((has_source + has_publisher) / 2.0) * 10.0;
    let publisher_valid = has_publisher * 10.0;
    let column_descriptions_valid = has_column_descriptions * 10.0;

    (provenance * 0.7 + publisher_valid * 0.05 + column_descriptions_valid * 0.25)
        .clamp(0.0, MAX_SCORE)
}

fn flag(present: bool) -> Score {
    if present {
        1.0
    } else {
        0.0
    }
}
