use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Score, MAX_SCORE};
use chrono::{DateTime, Utc};

const NEUTRAL: Score = 5.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn timeliness_score(metadata: Option<&DatasetMetadata>, now: DateTime<Utc>) -> Score {
    let Some(metadata) = metadata else {
        return NEUTRAL;
    };
    let (Some(updated_at), Some(frequency_days)) =
        (metadata.updated_at, metadata.update_frequency_days())
    else {
        return NEUTRAL;
    };

    let elapsed_days = now
        .signed_duration_since(updated_at)
        .num_milliseconds() as f64
        / MILLIS_PER_DAY;
    if elapsed_days <= frequency_days {
        MAX_SCORE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn metadata(updated_at: DateTime<Utc>, frequency: f64) -> DatasetMetadata {
        DatasetMetadata {
            updated_at: Some(updated_at),
            update_frequency_days: Some(frequency),
            ..DatasetMetadata::default()
        }
    }

    #[test]
    fn fresh_update_scores_ten() {
        let now = Utc::now();
        assert_eq!(timeliness_score(Some(&metadata(now, 30.0)), now), 10.0);
    }

    #[test]
    fn stale_update_scores_zero() {
        let now = Utc::now();
        let stale = metadata(now - Duration::days(100), 30.0);
        assert_eq!(timeliness_score(Some(&stale), now), 0.0);
    }

    #[test]
    fn boundary_day_is_still_timely() {
        let now = Utc::now();
        let edge = metadata(now - Duration::days(30), 30.0);
        assert_eq!(timeliness_score(Some(&edge), now), 10.0);
    }

    #[test]
    fn negative_frequency_is_always_stale() {
        let now = Utc::now();
        assert_eq!(timeliness_score(Some(&metadata(now, -1.0)), now), 0.0);
    }

    #[test]
    fn missing_fields_are_neutral() {
        let now = Utc::now();
        assert_eq!(timeliness_score(None, now), 5.0);

        let no_frequency = DatasetMetadata {
            updated_at: Some(now),
            ..DatasetMetadata::default()
        };
        assert_eq!(timeliness_score(Some(&no_frequency), now), 5.0);
        assert_eq!(timeliness_score(Some(&metadata(now, 0.0)), now), 5.0);
    }
}
