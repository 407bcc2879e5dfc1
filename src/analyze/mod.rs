pub mod accessibility;
pub mod completeness;
pub mod composite;
pub mod confidentiality;
pub mod conformity;
pub mod consistency;
pub mod credibility;
pub mod portability;
pub mod precision;
pub mod profile;
pub mod relevance;
pub mod semantic;
pub mod syntactic;
pub mod timeliness;
pub mod traceability;
pub mod understandability;
pub mod uniqueness;

use crate::error::{CensusError, Result};
use crate::types::dataset::{CellValue, Dataset};
use crate::types::metadata::DatasetMetadata;
use crate::types::scoring::{Criterion, CriterionScores, QualityResult, Score, MAX_SCORE};
use chrono::{DateTime, Utc};

/// Hashable identity of a non-null cell. `0.0` and `-0.0` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Bool(bool),
    Number(u64),
    Text(String),
}

impl ValueKey {
    pub(crate) fn of(value: &CellValue) -> Option<ValueKey> {
        match value {
            CellValue::Null => None,
            CellValue::Bool(flag) => Some(ValueKey::Bool(*flag)),
            CellValue::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                Some(ValueKey::Number(n.to_bits()))
            }
            CellValue::Text(text) => Some(ValueKey::Text(text.clone())),
        }
    }
}

/// Every criterion appears after the criteria it consumes.
pub const EVALUATION_ORDER: [Criterion; 18] = [
    Criterion::Confidentiality,
    Criterion::Relevance,
    Criterion::Timeliness,
    Criterion::Traceability,
    Criterion::Conformity,
    Criterion::SyntacticAccuracy,
    Criterion::SemanticAccuracy,
    Criterion::Completeness,
    Criterion::Consistency,
    Criterion::Precision,
    Criterion::Portability,
    Criterion::Credibility,
    Criterion::Understandability,
    Criterion::Accessibility,
    Criterion::Uniqueness,
    Criterion::Efficiency,
    Criterion::Recoverability,
    Criterion::Availability,
];

/// Scores recorded so far in one pass. Each slot is written once.
#[derive(Debug, Default)]
struct ScoreSheet([Option<Score>; 18]);

impl ScoreSheet {
    fn record(&mut self, criterion: Criterion, score: Score) -> Result<Score> {
        if !score.is_finite() {
            return Err(CensusError::Computation {
                criterion: criterion.key(),
                reason: format!("score is not a finite number ({score})"),
            });
        }
        let score = score.clamp(0.0, MAX_SCORE);
        tracing::debug!(criterion = criterion.key(), score, "criterion scored");
        self.0[criterion.index()] = Some(score);
        Ok(score)
    }

    fn require(&self, criterion: Criterion, needed_by: Criterion) -> Result<Score> {
        self.0[criterion.index()].ok_or_else(|| CensusError::Computation {
            criterion: needed_by.key(),
            reason: format!("{} has not been scored yet", criterion.key()),
        })
    }

    fn finish(self) -> Result<CriterionScores> {
        let mut scores = [0.0; 18];
        for criterion in Criterion::ALL {
            scores[criterion.index()] = self.0[criterion.index()].ok_or_else(|| {
                CensusError::Computation {
                    criterion: criterion.key(),
                    reason: "criterion was never scored".to_string(),
                }
            })?;
        }
        Ok(CriterionScores::from_array(scores))
    }
}

fn score_criterion(
    criterion: Criterion,
    sheet: &ScoreSheet,
    dataset: &Dataset,
    metadata: Option<&DatasetMetadata>,
    now: DateTime<Utc>,
) -> Result<Score> {
    let input = |dependency: Criterion| sheet.require(dependency, criterion);
    let score = match criterion {
        Criterion::Confidentiality => confidentiality::confidentiality_score(dataset),
        Criterion::Relevance => relevance::relevance_score(dataset, metadata),
        Criterion::Timeliness => timeliness::timeliness_score(metadata, now),
        Criterion::Traceability => traceability::traceability_score(metadata),
        Criterion::Conformity => conformity::conformity_score(dataset),
        Criterion::SyntacticAccuracy => syntactic::syntactic_accuracy_score(dataset),
        Criterion::SemanticAccuracy => semantic::semantic_accuracy_score(dataset, metadata),
        Criterion::Completeness => completeness::completeness_score(dataset),
        Criterion::Consistency => {
            consistency::consistency_score(dataset, input(Criterion::SyntacticAccuracy)?)
        }
        Criterion::Precision => precision::precision_score(dataset),
        Criterion::Portability => portability::portability_score(
            dataset,
            input(Criterion::Completeness)?,
            input(Criterion::Conformity)?,
        ),
        Criterion::Credibility => credibility::credibility_score(metadata),
        Criterion::Understandability => understandability::understandability_score(metadata),
        Criterion::Accessibility => accessibility::accessibility_score(metadata),
        Criterion::Uniqueness => uniqueness::uniqueness_score(dataset)?,
        Criterion::Efficiency => composite::efficiency_score(
            input(Criterion::Completeness)?,
            input(Criterion::Uniqueness)?,
        ),
        Criterion::Recoverability => {
            composite::recoverability_score(input(Criterion::Accessibility)?, metadata)
        }
        Criterion::Availability => composite::availability_score(
            input(Criterion::Accessibility)?,
            input(Criterion::Timeliness)?,
        ),
    };
    Ok(score)
}

/// Scores all eighteen criteria in one pass. `now` anchors the timeliness check.
pub fn score_dataset(
    dataset: &Dataset,
    metadata: Option<&DatasetMetadata>,
    now: DateTime<Utc>,
) -> Result<QualityResult> {
    let mut sheet = ScoreSheet::default();
    for criterion in EVALUATION_ORDER {
        let score = score_criterion(criterion, &sheet, dataset, metadata, now)?;
        sheet.record(criterion, score)?;
    }
    Ok(QualityResult::new(sheet.finish()?))
}
