use crate::analyze::profile::dataset_profile;
use crate::analyze::score_dataset;
use crate::error::Result;
use crate::load::{DatasetSource, Loader};
use crate::types::metadata::DatasetMetadata;
use crate::types::report::{DatasetProfile, QualityReport};
use crate::types::scoring::QualityResult;
use chrono::Utc;

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationState {
    Idle,
    Loading,
    Computing,
    Done(QualityResult),
    Failed(String),
}

impl EvaluationState {
    fn name(&self) -> &'static str {
        match self {
            EvaluationState::Idle => "idle",
            EvaluationState::Loading => "loading",
            EvaluationState::Computing => "computing",
            EvaluationState::Done(_) => "done",
            EvaluationState::Failed(_) => "failed",
        }
    }
}

/// One load-then-score pass. Errors end the pass in `Failed`; nothing is retried.
#[derive(Debug)]
pub struct Evaluation {
    state: EvaluationState,
    profile: Option<DatasetProfile>,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluation {
    pub fn new() -> Self {
        Self {
            state: EvaluationState::Idle,
            profile: None,
        }
    }

    pub fn state(&self) -> &EvaluationState {
        &self.state
    }

    /// Counts for the dataset of the last run, once it has loaded.
    pub fn profile(&self) -> Option<&DatasetProfile> {
        self.profile.as_ref()
    }

    fn transition(&mut self, next: EvaluationState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "evaluation state");
        self.state = next;
    }

    pub async fn run(
        &mut self,
        loader: &Loader,
        source: &DatasetSource,
        metadata: Option<&DatasetMetadata>,
    ) -> Result<QualityResult> {
        self.profile = None;
        self.transition(EvaluationState::Loading);
        let dataset = match loader.load(source).await {
            Ok(dataset) => dataset,
            Err(err) => {
                self.transition(EvaluationState::Failed(err.to_string()));
                return Err(err);
            }
        };

        self.transition(EvaluationState::Computing);
        self.profile = Some(dataset_profile(&dataset));
        match score_dataset(&dataset, metadata, Utc::now()) {
            Ok(result) => {
                self.transition(EvaluationState::Done(result));
                Ok(result)
            }
            Err(err) => {
                self.transition(EvaluationState::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}

pub async fn evaluate(
    loader: &Loader,
    source: &DatasetSource,
    metadata: Option<&DatasetMetadata>,
) -> Result<QualityResult> {
    Evaluation::new().run(loader, source, metadata).await
}

/// Runs an evaluation and bundles the result with its dataset profile.
pub async fn evaluate_report(
    loader: &Loader,
    source: &DatasetSource,
    metadata: Option<&DatasetMetadata>,
) -> Result<QualityReport> {
    let mut evaluation = Evaluation::new();
    let result = evaluation.run(loader, source, metadata).await?;
    Ok(QualityReport {
        source: source.to_string(),
        evaluated_at: Utc::now().to_rfc3339(),
        profile: evaluation.profile().cloned().unwrap_or_default(),
        category: result.category(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CensusError;
    use crate::types::config::FetchSettings;
    use std::fs;
    use tempfile::TempDir;

    fn loader() -> Loader {
        Loader::new(&FetchSettings::default()).expect("loader should build")
    }

    fn write_dataset(dir: &TempDir, body: &str) -> DatasetSource {
        let path = dir.path().join("rows.json");
        fs::write(&path, body).expect("dataset should write");
        DatasetSource::File(path)
    }

    #[test]
    fn new_evaluation_is_idle() {
        let evaluation = Evaluation::new();
        assert_eq!(evaluation.state(), &EvaluationState::Idle);
        assert!(evaluation.profile().is_none());
    }

    #[tokio::test]
    async fn run_ends_in_done_with_the_result() {
        let dir = TempDir::new().expect("temp dir should be created");
        let source = write_dataset(
            &dir,
            r#"[{"id":1,"name":"a"},{"id":2,"name":"b"},{"id":3,"name":"c"}]"#,
        );
        let metadata = DatasetMetadata {
            description: Some("Sample census records".to_string()),
            ..DatasetMetadata::default()
        };

        let mut evaluation = Evaluation::new();
        let result = evaluation
            .run(&loader(), &source, Some(&metadata))
            .await
            .expect("evaluation should succeed");

        assert_eq!(evaluation.state(), &EvaluationState::Done(result));
        assert!((result.overall_score() - 5.35480525134327).abs() < 1e-9);
        let profile = evaluation.profile().expect("profile should be recorded");
        assert_eq!(profile.rows, 3);
        assert_eq!(profile.columns, 2);
    }

    #[tokio::test]
    async fn load_errors_end_in_failed() {
        let dir = TempDir::new().expect("temp dir should be created");
        let source = write_dataset(&dir, "[]");

        let mut evaluation = Evaluation::new();
        let err = evaluation
            .run(&loader(), &source, None)
            .await
            .expect_err("empty dataset should fail");

        assert!(matches!(err, CensusError::Format(_)));
        match evaluation.state() {
            EvaluationState::Failed(message) => assert!(message.contains("non-empty")),
            other => panic!("expected failed state, got {other:?}"),
        }
        assert!(evaluation.profile().is_none());
    }

    #[tokio::test]
    async fn evaluate_report_carries_source_and_profile() {
        let dir = TempDir::new().expect("temp dir should be created");
        let source = write_dataset(&dir, r#"[{"id":1,"email":null},{"id":2,"email":null}]"#);

        let report = evaluate_report(&loader(), &source, None)
            .await
            .expect("evaluation should succeed");
        assert_eq!(report.source, source.to_string());
        assert_eq!(report.profile.empty_columns, 1);
        assert!((report.profile.missing_percentage - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn evaluate_matches_a_fresh_run() {
        let dir = TempDir::new().expect("temp dir should be created");
        let source = write_dataset(&dir, r#"[{"municipio":"Cali","valor":3}]"#);

        let first = evaluate(&loader(), &source, None).await.expect("first run");
        let second = evaluate(&loader(), &source, None).await.expect("second run");
        assert_eq!(first.scores().completeness, second.scores().completeness);
        assert_eq!(first.scores().precision, second.scores().precision);
    }
}
