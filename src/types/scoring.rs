use serde::Serialize;

pub type Score = f64;

pub const MAX_SCORE: Score = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Confidentiality,
    Relevance,
    Timeliness,
    Traceability,
    Conformity,
    SyntacticAccuracy,
    SemanticAccuracy,
    Completeness,
    Consistency,
    Precision,
    Portability,
    Credibility,
    Understandability,
    Accessibility,
    Uniqueness,
    Efficiency,
    Recoverability,
    Availability,
}

impl Criterion {
    /// Declaration order, used for reports and the aggregate.
    pub const ALL: [Criterion; 18] = [
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

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Criterion::Confidentiality => "confidentiality",
            Criterion::Relevance => "relevance",
            Criterion::Timeliness => "timeliness",
            Criterion::Traceability => "traceability",
            Criterion::Conformity => "conformity",
            Criterion::SyntacticAccuracy => "syntactic_accuracy",
            Criterion::SemanticAccuracy => "semantic_accuracy",
            Criterion::Completeness => "completeness",
            Criterion::Consistency => "consistency",
            Criterion::Precision => "precision",
            Criterion::Portability => "portability",
            Criterion::Credibility => "credibility",
            Criterion::Understandability => "understandability",
            Criterion::Accessibility => "accessibility",
            Criterion::Uniqueness => "uniqueness",
            Criterion::Efficiency => "efficiency",
            Criterion::Recoverability => "recoverability",
            Criterion::Availability => "availability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Confidentiality => "Confidentiality",
            Criterion::Relevance => "Relevance",
            Criterion::Timeliness => "Timeliness",
            Criterion::Traceability => "Traceability",
            Criterion::Conformity => "Conformity",
            Criterion::SyntacticAccuracy => "Syntactic accuracy",
            Criterion::SemanticAccuracy => "Semantic accuracy",
            Criterion::Completeness => "Completeness",
            Criterion::Consistency => "Consistency",
            Criterion::Precision => "Precision",
            Criterion::Portability => "Portability",
            Criterion::Credibility => "Credibility",
            Criterion::Understandability => "Understandability",
            Criterion::Accessibility => "Accessibility",
            Criterion::Uniqueness => "Uniqueness",
            Criterion::Efficiency => "Efficiency",
            Criterion::Recoverability => "Recoverability",
            Criterion::Availability => "Availability",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Criterion::Confidentiality => "risk of publishing sensitive columns",
            Criterion::Relevance => "row volume and description presence",
            Criterion::Timeliness => "last update within the declared frequency",
            Criterion::Traceability => "share of provenance metadata filled in",
            Criterion::Conformity => "year and date columns hold valid values",
            Criterion::SyntacticAccuracy => "columns free of near-duplicate spellings",
            Criterion::SemanticAccuracy => "frequent values match column descriptions",
            Criterion::Completeness => "absence of missing cells and empty columns",
            Criterion::Consistency => "uniform value lengths and column names",
            Criterion::Precision => "columns carry enough distinct detail",
            Criterion::Portability => "plain-character values and format conformity",
            Criterion::Credibility => "source, publisher and column descriptions",
            Criterion::Understandability => "description length and tagging",
            Criterion::Accessibility => "tags and a public link",
            Criterion::Uniqueness => "absence of duplicate rows and columns",
            Criterion::Efficiency => "completeness combined with uniqueness",
            Criterion::Recoverability => "accessibility plus audit metadata",
            Criterion::Availability => "accessibility combined with timeliness",
        }
    }

    /// Scores this criterion consumes as inputs.
    pub fn dependencies(self) -> &'static [Criterion] {
        match self {
            Criterion::Consistency => &[Criterion::SyntacticAccuracy],
            Criterion::Portability => &[Criterion::Completeness, Criterion::Conformity],
            Criterion::Efficiency => &[Criterion::Completeness, Criterion::Uniqueness],
            Criterion::Recoverability => &[Criterion::Accessibility],
            Criterion::Availability => &[Criterion::Accessibility, Criterion::Timeliness],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Excellent,
    Good,
    Acceptable,
    Deficient,
}

impl Category {
    pub fn of(score: Score) -> Self {
        if score >= 8.0 {
            Category::Excellent
        } else if score >= 6.0 {
            Category::Good
        } else if score >= 4.0 {
            Category::Acceptable
        } else {
            Category::Deficient
        }
    }
}

/// The eighteen criterion scores, one named field each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionScores {
    pub confidentiality: Score,
    pub relevance: Score,
    pub timeliness: Score,
    pub traceability: Score,
    pub conformity: Score,
    pub syntactic_accuracy: Score,
    pub semantic_accuracy: Score,
    pub completeness: Score,
    pub consistency: Score,
    pub precision: Score,
    pub portability: Score,
    pub credibility: Score,
    pub understandability: Score,
    pub accessibility: Score,
    pub uniqueness: Score,
    pub efficiency: Score,
    pub recoverability: Score,
    pub availability: Score,
}

impl CriterionScores {
    pub fn from_array(scores: [Score; 18]) -> Self {
        let [
            confidentiality,
            relevance,
            timeliness,
            traceability,
            conformity,
            syntactic_accuracy,
            semantic_accuracy,
            completeness,
            consistency,
            precision,
            portability,
            credibility,
            understandability,
            accessibility,
            uniqueness,
            efficiency,
            recoverability,
            availability,
        ] = scores;
        Self {
            confidentiality,
            relevance,
            timeliness,
            traceability,
            conformity,
            syntactic_accuracy,
            semantic_accuracy,
            completeness,
            consistency,
            precision,
            portability,
            credibility,
            understandability,
            accessibility,
            uniqueness,
            efficiency,
            recoverability,
            availability,
        }
    }

    pub fn get(&self, criterion: Criterion) -> Score {
        match criterion {
            Criterion::Confidentiality => self.confidentiality,
            Criterion::Relevance => self.relevance,
            Criterion::Timeliness => self.timeliness,
            Criterion::Traceability => self.traceability,
            Criterion::Conformity => self.conformity,
            Criterion::SyntacticAccuracy => self.syntactic_accuracy,
            Criterion::SemanticAccuracy => self.semantic_accuracy,
            Criterion::Completeness => self.completeness,
            Criterion::Consistency => self.consistency,
            Criterion::Precision => self.precision,
            Criterion::Portability => self.portability,
            Criterion::Credibility => self.credibility,
            Criterion::Understandability => self.understandability,
            Criterion::Accessibility => self.accessibility,
            Criterion::Uniqueness => self.uniqueness,
            Criterion::Efficiency => self.efficiency,
            Criterion::Recoverability => self.recoverability,
            Criterion::Availability => self.availability,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, Score)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(move |criterion| (criterion, self.get(criterion)))
    }

    pub fn mean(&self) -> Score {
        self.iter().map(|(_, score)| score).sum::<Score>() / Criterion::ALL.len() as Score
    }
}

/// Criterion scores plus their unweighted mean. The mean is derived on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityResult {
    #[serde(flatten)]
    scores: CriterionScores,
    overall_score: Score,
}

impl QualityResult {
    pub fn new(scores: CriterionScores) -> Self {
        Self {
            overall_score: scores.mean(),
            scores,
        }
    }

    pub fn scores(&self) -> &CriterionScores {
        &self.scores
    }

    pub fn overall_score(&self) -> Score {
        self.overall_score
    }

    pub fn category(&self) -> Category {
        Category::of(self.overall_score)
    }
}
