pub mod json;
pub mod md;

use crate::error::CensusError;
use crate::types::report::QualityReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    /// Parses a config value; only `json` and `md` are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(report: &QualityReport, format: OutputFormat) -> Result<String, CensusError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CensusError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
