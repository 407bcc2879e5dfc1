use super::metadata::DatasetMetadata;
use crate::error::CensusError;
use serde::Deserialize;

pub const DEFAULT_USER_AGENT: &str = concat!("datacensus/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CensusConfig {
    pub fetch: Option<FetchConfig>,
    pub report: Option<ReportConfig>,
    pub metadata: Option<DatasetMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub min_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CensusConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        match &self.fetch {
            Some(fetch) => FetchSettings {
                timeout_secs: fetch.timeout_secs,
                user_agent: fetch.user_agent.clone().unwrap_or(defaults.user_agent),
            },
            None => defaults,
        }
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report.as_ref().and_then(|report| report.format.as_deref())
    }

    pub fn min_score(&self) -> Option<f64> {
        self.report.as_ref().and_then(|report| report.min_score)
    }

    pub fn default_metadata(&self) -> DatasetMetadata {
        self.metadata.clone().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), CensusError> {
        if let Some(fetch) = &self.fetch {
            if fetch.timeout_secs == Some(0) {
                return Err(CensusError::ConfigParse(
                    "fetch.timeout_secs must be greater than 0".to_string(),
                ));
            }
            if let Some(user_agent) = &fetch.user_agent {
                if user_agent.trim().is_empty() {
                    return Err(CensusError::ConfigParse(
                        "fetch.user_agent cannot be empty".to_string(),
                    ));
                }
            }
        }

        if let Some(report) = &self.report {
            if let Some(format) = &report.format {
                if !matches!(format.as_str(), "json" | "md") {
                    return Err(CensusError::ConfigParse(format!(
                        "unsupported report.format: {format}"
                    )));
                }
            }
            if let Some(min_score) = report.min_score {
                if !(0.0..=10.0).contains(&min_score) {
                    return Err(CensusError::ConfigParse(
                        "report.min_score must be between 0.0 and 10.0".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
