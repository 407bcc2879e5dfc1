use super::timestamp::parse_timestamp;
use crate::error::{CensusError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Publication facts about a dataset, supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetMetadata {
    #[serde(
        default,
        alias = "updatedAt",
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "updateFrequencyDays",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_frequency_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        alias = "columnDescriptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_descriptions: Option<BTreeMap<String, String>>,
}

fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_timestamp(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {text}"))),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

impl DatasetMetadata {
    /// Reads a metadata file: `.json` as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| CensusError::MetadataParse(format!("{}: {}", path.display(), e)))
        } else {
            toml::from_str(&content)
                .map_err(|e| CensusError::MetadataParse(format!("{}: {}", path.display(), e)))
        }
    }

    /// Fields set in `overlay` win; unset ones fall back to `self`.
    pub fn overlay(self, overlay: DatasetMetadata) -> DatasetMetadata {
        DatasetMetadata {
            updated_at: overlay.updated_at.or(self.updated_at),
            update_frequency_days: overlay.update_frequency_days.or(self.update_frequency_days),
            source: overlay.source.or(self.source),
            publisher: overlay.publisher.or(self.publisher),
            contact: overlay.contact.or(self.contact),
            description: overlay.description.or(self.description),
            tags: overlay.tags.or(self.tags),
            link: overlay.link.or(self.link),
            column_descriptions: overlay.column_descriptions.or(self.column_descriptions),
        }
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    pub fn publisher(&self) -> Option<&str> {
        non_empty(&self.publisher)
    }

    pub fn contact(&self) -> Option<&str> {
        non_empty(&self.contact)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    /// Zero and NaN read as unset; negative frequencies are kept.
    pub fn update_frequency_days(&self) -> Option<f64> {
        self.update_frequency_days
            .filter(|days| !days.is_nan() && *days != 0.0)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn has_column_descriptions(&self) -> bool {
        self.column_descriptions
            .as_ref()
            .map(|map| !map.is_empty())
            .unwrap_or(false)
    }

    pub fn column_description(&self, column: &str) -> Option<&str> {
        self.column_descriptions
            .as_ref()
            .and_then(|map| map.get(column))
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}
