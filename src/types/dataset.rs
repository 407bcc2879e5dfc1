use crate::error::{CensusError, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

/// Scalar held by one cell. Nested arrays and objects are kept as their compact JSON text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

static MISSING: CellValue = CellValue::Null;

impl CellValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(flag) => CellValue::Bool(flag),
            Value::Number(number) => match number.as_f64() {
                Some(n) => CellValue::Number(n),
                None => CellValue::Text(number.to_string()),
            },
            Value::String(text) => CellValue::Text(text),
            nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Null, `false`, `0` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(flag) => *flag,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(text) => !text.is_empty(),
        }
    }

    /// String form of the cell; falsy cells render as the empty string.
    pub fn to_text(&self) -> String {
        if self.is_truthy() {
            self.display()
        } else {
            String::new()
        }
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Null => "null".to_string(),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(text) => text.clone(),
        }
    }

    /// Lenient numeric coercion: booleans read as 0/1, blank text as 0.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Null => Some(0.0),
            CellValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            CellValue::Number(n) => Some(*n),
            CellValue::Text(text) => parse_number(text),
        }
    }

    /// Counts as a missing cell for completeness purposes.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.is_empty() || text == "null" || text == "undefined",
            _ => false,
        }
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, *radix)));
    if let Some((digits, radix)) = radix {
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !plain {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// One row of the dataset, keeping the column order of the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    cells: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from raw cells, duplicates included.
    #[cfg(test)]
    pub fn from_cells(cells: Vec<(String, CellValue)>) -> Self {
        Self { cells }
    }

    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Absent columns read as null.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .unwrap_or(&MISSING)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    fn from_json_object(object: Map<String, Value>) -> Self {
        Self {
            cells: object
                .into_iter()
                .map(|(column, value)| (column, CellValue::from_json(value)))
                .collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Ordered records plus the column set taken from the first record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
    columns: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let columns = records
            .first()
            .map(|first| first.columns().map(str::to_string).collect())
            .unwrap_or_default();
        Self { records, columns }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| CensusError::Format(format!("body is not valid JSON: {e}")))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(CensusError::Format(
                "dataset must be a JSON array of records".to_string(),
            ));
        };
        if items.is_empty() {
            return Err(CensusError::Format(
                "dataset must be a non-empty JSON array".to_string(),
            ));
        }

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(Record::from_json_object(object)),
                other => Err(CensusError::Format(format!(
                    "record {index} is not a JSON object (found {})",
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there is nothing to measure: no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() || self.columns.is_empty()
    }

    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CellValue> {
        self.records.iter().map(move |record| record.get(column))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_value_keeps_source_column_order() {
        let dataset = Dataset::from_json_value(json!([
            {"zeta": 1, "alpha": "x", "mid": null},
            {"zeta": 2, "alpha": "y", "mid": true}
        ]))
        .expect("array of objects should load");

        assert_eq!(dataset.columns(), ["zeta", "alpha", "mid"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.records()[1].get("mid"), &CellValue::Bool(true));
    }

    #[test]
    fn from_json_value_rejects_non_arrays_and_empty_arrays() {
        let object = Dataset::from_json_value(json!({"rows": []}));
        assert!(matches!(object, Err(CensusError::Format(_))));

        let empty = Dataset::from_json_value(json!([]));
        match empty {
            Err(CensusError::Format(message)) => assert!(message.contains("non-empty")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn from_json_value_rejects_scalar_records() {
        let result = Dataset::from_json_value(json!([{"a": 1}, 7]));
        match result {
            Err(CensusError::Format(message)) => assert!(message.contains("record 1")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn from_json_slice_reports_invalid_json_as_format_error() {
        let result = Dataset::from_json_slice(b"<html>not json</html>");
        assert!(matches!(result, Err(CensusError::Format(_))));
    }

    #[test]
    fn nested_values_become_compact_json_text() {
        let dataset = Dataset::from_json_value(json!([{"geo": {"lat": 4.6}}]))
            .expect("nested record should load");
        assert_eq!(
            dataset.records()[0].get("geo"),
            &CellValue::Text("{\"lat\":4.6}".to_string())
        );
    }

    #[test]
    fn missing_columns_read_as_null() {
        let record = Record::new().with("a", CellValue::Number(1.0));
        assert!(record.get("b").is_null());
    }

    #[test]
    fn to_text_renders_falsy_cells_as_empty() {
        assert_eq!(CellValue::Number(0.0).to_text(), "");
        assert_eq!(CellValue::Bool(false).to_text(), "");
        assert_eq!(CellValue::Null.to_text(), "");
        assert_eq!(CellValue::Number(1.0).to_text(), "1");
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
        assert_eq!(CellValue::Bool(true).to_text(), "true");
    }

    #[test]
    fn to_number_coerces_like_a_lenient_parser() {
        assert_eq!(CellValue::Text(" 42 ".to_string()).to_number(), Some(42.0));
        assert_eq!(CellValue::Text(String::new()).to_number(), Some(0.0));
        assert_eq!(CellValue::Text("0x1A".to_string()).to_number(), Some(26.0));
        assert_eq!(CellValue::Text("1e3".to_string()).to_number(), Some(1000.0));
        assert_eq!(CellValue::Bool(true).to_number(), Some(1.0));
        assert_eq!(CellValue::Text("abc".to_string()).to_number(), None);
        assert_eq!(CellValue::Text("inf".to_string()).to_number(), None);
    }

    #[test]
    fn record_serializes_in_column_order() {
        let record = Record::new()
            .with("b", CellValue::Number(1.0))
            .with("a", CellValue::Null);
        let rendered = serde_json::to_string(&record).expect("record should serialize");
        assert_eq!(rendered, "{\"b\":1.0,\"a\":null}");
    }
}
