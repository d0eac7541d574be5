use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;

/// An entry of the static blog-post JSON collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Minutes; fractional values in the source are rounded up.
    #[serde(deserialize_with = "deserialize_read_time")]
    pub read_time: u32,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl SourceRecord {
    /// Decode one entry of the collection.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        Ok(serde_json::from_value(value)?)
    }
}

fn deserialize_read_time<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = f64::deserialize(deserializer)?;
    if !minutes.is_finite() || minutes < 0.0 || minutes > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "invalid readTime {minutes}, expected a non-negative number of minutes"
        )));
    }
    Ok(minutes.ceil() as u32)
}

/// Accepts an RFC 3339 date-time or a plain `YYYY-MM-DD` date (midnight UTC).
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid timestamp '{raw}', expected RFC 3339 or YYYY-MM-DD"))
}

/// Parse the collection into its raw entries.
///
/// Only the outer array is validated here; each entry is decoded later on
/// its own so a malformed post cannot sink the rest.
pub fn parse_source(json: &str) -> Result<Vec<Value>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Read the collection from disk.
pub fn load_source(path: &Path) -> Result<Vec<Value>, AppError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read '{}': {}", path.display(), e)))?;
    parse_source(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn entry() -> Value {
        json!({
            "title": "Hello World",
            "excerpt": "A first post",
            "content": "# Hello\n\nWorld",
            "category": "general",
            "tags": ["intro", "meta"],
            "readTime": 4,
            "timestamp": "2024-03-15T10:30:00Z"
        })
    }

    #[test]
    fn test_decode_camel_case_record() {
        let record = SourceRecord::from_value(entry()).unwrap();
        assert_eq!(record.read_time, 4);
        assert_eq!(record.tags, vec!["intro", "meta"]);
        assert_eq!(record.timestamp.hour(), 10);
    }

    #[test]
    fn test_fractional_read_time_rounds_up() {
        let mut value = entry();
        value["readTime"] = json!(4.5);
        assert_eq!(SourceRecord::from_value(value).unwrap().read_time, 5);
    }

    #[test]
    fn test_negative_read_time_rejected() {
        let mut value = entry();
        value["readTime"] = json!(-1);
        match SourceRecord::from_value(value) {
            Err(AppError::Parse(msg)) => assert!(msg.contains("invalid readTime")),
            other => panic!("Expected Parse error, got: {:?}", other),
        }
    }

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let ts = parse_timestamp("2023-12-01").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 12, 1));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let ts = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let mut value = entry();
        value["timestamp"] = json!("last tuesday");
        match SourceRecord::from_value(value) {
            Err(AppError::Parse(msg)) => assert!(msg.contains("invalid timestamp")),
            other => panic!("Expected Parse error, got: {:?}", other),
        }
    }

    #[test]
    fn test_missing_tags_default_empty() {
        let mut value = entry();
        value.as_object_mut().unwrap().remove("tags");
        assert!(SourceRecord::from_value(value).unwrap().tags.is_empty());
    }

    #[test]
    fn test_bad_entry_does_not_fail_the_collection() {
        let entries = parse_source(r#"[{"title": "ok"}, 42, {"readTime": "x"}]"#).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_source_must_be_an_array() {
        assert!(matches!(parse_source(r#"{"title": "x"}"#), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_source(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
