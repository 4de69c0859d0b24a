//! HTTP request types for the event-log server.

use serde::Deserialize;

use crate::log::AppendEntry;
use crate::query::QueryParams;
use crate::serde::parse_timestamp;
use crate::{Error, Result};

/// Body of a create-entry request.
///
/// `value` accepts any JSON scalar (string, number, boolean, or null);
/// arrays and objects are rejected. Field presence is validated by the
/// store, so a missing `name` or `source` surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEntryRequest {
    /// Event time, RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS` (interpreted
    /// as UTC). Defaults to the current server time.
    #[serde(default)]
    pub datetime: Option<String>,
    /// Logical category of the write.
    #[serde(default)]
    pub transaction: Option<String>,
    /// Measurement or event name.
    #[serde(default)]
    pub name: Option<String>,
    /// The value to record.
    #[serde(default)]
    pub value: serde_json::Value,
    /// Producer identifier.
    #[serde(default)]
    pub source: Option<String>,
}

impl CreateEntryRequest {
    /// Converts the request into a record the store can append.
    pub fn into_append(self) -> Result<AppendEntry> {
        let datetime = match self.datetime.as_deref().filter(|text| !text.is_empty()) {
            Some(text) => Some(parse_timestamp(text).ok_or_else(|| {
                Error::Validation(format!(
                    "invalid datetime {text:?}, use RFC 3339 or YYYY-MM-DDTHH:MM:SS"
                ))
            })?),
            None => None,
        };

        Ok(AppendEntry {
            transaction: self.transaction.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            value: scalar_to_string(&self.value)?,
            source: self.source.unwrap_or_default(),
            datetime,
        })
    }
}

/// Query parameters for list requests.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
    /// Number of entries to skip.
    pub offset: Option<i64>,
    /// Exact source filter. An empty value means unfiltered.
    pub source: Option<String>,
    /// Exact name filter. An empty value means unfiltered.
    pub name: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> QueryParams {
        let non_empty =
            |filter: &Option<String>| filter.clone().filter(|value| !value.is_empty());
        QueryParams {
            limit: self.limit.unwrap_or(100),
            offset: self.offset.unwrap_or(0),
            source: non_empty(&self.source),
            name: non_empty(&self.name),
        }
    }
}

/// Query parameters for the quick ingest route.
///
/// The event time is always server-assigned here; constrained firmware
/// rarely has a trustworthy clock of its own.
#[derive(Debug, Default, Deserialize)]
pub struct QuickParams {
    pub name: Option<String>,
    pub value: Option<String>,
    pub source: Option<String>,
    pub transaction: Option<String>,
}

impl QuickParams {
    pub fn into_append(self) -> AppendEntry {
        AppendEntry {
            transaction: self.transaction.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            datetime: None,
        }
    }
}

/// Renders a JSON scalar to its stored text form. Null becomes the empty
/// string; arrays and objects are a validation error.
fn scalar_to_string(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(Error::Validation(
            "value must be a scalar (string, number, or boolean)".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_parse_create_request_from_json() {
        // given
        let json = r#"{
            "datetime": "2026-08-06T10:30:00Z",
            "transaction": "batch-3",
            "name": "temperature",
            "value": 23.5,
            "source": "sensor-01"
        }"#;

        // when
        let request: CreateEntryRequest = serde_json::from_str(json).unwrap();
        let entry = request.into_append().unwrap();

        // then
        assert_eq!(entry.name, "temperature");
        assert_eq!(entry.value, "23.5");
        assert_eq!(entry.source, "sensor-01");
        assert_eq!(entry.transaction, "batch-3");
        assert_eq!(
            entry.datetime,
            Some(Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn should_default_datetime_when_absent() {
        // given
        let json = r#"{"name": "temperature", "value": "23.5", "source": "sensor-01"}"#;

        // when
        let request: CreateEntryRequest = serde_json::from_str(json).unwrap();
        let entry = request.into_append().unwrap();

        // then
        assert_eq!(entry.datetime, None);
    }

    #[test]
    fn should_normalize_offset_datetime_to_utc() {
        // given
        let request = CreateEntryRequest {
            datetime: Some("2026-08-06T12:30:00+02:00".to_string()),
            ..Default::default()
        };

        // when
        let entry = request.into_append().unwrap();

        // then
        assert_eq!(
            entry.datetime,
            Some(Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn should_reject_unparsable_datetime() {
        // given
        let request = CreateEntryRequest {
            datetime: Some("next tuesday".to_string()),
            ..Default::default()
        };

        // when
        let result = request.into_append();

        // then
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn should_render_boolean_value_as_text() {
        // given
        let request = CreateEntryRequest {
            value: serde_json::Value::Bool(true),
            ..Default::default()
        };

        // when
        let entry = request.into_append().unwrap();

        // then
        assert_eq!(entry.value, "true");
    }

    #[test]
    fn should_render_null_value_as_empty_text() {
        // given
        let request = CreateEntryRequest::default();

        // when
        let entry = request.into_append().unwrap();

        // then
        assert_eq!(entry.value, "");
    }

    #[test]
    fn should_reject_array_value() {
        // given
        let request = CreateEntryRequest {
            value: serde_json::json!([1, 2, 3]),
            ..Default::default()
        };

        // when
        let result = request.into_append();

        // then
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn should_default_list_params() {
        // given
        let params = ListParams::default();

        // when
        let query = params.to_query();

        // then
        assert_eq!(query.limit, 100);
        assert_eq!(query.offset, 0);
        assert_eq!(query.source, None);
        assert_eq!(query.name, None);
    }

    #[test]
    fn should_treat_empty_filter_values_as_unset() {
        // given
        let params = ListParams {
            source: Some(String::new()),
            name: Some("temperature".to_string()),
            ..Default::default()
        };

        // when
        let query = params.to_query();

        // then
        assert_eq!(query.source, None);
        assert_eq!(query.name, Some("temperature".to_string()));
    }

    #[test]
    fn should_build_quick_append_with_server_assigned_time() {
        // given
        let params = QuickParams {
            name: Some("temperature".to_string()),
            value: Some("23.5".to_string()),
            source: Some("arduino-1".to_string()),
            transaction: None,
        };

        // when
        let entry = params.into_append();

        // then
        assert_eq!(entry.name, "temperature");
        assert_eq!(entry.datetime, None);
    }
}
