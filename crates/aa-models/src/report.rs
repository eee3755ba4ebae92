//! Models for the reporting endpoint: the mutable request body and the
//! paginated page responses.
//!
//! The request body is the Analysis Workspace "debug" JSON and is treated as
//! an opaque contract. Only two substructures are touched in place:
//! - the `globalFilters` array, where every `"type": "dateRange"` entry gets
//!   its `dateRange` rewritten, and
//! - `settings.page`, the pagination cursor.

use aa_core::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A report definition loaded from JSON, mutated in place for date range and
/// pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
  body: Value,
}

impl ReportRequest {
  /// Wrap an already-parsed JSON report definition
  pub fn from_value(body: Value) -> Self {
    Self { body }
  }

  /// Parse a report definition from JSON text
  pub fn from_json_str(raw: &str) -> Result<Self> {
    let body: Value = serde_json::from_str(raw)?;
    Ok(Self { body })
  }

  /// Rewrite every `dateRange` entry of `globalFilters` to cover
  /// `start` through `end`.
  ///
  /// Bodies without a matching filter entry are left untouched, matching the
  /// upstream request format where the date range is optional.
  pub fn set_date_range(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
    let range = format!(
      "{}/{}",
      start.format("%Y-%m-%dT%H:%M:%S%.3f"),
      end.format("%Y-%m-%dT%H:%M:%S%.3f")
    );
    if let Some(filters) = self.body.get_mut("globalFilters").and_then(Value::as_array_mut) {
      for entry in filters.iter_mut() {
        if entry.get("type").and_then(Value::as_str) == Some("dateRange") {
          entry["dateRange"] = Value::String(range.clone());
        }
      }
    }
  }

  /// Advance the pagination cursor, creating `settings` when the body has
  /// none.
  pub fn set_page(&mut self, page: u64) {
    match self.body.get_mut("settings") {
      Some(settings) => {
        settings["page"] = json!(page);
      }
      None => {
        self.body["settings"] = json!({ "page": page });
      }
    }
  }

  /// The JSON body as sent to the reporting endpoint
  pub fn as_value(&self) -> &Value {
    &self.body
  }
}

/// Dimension metadata attached to the response columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMeta {
  /// Dimension id, e.g. `variables/daterangeday`
  pub id: String,

  /// Dimension value type
  #[serde(rename = "type")]
  pub dimension_type: String,
}

/// Column metadata for one page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
  /// Dimension backing the row values
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dimension: Option<DimensionMeta>,

  /// Ids of the metric columns, one per `data` entry of each row
  #[serde(rename = "columnIds")]
  pub column_ids: Vec<String>,
}

/// A single result row: one dimension value plus one metric value per column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
  /// Opaque item id for the dimension value
  #[serde(skip_serializing_if = "Option::is_none")]
  pub item_id: Option<String>,

  /// The dimension value
  pub value: String,

  /// Metric values, index-aligned with `columns.columnIds`
  pub data: Vec<f64>,
}

/// One page of the paginated reporting response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPage {
  /// Total number of pages for this request
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_pages: Option<u64>,

  /// Total number of rows across all pages
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_elements: Option<u64>,

  /// Whether this is the first page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_page: Option<bool>,

  /// Whether this is the last page; the pagination loop stops on `true`
  pub last_page: bool,

  /// Zero-based index of this page
  pub number: u64,

  /// Column metadata
  pub columns: ColumnMeta,

  /// The result rows of this page
  pub rows: Vec<ReportRow>,
}

impl ReportPage {
  /// Validate that every row is index-aligned with the column ids
  pub fn check_row_width(&self) -> Result<()> {
    let width = self.columns.column_ids.len();
    for row in &self.rows {
      if row.data.len() != width {
        return Err(Error::InvalidResponse(format!(
          "row '{}' carries {} values for {} columns",
          row.value,
          row.data.len(),
          width
        )));
      }
    }
    Ok(())
  }
}

/// Error response from the reporting endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportErrorResponse {
  /// Machine-readable error code
  pub error_code: String,

  /// Human-readable description of the failure
  #[serde(default)]
  pub error_description: String,

  /// Correlation id for Adobe support
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_id: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn sample_body() -> Value {
    json!({
      "rsid": "examplersid",
      "globalFilters": [
        { "type": "dateRange", "dateRange": "2018-01-01T00:00:00.000/2018-01-31T23:59:59.999" },
        { "type": "segment", "segmentId": "s123" }
      ],
      "metricContainer": { "metrics": [{ "columnId": "0", "id": "metrics/visits" }] },
      "dimension": "variables/daterangeday"
    })
  }

  #[test]
  fn test_set_date_range_rewrites_date_filters_only() {
    let mut request = ReportRequest::from_value(sample_body());
    let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap().and_hms_opt(23, 59, 59).unwrap();

    request.set_date_range(start, end);

    let filters = request.as_value()["globalFilters"].as_array().unwrap();
    assert_eq!(
      filters[0]["dateRange"],
      json!("2019-03-01T00:00:00.000/2019-03-07T23:59:59.000")
    );
    // The segment filter is untouched
    assert_eq!(filters[1], json!({ "type": "segment", "segmentId": "s123" }));
  }

  #[test]
  fn test_set_date_range_without_filters_is_noop() {
    let mut request = ReportRequest::from_value(json!({ "rsid": "examplersid" }));
    let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    request.set_date_range(start, start);
    assert_eq!(request.as_value(), &json!({ "rsid": "examplersid" }));
  }

  #[test]
  fn test_set_page_creates_settings_when_missing() {
    let mut request = ReportRequest::from_value(sample_body());
    assert!(request.as_value().get("settings").is_none());

    request.set_page(1);
    assert_eq!(request.as_value()["settings"]["page"], json!(1));

    request.set_page(2);
    assert_eq!(request.as_value()["settings"]["page"], json!(2));
  }

  #[test]
  fn test_set_page_preserves_existing_settings() {
    let mut request = ReportRequest::from_value(json!({
      "settings": { "limit": 400, "page": 0 }
    }));
    request.set_page(3);
    assert_eq!(request.as_value()["settings"]["limit"], json!(400));
    assert_eq!(request.as_value()["settings"]["page"], json!(3));
  }

  #[test]
  fn test_report_page_deserializes() {
    let json = r#"{
      "totalPages": 2,
      "firstPage": true,
      "lastPage": false,
      "numberOfElements": 2,
      "number": 0,
      "totalElements": 3,
      "columns": {
        "dimension": { "id": "variables/daterangeday", "type": "time" },
        "columnIds": ["0", "1"]
      },
      "rows": [
        { "itemId": "1180001", "value": "Jan 1, 2019", "data": [1.0, 2.0] },
        { "itemId": "1180002", "value": "Jan 2, 2019", "data": [3.0, 4.0] }
      ]
    }"#;

    let page: ReportPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.number, 0);
    assert!(!page.last_page);
    assert_eq!(page.columns.column_ids, vec!["0", "1"]);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].data, vec![1.0, 2.0]);
    page.check_row_width().unwrap();
  }

  #[test]
  fn test_check_row_width_rejects_short_rows() {
    let page = ReportPage {
      total_pages: None,
      total_elements: None,
      first_page: None,
      last_page: true,
      number: 0,
      columns: ColumnMeta {
        dimension: None,
        column_ids: vec!["0".to_string(), "1".to_string()],
      },
      rows: vec![ReportRow { item_id: None, value: "x".to_string(), data: vec![1.0] }],
    };
    assert!(page.check_row_width().is_err());
  }

  #[test]
  fn test_report_error_response_deserializes() {
    let json = r#"{
      "errorCode": "invalid_dimension",
      "errorDescription": "Dimension not found",
      "errorId": "abc-123"
    }"#;
    let err: ReportErrorResponse = serde_json::from_str(json).unwrap();
    assert_eq!(err.error_code, "invalid_dimension");
    assert_eq!(err.error_description, "Dimension not found");
  }
}
