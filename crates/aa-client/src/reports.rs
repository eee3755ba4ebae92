//! Paginated report fetching against the Adobe Analytics reporting endpoint

use crate::session::Session;
use aa_core::{Error, Result};
use aa_models::report::{ReportErrorResponse, ReportPage, ReportRequest};
use aa_models::table::ReportTable;
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Client for the Adobe Analytics 2.0 reports endpoint
///
/// Takes ownership of an authenticated [`Session`], holds the report request
/// body, and drives the pagination loop until the server reports the last
/// page.
#[derive(Debug, Clone)]
pub struct ReportClient {
  session: Session,
  endpoint: String,
  body: Option<ReportRequest>,
}

impl ReportClient {
  /// Create a report client against the production reporting API
  ///
  /// # Errors
  ///
  /// Fails with [`Error::MissingCompanyId`] when the session has no
  /// `x-proxy-global-company-id` header, i.e. was never authenticated.
  pub fn new(session: Session) -> Result<Self> {
    Self::with_base_url(session, aa_core::ANALYTICS_BASE_URL)
  }

  /// Create a report client against a custom base URL
  ///
  /// The company id from the session headers is spliced into the endpoint
  /// path: `<base_url>/<company-id>/reports`.
  pub fn with_base_url(session: Session, base_url: &str) -> Result<Self> {
    let company_id = session.header(aa_core::COMPANY_ID_HEADER).ok_or(Error::MissingCompanyId)?;
    let endpoint = Url::parse(&format!("{}/{}/reports", base_url.trim_end_matches('/'), company_id))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;
    Ok(Self { session, endpoint: endpoint.to_string(), body: None })
  }

  /// Load the report request body from a JSON file
  pub fn from_json_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
    let raw = fs::read_to_string(path)?;
    self.from_json_str(&raw)
  }

  /// Load the report request body from JSON text
  pub fn from_json_str(&mut self, raw: &str) -> Result<&mut Self> {
    self.body = Some(ReportRequest::from_json_str(raw)?);
    Ok(self)
  }

  /// Override the reporting period of the loaded body
  ///
  /// # Errors
  ///
  /// Fails with [`Error::BodyEmpty`] when no body has been loaded.
  pub fn set_date_range(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<&mut Self> {
    let body = self.body.as_mut().ok_or(Error::BodyEmpty)?;
    body.set_date_range(start, end);
    Ok(self)
  }

  /// Execute the report request and accumulate every page into a table.
  ///
  /// POSTs the body, folds each page's rows into the [`ReportTable`], and
  /// advances `settings.page` until the server flags the last page. The loop
  /// has no local ceiling; it is bounded only by the server's `lastPage`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::BodyEmpty`] when no body has been loaded, and with
  /// [`Error::Api`] carrying the server-reported code and description when
  /// any page responds non-200.
  #[instrument(skip(self), fields(endpoint = %self.endpoint))]
  pub async fn execute(&mut self) -> Result<ReportTable> {
    let body = self.body.as_mut().ok_or(Error::BodyEmpty)?;
    let mut table = ReportTable::new();

    loop {
      let response = self.session.post_json(&self.endpoint, body.as_value()).await?;
      let status = response.status();

      if !status.is_success() {
        let rejection: ReportErrorResponse = response
          .json()
          .await
          .map_err(|e| Error::Http(format!("Unreadable error response ({}): {}", status, e)))?;
        return Err(Error::Api {
          error_code: rejection.error_code,
          error_description: rejection.error_description,
        });
      }

      let page: ReportPage = response
        .json()
        .await
        .map_err(|e| Error::Http(format!("Unreadable report response: {}", e)))?;

      debug!("Page {} carries {} rows (lastPage: {})", page.number, page.rows.len(), page.last_page);
      table.push_page(&page)?;

      if page.last_page {
        break;
      }
      body.set_page(page.number + 1);
    }

    info!("Report complete: {} rows", table.row_count());
    Ok(table)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn authenticated_session() -> Session {
    let mut session = Session::new().unwrap();
    session.insert_header(aa_core::COMPANY_ID_HEADER, "examplecom1").unwrap();
    session
  }

  #[test]
  fn test_construction_requires_company_id_header() {
    let session = Session::new().unwrap();
    let result = ReportClient::new(session);
    assert!(matches!(result, Err(Error::MissingCompanyId)));
  }

  #[test]
  fn test_endpoint_spliced_from_company_id() {
    let client = ReportClient::new(authenticated_session()).unwrap();
    assert_eq!(client.endpoint, "https://analytics.adobe.io/api/examplecom1/reports");
  }

  #[test]
  fn test_date_range_requires_loaded_body() {
    let mut client = ReportClient::new(authenticated_session()).unwrap();
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    let result = client.set_date_range(start, start);
    assert!(matches!(result, Err(Error::BodyEmpty)));
  }

  #[tokio::test]
  async fn test_execute_requires_loaded_body() {
    let mut client = ReportClient::new(authenticated_session()).unwrap();
    let result = client.execute().await;
    assert!(matches!(result, Err(Error::BodyEmpty)));
  }

  #[test]
  fn test_body_loading_allows_chained_date_range() {
    let mut client = ReportClient::new(authenticated_session()).unwrap();
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    client
      .from_json_str(r#"{"globalFilters": [{"type": "dateRange", "dateRange": ""}]}"#)
      .unwrap()
      .set_date_range(start, start)
      .unwrap();
  }
}
