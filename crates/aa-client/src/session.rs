//! HTTP session shared by the token provider and the report fetcher
//!
//! The session is a thin wrapper around a reqwest client plus a default
//! header map. Authentication decorates the header map once; every later
//! request carries those headers.

use aa_core::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// An HTTP client carrying the authorization headers for the reporting API
#[derive(Debug, Clone)]
pub struct Session {
  client: Client,
  headers: HeaderMap,
}

impl Session {
  /// Create a session with the default 30 second timeout
  pub fn new() -> Result<Self> {
    Self::with_timeout(Duration::from_secs(30))
  }

  /// Create a session with a custom request timeout
  pub fn with_timeout(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent("aa-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, headers: HeaderMap::new() })
  }

  /// Look up a default header by name
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|v| v.to_str().ok())
  }

  /// Set a default header carried by every subsequent request
  pub fn insert_header(&mut self, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
      .map_err(|e| Error::Http(format!("Invalid value for header {}: {}", name, e)))?;
    self.headers.insert(HeaderName::from_static(name), value);
    Ok(())
  }

  /// POST a form-encoded body, without the default headers.
  ///
  /// Used for the token exchange, which runs before any credential headers
  /// exist on the session.
  pub async fn post_form<T: Serialize + ?Sized>(&self, url: &str, form: &T) -> Result<Response> {
    debug!("POST (form) {}", url);
    self
      .client
      .post(url)
      .form(form)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))
  }

  /// POST a JSON body with the session's default headers attached
  pub async fn post_json(&self, url: &str, body: &Value) -> Result<Response> {
    debug!("POST {}", url);
    self
      .client
      .post(url)
      .headers(self.headers.clone())
      .json(body)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_session_starts_without_headers() {
    let session = Session::new().unwrap();
    assert!(session.header(aa_core::COMPANY_ID_HEADER).is_none());
  }

  #[test]
  fn test_insert_and_read_header() {
    let mut session = Session::new().unwrap();
    session.insert_header(aa_core::COMPANY_ID_HEADER, "examplecom1").unwrap();
    assert_eq!(session.header(aa_core::COMPANY_ID_HEADER), Some("examplecom1"));
  }

  #[test]
  fn test_insert_header_rejects_invalid_value() {
    let mut session = Session::new().unwrap();
    let result = session.insert_header("x-api-key", "bad\nvalue");
    assert!(result.is_err());
  }
}
