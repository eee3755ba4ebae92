//! Configuration management for the Adobe Analytics client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Adobe Analytics client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Adobe I/O integration client id (becomes the `x-api-key` header)
  pub client_id: String,

  /// Adobe I/O integration client secret
  pub client_secret: String,

  /// IMS organization id, the `iss` claim of the assertion
  pub organization_id: String,

  /// Technical account id, the `sub` claim of the assertion
  pub technical_account_id: String,

  /// Global company id, spliced into the reporting endpoint path
  pub company_id: String,

  /// Requested metascopes, each flattened to a boolean claim
  pub metascopes: Vec<String>,

  /// Path to the PEM-encoded RSA private key of the service account
  pub private_key_path: String,

  /// JWT exchange endpoint
  pub exchange_url: String,

  /// Base URL for the reporting API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let client_id =
      env::var("AA_CLIENT_ID").map_err(|_| Error::Config("AA_CLIENT_ID not set".to_string()))?;

    let client_secret = env::var("AA_CLIENT_SECRET")
      .map_err(|_| Error::Config("AA_CLIENT_SECRET not set".to_string()))?;

    let organization_id =
      env::var("AA_ORG_ID").map_err(|_| Error::Config("AA_ORG_ID not set".to_string()))?;

    let technical_account_id = env::var("AA_TECH_ACCOUNT_ID")
      .map_err(|_| Error::Config("AA_TECH_ACCOUNT_ID not set".to_string()))?;

    let company_id =
      env::var("AA_COMPANY_ID").map_err(|_| Error::Config("AA_COMPANY_ID not set".to_string()))?;

    let metascopes = env::var("AA_METASCOPES")
      .unwrap_or_else(|_| crate::DEFAULT_METASCOPE.to_string())
      .split(',')
      .map(|s| s.trim().to_string())
      .filter(|s| !s.is_empty())
      .collect();

    let private_key_path = env::var("AA_PRIVATE_KEY_PATH")
      .map_err(|_| Error::Config("AA_PRIVATE_KEY_PATH not set".to_string()))?;

    let exchange_url =
      env::var("AA_EXCHANGE_URL").unwrap_or_else(|_| crate::EXCHANGE_ENDPOINT.to_string());

    let base_url =
      env::var("AA_BASE_URL").unwrap_or_else(|_| crate::ANALYTICS_BASE_URL.to_string());

    let timeout_secs = env::var("AA_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AA_TIMEOUT_SECS".to_string()))?;

    Ok(Config {
      client_id,
      client_secret,
      organization_id,
      technical_account_id,
      company_id,
      metascopes,
      private_key_path,
      exchange_url,
      base_url,
      timeout_secs,
    })
  }

  /// Create a config with default endpoints (for testing)
  pub fn default_with_credentials(client_id: String, client_secret: String) -> Self {
    Config {
      client_id,
      client_secret,
      organization_id: String::new(),
      technical_account_id: String::new(),
      company_id: String::new(),
      metascopes: vec![crate::DEFAULT_METASCOPE.to_string()],
      private_key_path: String::new(),
      exchange_url: crate::EXCHANGE_ENDPOINT.to_string(),
      base_url: crate::ANALYTICS_BASE_URL.to_string(),
      timeout_secs: 30,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set_required_vars() {
    env::set_var("AA_CLIENT_ID", "test_client");
    env::set_var("AA_CLIENT_SECRET", "test_secret");
    env::set_var("AA_ORG_ID", "org@AdobeOrg");
    env::set_var("AA_TECH_ACCOUNT_ID", "tech@techacct.adobe.com");
    env::set_var("AA_COMPANY_ID", "examplecom1");
    env::set_var("AA_PRIVATE_KEY_PATH", "/tmp/key.pem");
  }

  #[test]
  fn test_config_from_env() {
    set_required_vars();
    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "test_client");
    assert_eq!(config.company_id, "examplecom1");
    assert_eq!(config.exchange_url, crate::EXCHANGE_ENDPOINT);
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_metascopes_split_and_trimmed() {
    set_required_vars();
    env::set_var("AA_METASCOPES", "scope_a, scope_b ,scope_c");
    let config = Config::from_env().unwrap();
    assert_eq!(config.metascopes, vec!["scope_a", "scope_b", "scope_c"]);
    env::remove_var("AA_METASCOPES");
  }
}
