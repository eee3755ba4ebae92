use thiserror::Error;

/// The main error type for aa-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// I/O error (private key file, report definition file)
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error")]
  ParseDate(#[from] chrono::ParseError),

  /// JWT assertion could not be signed
  #[error("JWT signing error: {0}")]
  Jwt(#[from] jsonwebtoken::errors::Error),

  /// The JWT payload is missing required claims
  #[error("Missing required claim: {0}")]
  MissingClaims(String),

  /// The IMS token exchange was rejected
  #[error("Token exchange failed: {error_description} ({error})")]
  TokenExchange {
    /// Provider-reported error code
    error: String,
    /// Provider-reported human-readable description
    error_description: String,
  },

  /// The session is missing the company-id header
  #[error("x-proxy-global-company-id header not set on session")]
  MissingCompanyId,

  /// No report request body has been loaded
  #[error("No report request body set")]
  BodyEmpty,

  /// Invalid response from API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// API error from the reporting endpoint
  #[error("Report request failed: {error_description} ({error_code})")]
  Api {
    /// API-reported error code
    error_code: String,
    /// API-reported human-readable description
    error_description: String,
  },
}

/// Result type alias for aa-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_token_exchange_display_carries_code_and_description() {
    let err = Error::TokenExchange {
      error: "invalid_client".to_string(),
      error_description: "Client credentials are invalid".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid_client"));
    assert!(msg.contains("Client credentials are invalid"));
  }

  #[test]
  fn test_api_error_display_carries_code_and_description() {
    let err = Error::Api {
      error_code: "invalid_dimension".to_string(),
      error_description: "Dimension not found".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("invalid_dimension"));
    assert!(msg.contains("Dimension not found"));
  }
}
