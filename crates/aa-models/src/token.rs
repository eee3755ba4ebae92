//! Models for the Adobe IMS JWT exchange endpoint

use serde::{Deserialize, Serialize};

/// Successful response from the IMS token exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
  /// Token type, always `bearer` for the exchange flow
  pub token_type: String,

  /// The short-lived bearer token
  pub access_token: String,

  /// Lifetime of the token in milliseconds
  pub expires_in: u64,
}

/// Error response from the IMS token exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenErrorResponse {
  /// Machine-readable error code, e.g. `invalid_client`
  pub error: String,

  /// Human-readable description of the failure
  #[serde(default)]
  pub error_description: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_token_response_deserializes() {
    let json = r#"{
      "token_type": "bearer",
      "access_token": "eyJ4NXUiOi...",
      "expires_in": 86399973
    }"#;

    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.access_token, "eyJ4NXUiOi...");
    assert_eq!(token.expires_in, 86399973);
  }

  #[test]
  fn test_error_response_without_description() {
    let json = r#"{"error": "invalid_token"}"#;
    let err: TokenErrorResponse = serde_json::from_str(json).unwrap();
    assert_eq!(err.error, "invalid_token");
    assert!(err.error_description.is_empty());
  }
}
