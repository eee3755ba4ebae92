pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Adobe IMS host used for the service-account token exchange
pub const IMS_HOST: &str = "https://ims-na1.adobelogin.com";

/// Default JWT exchange endpoint
pub const EXCHANGE_ENDPOINT: &str = "https://ims-na1.adobelogin.com/ims/exchange/jwt";

/// Base URL for the Adobe Analytics 2.0 reporting API; the global company id
/// is appended as a path segment, followed by `/reports`.
pub const ANALYTICS_BASE_URL: &str = "https://analytics.adobe.io/api";

/// Default metascope requested when none are configured
pub const DEFAULT_METASCOPE: &str = "https://ims-na1.adobelogin.com/s/ent_analytics_bulk_ingest_sdk";

/// Lifetime of the signed assertion, in seconds
pub const ASSERTION_TTL_SECS: i64 = 60;

/// Header carrying the integration client id
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the global company id
pub const COMPANY_ID_HEADER: &str = "x-proxy-global-company-id";
