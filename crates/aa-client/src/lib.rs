//! # aa-client
//!
//! A client for the Adobe Analytics 2.0 reporting API.
//!
//! ## Features
//!
//! - **Service-account auth**: JWT exchanged for a bearer token via Adobe IMS
//! - **Paginated reports**: Analysis Workspace report definitions executed
//!   page by page into a columnar table
//! - **Type Safe**: Strongly typed responses using aa-models
//! - **Configurable**: Environment-based configuration via aa-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use aa_client::{JwtAuth, ReportClient, Session};
//! use aa_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!
//!     let mut session = Session::new()?;
//!     JwtAuth::from_config(&config)?.authenticate(&mut session).await?;
//!
//!     let mut client = ReportClient::new(session)?;
//!     client.from_json_file("report.json")?;
//!     let table = client.execute().await?;
//!     println!("{} rows", table.row_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, aa_core::Error>` for consistent error
//! handling across the entire aa-* ecosystem. Provider rejections carry the
//! server-reported code and description.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod reports;
pub mod session;

// Re-export the main types and common aliases
pub use auth::JwtAuth;
pub use reports::ReportClient;
pub use session::Session;

pub use aa_core::{Config, Error, Result};
