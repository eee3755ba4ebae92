//! # aa-models
//!
//! Data models for the Adobe Analytics 2.0 reporting API.
//!
//! This crate provides the typed halves of an otherwise opaque contract: the
//! IMS token exchange responses, the paginated reporting responses, the
//! mutable report request body, and the columnar result table the pages are
//! accumulated into.
//!
//! ## Usage
//!
//! ```ignore
//! use aa_models::report::{ReportPage, ReportRequest};
//! use aa_models::table::ReportTable;
//!
//! let mut request = ReportRequest::from_json_str(&definition_json)?;
//! let page: ReportPage = serde_json::from_str(&response_json)?;
//! let mut table = ReportTable::new();
//! table.push_page(&page)?;
//! ```

#![warn(clippy::all)]

pub mod report;
pub mod table;
pub mod token;

// Re-export the model types for convenience
pub use report::*;
pub use table::*;
pub use token::*;
