//! Raw exoplanet archive records.
//!
//! The archive mixes lower- and upper-case column names across endpoints and
//! reports numbers both as JSON numbers and as strings. [`CatalogRecord`]
//! canonicalizes keys once at ingestion and coerces values on lookup, so
//! downstream code never has to care about either quirk.
//!
//! The [`query`] module builds the ADQL request for a range search and the
//! [`response`] module turns the archive's JSON payload back into records.
//! Issuing the HTTP request itself is left to the caller.

pub mod column;
pub mod error;
pub mod query;
pub mod record;
pub mod response;

#[cfg(test)]
mod record_test;

pub use column::CatalogColumn;
pub use error::CatalogError;
pub use query::{build_query, build_where, QueryInput, RangeFilter, CATALOG_TABLE, TAP_SYNC_URL};
pub use record::CatalogRecord;
pub use response::{parse_rows, rows_from_value};
