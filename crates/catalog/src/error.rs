use thiserror::Error;

/// Errors raised while reading archive payloads.
///
/// Field lookups never fail; only decoding a whole response can.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
