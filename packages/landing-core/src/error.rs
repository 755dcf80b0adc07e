//! Error types for loading the page's embedded data.
//!
//! Only catalog and configuration loading can fail. Lead form rejections are
//! user-facing messages and live in [`crate::lead::LeadError`] instead.

use thiserror::Error;

/// Errors raised while loading the listing catalog or the site configuration.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("invalid listing catalog: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("invalid landing config: {0}")]
    Config(#[source] serde_json::Error),

    /// Listing ids become DOM ids, so they must be unique.
    #[error("duplicate listing id: {0}")]
    DuplicateListingId(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
