//! Unified error handling.
//!
//! Each module has its own error enum; `StorefrontError` wraps them so
//! callers that drive the whole storefront can use a single `Result`.

use thiserror::Error;

use vitrine_core::CurrencyError;

use crate::auth::AuthError;
use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog construction or selector parsing failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Account form submission failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Prices in different currencies were combined.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
