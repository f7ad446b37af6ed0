//! Vitrine Storefront library.
//!
//! In-memory storefront state: a read-only product catalog, a cart keyed
//! per variant, favorites, a mock account form and the view shell that
//! switches between the landing page, the account form and the catalog.
//!
//! # Architecture
//!
//! - [`state::AppState`] holds everything; [`reducer::StorefrontReducer`]
//!   is the only code that changes it.
//! - [`runtime::Storefront`] wraps the reducer and owns the cancellable
//!   sign-in timer.
//! - [`snapshot::StorefrontSnapshot`] is the read model renderers consume.
//!
//! There is no network, database or persistence.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod reducer;
pub mod runtime;
pub mod snapshot;
pub mod state;

pub use action::Action;
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use runtime::Storefront;
pub use snapshot::StorefrontSnapshot;
pub use state::{AppState, View};
