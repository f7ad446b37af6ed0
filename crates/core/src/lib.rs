//! Vitrine Core - Shared types library.
//!
//! This crate provides common types used across all Vitrine components:
//! - `storefront` - Catalog, cart, favorites and view-shell state
//! - `cli` - Terminal front end for browsing and driving a session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no global
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and decimal prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
