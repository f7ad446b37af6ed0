//! Integration tests for Vitrine.
//!
//! The tests drive a [`Storefront`] end to end through actions, the way a
//! front end would, and check the resulting snapshots.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! Sign-in waits use Tokio's paused clock, so tests run with
//! `#[tokio::test(start_paused = true)]` and finish instantly.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use vitrine_core::ProductId;
use vitrine_storefront::auth::AuthField;
use vitrine_storefront::cart::CartKey;
use vitrine_storefront::{Action, Storefront, StorefrontConfig};

/// Sign-in delay used by the tests.
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);

/// A storefront on the seeded catalog with the default delay.
#[must_use]
pub fn storefront() -> Storefront {
    let config = StorefrontConfig {
        auth_delay: AUTH_DELAY,
        ..StorefrontConfig::default()
    };
    Storefront::new(&config)
}

/// Build a form edit action.
#[must_use]
pub fn edit(field: AuthField, value: &str) -> Action {
    Action::EditField {
        field,
        value: value.to_owned(),
    }
}

/// Build a cart key.
#[must_use]
pub fn key(id: i32, color: &str, size: &str) -> CartKey {
    CartKey::new(ProductId::new(id), color, size)
}

/// Apply actions in order.
pub fn dispatch_all(storefront: &mut Storefront, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        storefront.dispatch(action);
    }
}

/// Fill and submit the login form from the landing page.
pub fn submit_login(storefront: &mut Storefront) {
    dispatch_all(
        storefront,
        [
            Action::EnterAccount,
            edit(AuthField::Email, "ana@example.com"),
            edit(AuthField::Password, "hunter2"),
            Action::SubmitAuth,
        ],
    );
}

/// Log in and wait for the deferred completion.
///
/// # Panics
///
/// Panics if the sign-in never completes.
pub async fn sign_in(storefront: &mut Storefront) {
    submit_login(storefront);
    assert!(
        storefront.next_completion().await.is_some(),
        "sign-in did not complete"
    );
}
