//! End-to-end navigation and account flows.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use vitrine_core::ProductId;
use vitrine_integration_tests::{
    AUTH_DELAY, dispatch_all, edit, key, sign_in, storefront, submit_login,
};
use vitrine_storefront::auth::{AuthField, AuthMode};
use vitrine_storefront::{Action, View};

#[tokio::test(start_paused = true)]
async fn test_landing_auth_catalog_cycle() {
    let mut storefront = storefront();
    assert_eq!(storefront.state().view(), View::Landing);

    // in and out of the form without submitting
    dispatch_all(
        &mut storefront,
        [
            Action::EnterAccount,
            edit(AuthField::Email, "draft@example.com"),
            Action::Back,
        ],
    );
    assert_eq!(storefront.state().view(), View::Landing);

    storefront.dispatch(Action::EnterAccount);
    assert!(storefront.state().auth_form().is_pristine());
    assert_eq!(storefront.state().auth_form().mode(), AuthMode::Login);

    dispatch_all(
        &mut storefront,
        [
            edit(AuthField::Email, "ana@example.com"),
            edit(AuthField::Password, "hunter2"),
            Action::SubmitAuth,
        ],
    );
    let snapshot = storefront.snapshot().unwrap();
    assert_eq!(snapshot.view, View::Auth);
    assert!(snapshot.auth.unwrap().submitting);

    let started = tokio::time::Instant::now();
    storefront.next_completion().await.unwrap();
    assert!(started.elapsed() >= AUTH_DELAY);
    assert_eq!(storefront.state().view(), View::Catalog);
    assert!(storefront.state().is_logged_in());

    storefront.dispatch(Action::Back);
    assert_eq!(storefront.state().view(), View::Landing);

    storefront.dispatch(Action::EnterAccount);
    assert!(storefront.state().auth_form().is_pristine());
}

#[tokio::test(start_paused = true)]
async fn test_register_requires_matching_passwords() {
    let mut storefront = storefront();
    dispatch_all(
        &mut storefront,
        [
            Action::EnterAccount,
            Action::ToggleAuthMode,
            edit(AuthField::Name, "Ana"),
            edit(AuthField::Email, "ana@example.com"),
            edit(AuthField::Password, "a"),
            edit(AuthField::ConfirmPassword, "b"),
            Action::SubmitAuth,
        ],
    );

    assert!(!storefront.has_pending_auth());
    let snapshot = storefront.snapshot().unwrap();
    assert_eq!(snapshot.notice.unwrap().message, "passwords do not match");
    let form = snapshot.auth.unwrap();
    assert_eq!(form.mode, AuthMode::Register);
    assert_eq!(form.name.as_deref(), Some("Ana"));
    assert_eq!(form.password, "•");

    dispatch_all(
        &mut storefront,
        [
            Action::DismissNotice,
            edit(AuthField::ConfirmPassword, "a"),
            Action::SubmitAuth,
        ],
    );
    assert!(storefront.has_pending_auth());
    storefront.next_completion().await.unwrap();
    assert_eq!(storefront.state().view(), View::Catalog);
}

#[tokio::test(start_paused = true)]
async fn test_back_out_cancels_pending_sign_in() {
    let mut storefront = storefront();
    submit_login(&mut storefront);
    tokio::time::sleep(AUTH_DELAY / 2).await;
    storefront.dispatch(Action::Back);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(storefront.next_completion().await.is_none());
    assert_eq!(storefront.state().view(), View::Landing);
    assert!(!storefront.state().is_logged_in());
}

#[tokio::test(start_paused = true)]
async fn test_mode_toggle_cancels_pending_sign_in() {
    let mut storefront = storefront();
    submit_login(&mut storefront);
    storefront.dispatch(Action::ToggleAuthMode);

    assert!(!storefront.has_pending_auth());
    assert!(storefront.state().auth_form().is_pristine());
    assert_eq!(storefront.state().auth_form().mode(), AuthMode::Register);
}

#[tokio::test(start_paused = true)]
async fn test_each_catalog_visit_starts_fresh() {
    let mut storefront = storefront();
    sign_in(&mut storefront).await;
    dispatch_all(
        &mut storefront,
        [
            Action::AddToCart(key(1, "#000000", "M")),
            Action::ToggleFavorite(ProductId::new(2)),
            Action::SetSearch("polo".to_string()),
            Action::ToggleCart,
            Action::Back,
        ],
    );
    assert!(!storefront.state().is_cart_open());

    sign_in(&mut storefront).await;
    let snapshot = storefront.snapshot().unwrap();
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.total_items, 0);
    assert!(snapshot.favorites.is_empty());
    assert_eq!(snapshot.query.search, "");
    assert_eq!(snapshot.result_label(), "6 products found");
}
