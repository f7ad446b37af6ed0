//! Application state for the storefront shell.
//!
//! One value holds everything the screens show: which view is active, the
//! account form, the catalog query, the cart, favorites and any blocking
//! notice. It is only ever changed by [`crate::reducer::StorefrontReducer`].

use core::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::auth::AuthForm;
use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogQuery, Product};
use crate::favorites::Favorites;

/// The active screen. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Auth,
    Catalog,
}

/// Identifies one pending mock sign-in completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AuthTicket(u64);

impl AuthTicket {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuthTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A blocking message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Complete storefront state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) view: View,
    pub(crate) logged_in: bool,
    pub(crate) auth_form: AuthForm,
    pub(crate) pending_auth: Option<AuthTicket>,
    pub(crate) last_ticket: u64,
    pub(crate) query: CatalogQuery,
    pub(crate) cart: Cart,
    pub(crate) cart_open: bool,
    pub(crate) favorites: Favorites,
    pub(crate) notice: Option<Notice>,
}

impl AppState {
    /// Initial state: landing view, empty cart, no favorites.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let currency = catalog
            .products()
            .first()
            .map(|p| p.price.currency_code)
            .unwrap_or_default();
        Self {
            catalog,
            view: View::Landing,
            logged_in: false,
            auth_form: AuthForm::default(),
            pending_auth: None,
            last_ticket: 0,
            query: CatalogQuery::default(),
            cart: Cart::new(currency),
            cart_open: false,
            favorites: Favorites::default(),
            notice: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Set once a mock sign-in completes. Nothing reads it beyond display.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub const fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    /// The sign-in completion currently awaited, if any.
    #[must_use]
    pub const fn pending_auth(&self) -> Option<AuthTicket> {
        self.pending_auth
    }

    #[must_use]
    pub const fn query(&self) -> &CatalogQuery {
        &self.query
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Products matching the current query, in display order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.list(&self.query)
    }

    pub(crate) fn issue_ticket(&mut self) -> AuthTicket {
        self.last_ticket += 1;
        AuthTicket(self.last_ticket)
    }
}
