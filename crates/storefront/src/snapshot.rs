//! Read model handed to renderers.
//!
//! A [`StorefrontSnapshot`] carries everything a screen needs, already
//! derived and formatted, so a renderer never touches the stores directly.

use secrecy::ExposeSecret;
use serde::Serialize;

use vitrine_core::ProductId;

use crate::auth::{AuthForm, AuthMode};
use crate::cart::{CartKey, CartLine};
use crate::catalog::Product;
use crate::error::Result;
use crate::state::{AppState, Notice, View};

const MASK: char = '•';

/// Product card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub rating: String,
    pub reviews: u32,
    pub image: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub is_new: bool,
    pub is_on_sale: bool,
    pub is_favorite: bool,
}

impl ProductCard {
    /// Build a card for `product`.
    #[must_use]
    pub fn new(product: &Product, is_favorite: bool) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.as_str(),
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            discount_percent: product.discount_percent(),
            rating: product.rating.to_string(),
            reviews: product.reviews,
            image: product.image.clone(),
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
            is_new: product.is_new,
            is_on_sale: product.is_on_sale,
            is_favorite,
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub key: CartKey,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            key: line.key.clone(),
            name: line.name.clone(),
            quantity: line.quantity.get(),
            unit_price: line.unit_price.to_string(),
            line_price: line.line_price().to_string(),
        }
    }
}

/// Account form display data. Passwords are masked unless revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthFormView {
    pub mode: AuthMode,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
    pub submitting: bool,
}

fn masked(secret: &str, revealed: bool) -> String {
    if revealed {
        secret.to_owned()
    } else {
        secret.chars().map(|_| MASK).collect()
    }
}

impl AuthFormView {
    fn new(form: &AuthForm, submitting: bool) -> Self {
        let register = form.mode() == AuthMode::Register;
        Self {
            mode: form.mode(),
            name: register.then(|| form.name().to_owned()),
            email: form.email().to_owned(),
            password: masked(form.password().expose_secret(), form.shows_password()),
            confirm_password: register.then(|| {
                masked(
                    form.confirm_password().expose_secret(),
                    form.shows_confirm_password(),
                )
            }),
            submitting,
        }
    }
}

/// Current catalog selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryView {
    pub category: &'static str,
    pub search: String,
    pub sort: &'static str,
}

/// Everything a renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontSnapshot {
    pub view: View,
    pub logged_in: bool,
    /// Landing page highlights.
    pub featured: Vec<ProductCard>,
    /// Present on the account view.
    pub auth: Option<AuthFormView>,
    pub query: QueryView,
    /// Filtered, sorted products for the catalog view.
    pub products: Vec<ProductCard>,
    pub cart_open: bool,
    pub cart: Vec<CartLineView>,
    pub total_items: u32,
    pub total_price: String,
    pub favorites: Vec<ProductId>,
    pub notice: Option<Notice>,
}

impl StorefrontSnapshot {
    /// Derive a snapshot from the current state.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Currency` if the cart holds prices in mixed
    /// currencies.
    pub fn capture(state: &AppState) -> Result<Self> {
        let favorites = state.favorites();
        let card = |p: &Product| ProductCard::new(p, favorites.is_favorite(p.id));
        let query = state.query();

        Ok(Self {
            view: state.view(),
            logged_in: state.is_logged_in(),
            featured: state.catalog().featured().map(card).collect(),
            auth: (state.view() == View::Auth)
                .then(|| AuthFormView::new(state.auth_form(), state.pending_auth().is_some())),
            query: QueryView {
                category: query.category.as_str(),
                search: query.search.clone(),
                sort: query.sort.as_str(),
            },
            products: state.visible_products().into_iter().map(card).collect(),
            cart_open: state.is_cart_open(),
            cart: state.cart().lines().iter().map(CartLineView::from).collect(),
            total_items: state.cart().total_item_count(),
            total_price: state.cart().total_price()?.to_string(),
            favorites: favorites.iter().collect(),
            notice: state.notice().cloned(),
        })
    }

    /// "N product(s) found" line for the catalog header.
    #[must_use]
    pub fn result_label(&self) -> String {
        match self.products.len() {
            1 => "1 product found".to_string(),
            n => format!("{n} products found"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use vitrine_core::CurrencyCode;

    use super::*;
    use crate::action::Action;
    use crate::auth::AuthField;
    use crate::catalog::Catalog;
    use crate::reducer::{Reducer, StorefrontReducer};

    fn initial() -> AppState {
        AppState::new(Arc::new(Catalog::seeded(CurrencyCode::BRL)))
    }

    #[test]
    fn test_landing_snapshot() {
        let snapshot = StorefrontSnapshot::capture(&initial()).unwrap();
        assert_eq!(snapshot.view, View::Landing);
        assert_eq!(snapshot.featured.len(), 4);
        assert!(snapshot.auth.is_none());
        assert_eq!(snapshot.total_price, "R$ 0.00");
        assert_eq!(snapshot.result_label(), "6 products found");
    }

    #[test]
    fn test_product_card_formatting() {
        let snapshot = StorefrontSnapshot::capture(&initial()).unwrap();
        let classic = snapshot.products.iter().find(|c| c.id == ProductId::new(1)).unwrap();
        assert_eq!(classic.price, "R$ 149.90");
        assert_eq!(classic.original_price.as_deref(), Some("R$ 199.90"));
        assert_eq!(classic.discount_percent, Some(25));
        assert_eq!(classic.rating, "4.8");
        assert_eq!(classic.category, "sweatshirt");
    }

    #[test]
    fn test_auth_view_masks_passwords() {
        let state = [
            Action::EnterAccount,
            Action::ToggleAuthMode,
            Action::EditField {
                field: AuthField::Password,
                value: "abc".to_string(),
            },
            Action::EditField {
                field: AuthField::ConfirmPassword,
                value: "abc".to_string(),
            },
            Action::TogglePasswordVisibility(AuthField::ConfirmPassword),
        ]
        .into_iter()
        .fold(initial(), StorefrontReducer::reduce);

        let snapshot = StorefrontSnapshot::capture(&state).unwrap();
        let auth = snapshot.auth.unwrap();
        assert_eq!(auth.password, "•••");
        assert_eq!(auth.confirm_password.as_deref(), Some("abc"));
        assert_eq!(auth.name.as_deref(), Some(""));
        assert!(!auth.submitting);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = StorefrontSnapshot::capture(&initial()).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["view"], "landing");
        assert_eq!(json["query"]["sort"], "name");
        assert_eq!(json["products"].as_array().unwrap().len(), 6);
    }
}
