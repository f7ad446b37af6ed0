//! Shopping cart.
//!
//! Lines are keyed per variant: the same product in two colors (or two
//! sizes) is two lines. A line's quantity is a `NonZeroU32`, so a line with
//! quantity zero cannot exist; setting a quantity to zero removes the line.

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use vitrine_core::{CurrencyCode, CurrencyError, Price, ProductId};

use crate::catalog::Catalog;

/// Errors returned when adding to the cart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product id does not resolve to a catalog product.
    #[error("product {0} not found")]
    UnknownProduct(ProductId),
    /// The product exists but is not offered in this color/size.
    #[error("product {product_id} is not offered in color {color}, size {size}")]
    UnknownVariant {
        product_id: ProductId,
        color: String,
        size: String,
    },
    /// Quantity overflowed `u32`.
    #[error("quantity overflow for product {0}")]
    QuantityOverflow(ProductId),
}

/// Identity of a cart line: product plus chosen color and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CartKey {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
}

impl CartKey {
    /// Build a key from its parts.
    #[must_use]
    pub fn new(product_id: ProductId, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            product_id,
            color: color.into(),
            size: size.into(),
        }
    }
}

/// A product variant in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub key: CartKey,
    /// Product name at the time the line was created.
    pub name: String,
    /// Unit price at the time the line was created.
    pub unit_price: Price,
    pub image: String,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.unit_price.times(self.quantity.get())
    }
}

/// The cart: an ordered list of lines, in the order they were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    currency: CurrencyCode,
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart that totals in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Currency the cart totals in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Find the line for a key.
    #[must_use]
    pub fn line(&self, key: &CartKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.key == key)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add one unit of a variant.
    ///
    /// Increments the matching line, or creates a new line with quantity 1.
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownProduct` if the id is not in `catalog`,
    /// `CartError::UnknownVariant` if the product is not offered in the
    /// requested color and size, and `CartError::QuantityOverflow` if the
    /// line is already at `u32::MAX`.
    pub fn add_item(&mut self, catalog: &Catalog, key: CartKey) -> Result<NonZeroU32, CartError> {
        let product = catalog
            .get(key.product_id)
            .ok_or(CartError::UnknownProduct(key.product_id))?;
        if !product.offers(&key.color, &key.size) {
            return Err(CartError::UnknownVariant {
                product_id: key.product_id,
                color: key.color,
                size: key.size,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(CartError::QuantityOverflow(key.product_id))?;
            info!(product_id = %key.product_id, quantity = line.quantity.get(), "Cart line incremented");
            return Ok(line.quantity);
        }

        info!(product_id = %key.product_id, color = %key.color, size = %key.size, "Cart line added");
        self.lines.push(CartLine {
            key,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: NonZeroU32::MIN,
        });
        Ok(NonZeroU32::MIN)
    }

    /// Set the quantity of an existing line.
    ///
    /// Zero removes the line. A missing line is never created. Returns
    /// whether the cart changed.
    pub fn set_quantity(&mut self, key: &CartKey, quantity: u32) -> bool {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return self.remove_item(key);
        };
        match self.lines.iter_mut().find(|line| &line.key == key) {
            Some(line) => {
                line.quantity = quantity;
                info!(product_id = %key.product_id, quantity = quantity.get(), "Cart quantity set");
                true
            }
            None => {
                debug!(product_id = %key.product_id, "Quantity change for missing cart line ignored");
                false
            }
        }
    }

    /// Add one to an existing line's quantity. Returns whether the cart
    /// changed; a line already at `u32::MAX` is left as is.
    pub fn increment(&mut self, key: &CartKey) -> bool {
        let Some(line) = self.line(key) else {
            return false;
        };
        match line.quantity.get().checked_add(1) {
            Some(next) => self.set_quantity(key, next),
            None => {
                debug!(product_id = %key.product_id, "Cart quantity already at its maximum");
                false
            }
        }
    }

    /// Subtract one from an existing line's quantity, removing it at zero.
    /// Returns whether the cart changed.
    pub fn decrement(&mut self, key: &CartKey) -> bool {
        match self.line(key) {
            Some(line) => {
                let next = line.quantity.get() - 1;
                self.set_quantity(key, next)
            }
            None => false,
        }
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove_item(&mut self, key: &CartKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.key != key);
        let removed = self.lines.len() != before;
        if removed {
            info!(product_id = %key.product_id, "Cart line removed");
        } else {
            debug!(product_id = %key.product_id, "Removal of missing cart line ignored");
        }
        removed
    }

    /// Sum of `unit_price * quantity` over all lines, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Mismatch` if a line was priced in a different
    /// currency than the cart.
    pub fn total_price(&self) -> Result<Price, CurrencyError> {
        self.lines
            .iter()
            .try_fold(Price::zero(self.currency), |total, line| {
                total.checked_add(line.line_price())
            })
            .map(Price::rounded)
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |total, line| total.saturating_add(line.quantity.get()))
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::seeded(CurrencyCode::BRL)
    }

    fn key(id: i32, color: &str, size: &str) -> CartKey {
        CartKey::new(ProductId::new(id), color, size)
    }

    #[test]
    fn test_add_same_variant_twice_yields_one_line() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        let quantity = cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        assert_eq!(quantity.get(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_distinct_variants_are_distinct_lines() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        cart.add_item(&catalog, key(1, "#808080", "M")).unwrap();
        cart.add_item(&catalog, key(1, "#000000", "G")).unwrap();
        assert_eq!(cart.line_count(), 3);
        assert!(cart.lines().iter().all(|line| line.quantity.get() == 1));
    }

    #[test]
    fn test_add_unknown_product_is_an_error() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        let err = cart.add_item(&catalog, key(42, "#000000", "M")).unwrap_err();
        assert_eq!(err, CartError::UnknownProduct(ProductId::new(42)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_unknown_variant_is_an_error() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        // product 1 has no XG
        let err = cart.add_item(&catalog, key(1, "#000000", "XG")).unwrap_err();
        assert!(matches!(err, CartError::UnknownVariant { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        cart.add_item(&catalog, key(2, "#FFFFFF", "P")).unwrap();

        assert!(cart.set_quantity(&key(1, "#000000", "M"), 0));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 1);
        assert!(cart.line(&key(1, "#000000", "M")).is_none());
    }

    #[test]
    fn test_set_quantity_never_creates_a_line() {
        let mut cart = Cart::new(CurrencyCode::BRL);
        assert!(!cart.set_quantity(&key(1, "#000000", "M"), 3));
        assert!(!cart.set_quantity(&key(1, "#000000", "M"), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_updates_existing_line() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(3, "#808080", "G")).unwrap();
        assert!(cart.set_quantity(&key(3, "#808080", "G"), 5));
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_increment_and_decrement() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        let k = key(4, "#000080", "P");
        cart.add_item(&catalog, k.clone()).unwrap();
        assert!(cart.increment(&k));
        assert_eq!(cart.line(&k).unwrap().quantity.get(), 2);
        assert!(cart.decrement(&k));
        assert!(cart.decrement(&k));
        assert!(cart.is_empty());
        assert!(!cart.decrement(&k));
        assert!(!cart.increment(&k));
    }

    #[test]
    fn test_increment_at_maximum_leaves_line_unchanged() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        let k = key(2, "#FFFFFF", "XG");
        cart.add_item(&catalog, k.clone()).unwrap();
        assert!(cart.set_quantity(&k, u32::MAX));

        assert!(!cart.increment(&k));
        assert_eq!(cart.line(&k).unwrap().quantity.get(), u32::MAX);

        let err = cart.add_item(&catalog, k.clone()).unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow(ProductId::new(2)));
        assert_eq!(cart.line(&k).unwrap().quantity.get(), u32::MAX);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(5, "#000000", "M")).unwrap();
        assert!(!cart.remove_item(&key(5, "#000000", "G")));
        assert_eq!(cart.line_count(), 1);
        assert!(cart.remove_item(&key(5, "#000000", "M")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_is_exact() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        cart.add_item(&catalog, key(1, "#000000", "M")).unwrap();
        cart.add_item(&catalog, key(2, "#FFFFFF", "P")).unwrap();

        let total = cart.total_price().unwrap();
        assert_eq!(total.amount, Decimal::new(38_970, 2));
        assert_eq!(total.to_string(), "R$ 389.70");
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::default();
        assert_eq!(cart.total_price().unwrap(), Price::zero(CurrencyCode::BRL));
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let catalog = catalog();
        let mut cart = Cart::new(CurrencyCode::BRL);
        cart.add_item(&catalog, key(6, "#FFFFFF", "M")).unwrap();
        cart.add_item(&catalog, key(2, "#FFFFFF", "M")).unwrap();
        cart.add_item(&catalog, key(6, "#FFFFFF", "M")).unwrap();
        let order: Vec<i32> = cart
            .lines()
            .iter()
            .map(|line| line.key.product_id.as_i32())
            .collect();
        assert_eq!(order, vec![6, 2]);
    }
}
