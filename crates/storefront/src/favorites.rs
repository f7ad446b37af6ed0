//! Favorite products.

use std::collections::BTreeSet;

use tracing::debug;

use vitrine_core::ProductId;

use crate::catalog::Catalog;

/// Set of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<ProductId>,
}

impl Favorites {
    /// Flip membership of `id`.
    ///
    /// Returns the new membership, or `None` (and leaves the set untouched)
    /// when `id` is not in the catalog.
    pub fn toggle(&mut self, catalog: &Catalog, id: ProductId) -> Option<bool> {
        if !catalog.contains(id) {
            debug!(product_id = %id, "Favorite toggle for unknown product ignored");
            return None;
        }
        if self.ids.remove(&id) {
            Some(false)
        } else {
            self.ids.insert(id);
            Some(true)
        }
    }

    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorited ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::CurrencyCode;

    use super::*;

    #[test]
    fn test_double_toggle_restores_membership() {
        let catalog = Catalog::seeded(CurrencyCode::BRL);
        let mut favorites = Favorites::default();
        let id = ProductId::new(2);

        assert_eq!(favorites.toggle(&catalog, id), Some(true));
        assert!(favorites.is_favorite(id));
        assert_eq!(favorites.toggle(&catalog, id), Some(false));
        assert!(!favorites.is_favorite(id));
        assert_eq!(favorites, Favorites::default());
    }

    #[test]
    fn test_toggle_is_independent_per_product() {
        let catalog = Catalog::seeded(CurrencyCode::BRL);
        let mut favorites = Favorites::default();
        favorites.toggle(&catalog, ProductId::new(5));
        favorites.toggle(&catalog, ProductId::new(1));
        favorites.toggle(&catalog, ProductId::new(5));

        let ids: Vec<i32> = favorites.iter().map(|id| id.as_i32()).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let catalog = Catalog::seeded(CurrencyCode::BRL);
        let mut favorites = Favorites::default();
        assert_eq!(favorites.toggle(&catalog, ProductId::new(77)), None);
        assert!(favorites.is_empty());
    }
}
