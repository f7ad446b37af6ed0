//! Product catalog.
//!
//! The catalog is a fixed, read-only list of products loaded once at
//! startup. Everything shown on the catalog screen is derived from it with a
//! [`CatalogQuery`]: a category filter, a search term and a sort key.

mod seed;

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_core::{CurrencyCode, Price, ProductId};

/// Number of products highlighted on the landing page.
pub const FEATURED_COUNT: usize = 4;

/// Errors produced while building a catalog or parsing catalog selectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product has a rating outside 0-5.
    #[error("rating {rating} for product {id} is outside 0-5")]
    RatingOutOfRange {
        /// Offending product.
        id: ProductId,
        /// Offending rating.
        rating: Decimal,
    },
    /// Unknown category name.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Unknown sort key name.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sweatshirt,
    Polo,
}

impl Category {
    /// Wire name used on the command line and in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sweatshirt => "sweatshirt",
            Self::Polo => "polo",
        }
    }

    /// Human-readable plural label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweatshirt => "Sweatshirts",
            Self::Polo => "Polo shirts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector: every product, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Wire name used on the command line and in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sweatshirt" | "sweatshirts" | "moletom" => Ok(Self::Only(Category::Sweatshirt)),
            "polo" | "polos" => Ok(Self::Only(Category::Polo)),
            _ => Err(CatalogError::UnknownCategory(s.to_owned())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name, ascending.
    #[default]
    Name,
    /// Price, lowest first.
    PriceLow,
    /// Price, highest first.
    PriceHigh,
    /// Rating, highest first.
    Rating,
}

impl SortKey {
    /// Wire name used on the command line and in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::PriceLow => a.price.amount.cmp(&b.price.amount),
            Self::PriceHigh => b.price.amount.cmp(&a.price.amount),
            Self::Rating => b.rating.cmp(&a.rating),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-low" | "price_low" | "price-asc" => Ok(Self::PriceLow),
            "price-high" | "price_high" | "price-desc" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            _ => Err(CatalogError::UnknownSortKey(s.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-folded comparison. Names equal up to case tie, so the stable sort
/// keeps their source order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Price before the current discount, when on sale.
    pub original_price: Option<Price>,
    /// Image reference; resolved by whatever renders the product.
    pub image: String,
    pub category: Category,
    /// Color values in display order (hex strings).
    pub colors: Vec<String>,
    /// Size labels in display order.
    pub sizes: Vec<String>,
    /// Average rating, 0-5.
    pub rating: Decimal,
    pub reviews: u32,
    pub is_new: bool,
    pub is_on_sale: bool,
}

impl Product {
    /// Whether the product is offered in this color and size.
    #[must_use]
    pub fn offers(&self, color: &str, size: &str) -> bool {
        self.colors.iter().any(|c| c == color) && self.sizes.iter().any(|s| s == size)
    }

    /// The variant preselected on a product card: first color, first size.
    #[must_use]
    pub fn default_variant(&self) -> Option<(&str, &str)> {
        Some((self.colors.first()?.as_str(), self.sizes.first()?.as_str()))
    }

    /// Whole percent off the original price, if the product is discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.price.percent_off(self.original_price?)
    }
}

/// Category, search term and sort key selected on the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
}

/// The read-only product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id and
    /// `CatalogError::RatingOutOfRange` for ratings outside 0-5.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.rating < Decimal::ZERO || product.rating > Decimal::from(5) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
        }
        Ok(Self { products })
    }

    /// The six products the storefront ships with, priced in `currency`.
    #[must_use]
    pub fn seeded(currency: CurrencyCode) -> Self {
        Self {
            products: seed::products(currency),
        }
    }

    /// All products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether a product with this id exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products highlighted on the landing page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().take(FEATURED_COUNT)
    }

    /// Filter and order products.
    ///
    /// Category must match exactly (or be `All`), the name must contain
    /// `search` case-insensitively, and the result is ordered by `sort`.
    /// Equal keys keep source order.
    #[must_use]
    pub fn list_products(
        &self,
        category: CategoryFilter,
        search: &str,
        sort: SortKey,
    ) -> Vec<&Product> {
        let needle = search.to_lowercase();
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| category.matches(p.category))
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();
        // sort_by is stable, which gives the source-order tie-break
        matches.sort_by(|a, b| sort.compare(a, b));
        matches
    }

    /// [`Self::list_products`] driven by a [`CatalogQuery`].
    #[must_use]
    pub fn list(&self, query: &CatalogQuery) -> Vec<&Product> {
        self.list_products(query.category, &query.search, query.sort)
    }
}
