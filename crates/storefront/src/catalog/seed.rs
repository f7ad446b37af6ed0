//! Products the storefront ships with.

use rust_decimal::Decimal;

use vitrine_core::{CurrencyCode, Price, ProductId};

use super::{Category, Product};

const PHOTO_CLASSIC: &str = "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg";
const PHOTO_POLO: &str = "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg";
const PHOTO_COMFORT: &str = "https://images.pexels.com/photos/1021693/pexels-photo-1021693.jpeg";
const PHOTO_SPORT: &str = "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

/// Build the seeded product list.
pub(super) fn products(currency: CurrencyCode) -> Vec<Product> {
    let price = |cents: i64| Price::from_cents(cents, currency);
    let rating = |tenths: i64| Decimal::new(tenths, 1);

    vec![
        Product {
            id: ProductId::new(1),
            name: "Moletom Premium Classic".to_owned(),
            price: price(14_990),
            original_price: Some(price(19_990)),
            image: PHOTO_CLASSIC.to_owned(),
            category: Category::Sweatshirt,
            colors: strings(&["#000000", "#808080", "#FFFFFF", "#000080"]),
            sizes: strings(&["P", "M", "G", "GG"]),
            rating: rating(48),
            reviews: 124,
            is_new: false,
            is_on_sale: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Polo Clássica Elegante".to_owned(),
            price: price(8_990),
            original_price: None,
            image: PHOTO_POLO.to_owned(),
            category: Category::Polo,
            colors: strings(&["#FFFFFF", "#000080", "#800000", "#008000"]),
            sizes: strings(&["P", "M", "G", "GG", "XG"]),
            rating: rating(46),
            reviews: 89,
            is_new: true,
            is_on_sale: false,
        },
        Product {
            id: ProductId::new(3),
            name: "Moletom Comfort Fit".to_owned(),
            price: price(12_990),
            original_price: None,
            image: PHOTO_COMFORT.to_owned(),
            category: Category::Sweatshirt,
            colors: strings(&["#808080", "#000000", "#FFFFFF"]),
            sizes: strings(&["P", "M", "G", "GG"]),
            rating: rating(47),
            reviews: 156,
            is_new: false,
            is_on_sale: false,
        },
        Product {
            id: ProductId::new(4),
            name: "Polo Sport Performance".to_owned(),
            price: price(9_990),
            original_price: Some(price(11_990)),
            image: PHOTO_SPORT.to_owned(),
            category: Category::Polo,
            colors: strings(&["#000080", "#FFFFFF", "#FF0000", "#000000"]),
            sizes: strings(&["P", "M", "G", "GG"]),
            rating: rating(45),
            reviews: 73,
            is_new: false,
            is_on_sale: true,
        },
        Product {
            id: ProductId::new(5),
            name: "Moletom Urban Style".to_owned(),
            price: price(16_990),
            original_price: None,
            image: PHOTO_SPORT.to_owned(),
            category: Category::Sweatshirt,
            colors: strings(&["#000000", "#808080", "#000080"]),
            sizes: strings(&["M", "G", "GG", "XG"]),
            rating: rating(49),
            reviews: 201,
            is_new: true,
            is_on_sale: false,
        },
        Product {
            id: ProductId::new(6),
            name: "Polo Business Premium".to_owned(),
            price: price(11_990),
            original_price: None,
            image: PHOTO_POLO.to_owned(),
            category: Category::Polo,
            colors: strings(&["#FFFFFF", "#000080", "#800000"]),
            sizes: strings(&["P", "M", "G", "GG"]),
            rating: rating(48),
            reviews: 92,
            is_new: false,
            is_on_sale: false,
        },
    ]
}
