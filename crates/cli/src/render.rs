//! Plain-text rendering of storefront snapshots.

use std::fmt::Write as _;
use std::io::{self, Write};

use vitrine_storefront::View;
use vitrine_storefront::auth::AuthMode;
use vitrine_storefront::snapshot::{AuthFormView, CartLineView, ProductCard, StorefrontSnapshot};

const RULE: &str = "────────────────────────────────────────────────────────";

/// Write text to stdout and flush.
pub fn emit(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// One product card as a block of lines.
pub fn product(card: &ProductCard) -> String {
    let mut out = String::new();
    let mut badges = Vec::new();
    if card.is_new {
        badges.push("NEW");
    }
    if card.is_on_sale {
        badges.push("SALE");
    }
    if card.is_favorite {
        badges.push("♥");
    }

    let _ = write!(out, "[{}] {}  {}", card.id, card.name, card.price);
    if let Some(original) = &card.original_price {
        let _ = write!(out, " (was {original}");
        if let Some(percent) = card.discount_percent {
            let _ = write!(out, ", -{percent}%");
        }
        out.push(')');
    }
    let _ = write!(out, "  ★ {} ({} reviews)", card.rating, card.reviews);
    if !badges.is_empty() {
        let _ = write!(out, "  {}", badges.join(" "));
    }
    let _ = write!(
        out,
        "\n    colors: {}  sizes: {}",
        card.colors.join(" "),
        card.sizes.join(" ")
    );
    out
}

fn auth(form: &AuthFormView) -> String {
    let mut out = String::new();
    let title = match form.mode {
        AuthMode::Login => "Sign in to your account",
        AuthMode::Register => "Create your account",
    };
    let _ = writeln!(out, "{title}");
    if let Some(name) = &form.name {
        let _ = writeln!(out, "  name:     {name}");
    }
    let _ = writeln!(out, "  email:    {}", form.email);
    let _ = writeln!(out, "  password: {}", form.password);
    if let Some(confirm) = &form.confirm_password {
        let _ = writeln!(out, "  confirm:  {confirm}");
    }
    if form.submitting {
        let _ = writeln!(out, "  … signing in");
    }
    let _ = write!(out, "(set <field> <value>, reveal <field>, mode, submit, back)");
    out
}

fn cart_line(line: &CartLineView) -> String {
    format!(
        "  {} x{}  [{} {} {}]  {} each  = {}",
        line.name,
        line.quantity,
        line.key.product_id,
        line.key.color,
        line.key.size,
        line.unit_price,
        line.line_price
    )
}

/// Render the whole screen for a snapshot.
pub fn screen(snapshot: &StorefrontSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");

    match snapshot.view {
        View::Landing => {
            let _ = writeln!(out, "VITRINE - sweatshirts & polos");
            let _ = writeln!(out, "Featured:");
            for card in &snapshot.featured {
                let _ = writeln!(out, "  {}  {}", card.name, card.price);
            }
            let _ = writeln!(out, "(enter: sign in to your account)");
        }
        View::Auth => {
            if let Some(form) = &snapshot.auth {
                let _ = writeln!(out, "{}", auth(form));
            }
        }
        View::Catalog => {
            let _ = writeln!(
                out,
                "Catalog  category: {}  search: \"{}\"  sort: {}  cart: {} item(s)",
                snapshot.query.category,
                snapshot.query.search,
                snapshot.query.sort,
                snapshot.total_items
            );
            let _ = writeln!(out, "{}", snapshot.result_label());
            for card in &snapshot.products {
                let _ = writeln!(out, "{}", product(card));
            }
            if snapshot.cart_open {
                let _ = writeln!(out, "Cart:");
                if snapshot.cart.is_empty() {
                    let _ = writeln!(out, "  (empty)");
                }
                for line in &snapshot.cart {
                    let _ = writeln!(out, "{}", cart_line(line));
                }
                let _ = writeln!(out, "  total: {}", snapshot.total_price);
            }
        }
    }

    if let Some(notice) = &snapshot.notice {
        let _ = writeln!(out, "!! {}  (dismiss to continue)", notice.message);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use vitrine_core::CurrencyCode;
    use vitrine_storefront::AppState;
    use vitrine_storefront::catalog::Catalog;

    use super::*;

    #[test]
    fn test_landing_screen_lists_featured() {
        let state = AppState::new(Arc::new(Catalog::seeded(CurrencyCode::BRL)));
        let snapshot = StorefrontSnapshot::capture(&state).unwrap();
        let text = screen(&snapshot);
        assert!(text.contains("Featured:"));
        assert!(text.contains("Moletom Premium Classic  R$ 149.90"));
        assert!(!text.contains("Moletom Urban Style"));
    }

    #[test]
    fn test_product_card_shows_discount_and_badges() {
        let state = AppState::new(Arc::new(Catalog::seeded(CurrencyCode::BRL)));
        let snapshot = StorefrontSnapshot::capture(&state).unwrap();
        let classic = snapshot.products.iter().find(|c| c.id.as_i32() == 1).unwrap();
        let text = product(classic);
        assert!(text.starts_with("[1] Moletom Premium Classic  R$ 149.90 (was R$ 199.90, -25%)"));
        assert!(text.contains("SALE"));
        assert!(text.contains("sizes: P M G GG"));
    }
}
