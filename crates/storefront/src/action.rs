//! User actions and system events fed to the reducer.

use vitrine_core::ProductId;

use crate::auth::AuthField;
use crate::cart::CartKey;
use crate::catalog::{CategoryFilter, SortKey};
use crate::state::AuthTicket;

/// Everything that can change [`crate::state::AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    /// "Enter account" on the landing page.
    EnterAccount,
    /// Back button on the account form or the catalog.
    Back,

    // Account form
    ToggleAuthMode,
    EditField { field: AuthField, value: String },
    TogglePasswordVisibility(AuthField),
    SubmitAuth,
    /// The deferred sign-in timer fired.
    AuthCompleted(AuthTicket),

    // Catalog
    SetCategory(CategoryFilter),
    SetSearch(String),
    SetSort(SortKey),
    ToggleFavorite(ProductId),

    // Cart
    AddToCart(CartKey),
    SetQuantity { key: CartKey, quantity: u32 },
    IncrementLine(CartKey),
    DecrementLine(CartKey),
    RemoveFromCart(CartKey),
    ToggleCart,

    /// Close the blocking notice.
    DismissNotice,
}

impl Action {
    /// Short name for logging. Field values are left out, since they may
    /// hold passwords.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EnterAccount => "enter_account",
            Self::Back => "back",
            Self::ToggleAuthMode => "toggle_auth_mode",
            Self::EditField { .. } => "edit_field",
            Self::TogglePasswordVisibility(_) => "toggle_password_visibility",
            Self::SubmitAuth => "submit_auth",
            Self::AuthCompleted(_) => "auth_completed",
            Self::SetCategory(_) => "set_category",
            Self::SetSearch(_) => "set_search",
            Self::SetSort(_) => "set_sort",
            Self::ToggleFavorite(_) => "toggle_favorite",
            Self::AddToCart(_) => "add_to_cart",
            Self::SetQuantity { .. } => "set_quantity",
            Self::IncrementLine(_) => "increment_line",
            Self::DecrementLine(_) => "decrement_line",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::ToggleCart => "toggle_cart",
            Self::DismissNotice => "dismiss_notice",
        }
    }

    /// Whether the action may run while a notice is showing.
    #[must_use]
    pub const fn passes_notice(&self) -> bool {
        matches!(self, Self::DismissNotice | Self::AuthCompleted(_))
    }
}
