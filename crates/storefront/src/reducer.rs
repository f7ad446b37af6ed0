//! Unidirectional state updates.
//!
//! ```text
//! Action ──→ Reducer ──→ AppState ──→ Snapshot ──→ renderer
//!    ↑                                                 │
//!    └─────────────────────────────────────────────────┘
//! ```
//!
//! The reducer is the only place where state transitions happen. It is a
//! pure function of (state, action): timers and other side effects live in
//! [`crate::runtime`], which watches `pending_auth` to know when to start or
//! cancel the sign-in timer.

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::auth::AuthForm;
use crate::cart::Cart;
use crate::catalog::CatalogQuery;
use crate::favorites::Favorites;
use crate::state::{AppState, Notice, View};

/// Reducer transforms state based on actions.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Reducer for the whole storefront.
pub struct StorefrontReducer;

impl Reducer for StorefrontReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(mut state: AppState, action: Action) -> AppState {
        if state.notice.is_some() && !action.passes_notice() {
            debug!(action = action.name(), "Action ignored while a notice is showing");
            return state;
        }

        match (state.view, action) {
            (_, Action::DismissNotice) => state.notice = None,

            // Navigation
            (View::Landing, Action::EnterAccount) => {
                state.auth_form = AuthForm::default();
                state.pending_auth = None;
                state.view = View::Auth;
                info!("Entered account form");
            }
            (View::Auth, Action::Back) => {
                state.auth_form = AuthForm::default();
                state.pending_auth = None;
                state.view = View::Landing;
                info!("Left account form");
            }
            (View::Catalog, Action::Back) => {
                // the catalog screen owns its cart, favorites and filters
                state.cart = Cart::new(state.cart.currency());
                state.favorites = Favorites::default();
                state.query = CatalogQuery::default();
                state.cart_open = false;
                state.view = View::Landing;
                info!("Left catalog");
            }

            // Account form
            (View::Auth, Action::ToggleAuthMode) => {
                state.auth_form.toggle_mode();
                state.pending_auth = None;
            }
            (View::Auth, Action::EditField { field, value }) => {
                state.auth_form.set_field(field, value);
            }
            (View::Auth, Action::TogglePasswordVisibility(field)) => {
                state.auth_form.toggle_visibility(field);
            }
            (View::Auth, Action::SubmitAuth) => {
                state.pending_auth = None;
                match state.auth_form.submit() {
                    Ok(_) => {
                        let ticket = state.issue_ticket();
                        state.pending_auth = Some(ticket);
                        info!(%ticket, "Sign-in scheduled");
                    }
                    Err(e) => {
                        warn!(error = %e, "Account form rejected");
                        state.notice = Some(Notice::new(e.to_string()));
                    }
                }
            }
            (View::Auth, Action::AuthCompleted(ticket)) if state.pending_auth == Some(ticket) => {
                state.pending_auth = None;
                state.auth_form = AuthForm::default();
                state.logged_in = true;
                state.view = View::Catalog;
                info!(%ticket, "Signed in");
            }
            (_, Action::AuthCompleted(ticket)) => {
                debug!(%ticket, "Stale sign-in completion ignored");
            }

            // Catalog
            (View::Catalog, Action::SetCategory(category)) => state.query.category = category,
            (View::Catalog, Action::SetSearch(search)) => state.query.search = search,
            (View::Catalog, Action::SetSort(sort)) => state.query.sort = sort,
            (View::Catalog, Action::ToggleFavorite(id)) => {
                if let Some(now) = state.favorites.toggle(&state.catalog, id) {
                    info!(product_id = %id, favorite = now, "Favorite toggled");
                }
            }

            // Cart
            (View::Catalog, Action::AddToCart(key)) => {
                if let Err(e) = state.cart.add_item(&state.catalog, key) {
                    warn!(error = %e, "Add to cart rejected");
                    state.notice = Some(Notice::new(e.to_string()));
                }
            }
            (View::Catalog, Action::SetQuantity { key, quantity }) => {
                state.cart.set_quantity(&key, quantity);
            }
            (View::Catalog, Action::IncrementLine(key)) => {
                state.cart.increment(&key);
            }
            (View::Catalog, Action::DecrementLine(key)) => {
                state.cart.decrement(&key);
            }
            (View::Catalog, Action::RemoveFromCart(key)) => {
                state.cart.remove_item(&key);
            }
            (View::Catalog, Action::ToggleCart) => state.cart_open = !state.cart_open,

            (view, action) => {
                debug!(?view, action = action.name(), "Action does not apply to the current view");
            }
        }

        state
    }
}
