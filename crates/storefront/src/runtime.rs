//! Storefront runtime.
//!
//! Owns the [`AppState`], feeds actions through the reducer and runs the one
//! side effect the storefront has: the deferred completion of a mock
//! sign-in. The timer is a Tokio task tied to the ticket in
//! `AppState::pending_auth`; when the reducer clears or replaces that ticket
//! (back, mode toggle, resubmit) the task is aborted.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::action::Action;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::reducer::{Reducer, StorefrontReducer};
use crate::snapshot::StorefrontSnapshot;
use crate::state::{AppState, AuthTicket};

/// A running sign-in timer.
struct AuthTimer {
    ticket: AuthTicket,
    handle: JoinHandle<()>,
}

/// The storefront shell: state plus its timer.
///
/// [`Storefront::dispatch`] spawns Tokio tasks and must be called from
/// within a Tokio runtime.
pub struct Storefront {
    state: AppState,
    auth_delay: Duration,
    timer: Option<AuthTimer>,
    completions_tx: mpsc::UnboundedSender<AuthTicket>,
    completions_rx: mpsc::UnboundedReceiver<AuthTicket>,
}

impl Storefront {
    /// Create a storefront on the seeded catalog.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_catalog(config, Catalog::seeded(config.currency))
    }

    /// Create a storefront on a custom catalog.
    #[must_use]
    pub fn with_catalog(config: &StorefrontConfig, catalog: Catalog) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(Arc::new(catalog)),
            auth_delay: config.auth_delay,
            timer: None,
            completions_tx,
            completions_rx,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Derive the read model for rendering.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Currency` if the cart mixes currencies.
    pub fn snapshot(&self) -> Result<StorefrontSnapshot> {
        StorefrontSnapshot::capture(&self.state)
    }

    /// Whether a sign-in completion is pending.
    #[must_use]
    pub const fn has_pending_auth(&self) -> bool {
        self.state.pending_auth().is_some()
    }

    /// Apply an action, then start or cancel the sign-in timer to match.
    #[instrument(skip_all, fields(action = action.name()))]
    pub fn dispatch(&mut self, action: Action) {
        self.state = StorefrontReducer::reduce(self.state.clone(), action);
        self.sync_timer();
    }

    fn sync_timer(&mut self) {
        let wanted = self.state.pending_auth();
        if self.timer.as_ref().map(|t| t.ticket) == wanted {
            return;
        }

        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
            debug!(ticket = %timer.ticket, "Sign-in timer cancelled");
        }

        if let Some(ticket) = wanted {
            let tx = self.completions_tx.clone();
            let delay = self.auth_delay;
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // receiver lives as long as the storefront
                let _ = tx.send(ticket);
            });
            debug!(%ticket, delay_ms = delay.as_millis(), "Sign-in timer started");
            self.timer = Some(AuthTimer { ticket, handle });
        }
    }

    /// Wait for the pending sign-in to complete and apply it.
    ///
    /// Returns `None` immediately when nothing is pending. Completions from
    /// cancelled timers that slipped through before the abort are dropped.
    pub async fn next_completion(&mut self) -> Option<AuthTicket> {
        loop {
            let pending = self.state.pending_auth()?;
            let ticket = self.completions_rx.recv().await?;
            if ticket != pending {
                debug!(%ticket, "Dropped completion from a cancelled timer");
                continue;
            }
            self.timer = None;
            info!(%ticket, "Sign-in timer fired");
            self.dispatch(Action::AuthCompleted(ticket));
            return Some(ticket);
        }
    }
}

impl Drop for Storefront {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }
    }
}
