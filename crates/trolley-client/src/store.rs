//! The cart store.
//!
//! [`CartStore`] holds the authoritative-as-known item list and a busy
//! flag, scoped to exactly one session at a time. It is an explicit,
//! constructible service: the gateway is injected at construction, the
//! session is pushed in by the application's identity provider, and
//! consumers observe state through a watch subscription.
//!
//! Two rules keep local state convergent with the server:
//!
//! - **Single flight.** Every operation holds the flight lock across
//!   its remote call and commit, so only one is ever in flight and
//!   completions apply in issue order.
//! - **Epoch checks.** Each session transition bumps an epoch; every
//!   operation snapshots the epoch at entry and re-checks it at commit.
//!   A completion issued under an old session is discarded, never
//!   applied.
//!
//! There is no optimistic state: items change only from a confirmed
//! server response or a forced resync.

use crate::config::{FetchFailurePolicy, StoreConfig};
use crate::error::CartError;
use crate::gateway::{CartGateway, NewEntry};
use crate::reconcile::{self, Reconciliation};
use crate::session::Session;
use parking_lot::Mutex;
use tokio::sync::{watch, Mutex as FlightLock};
use tracing::{debug, warn};
use trolley_core::{aggregate, project, CartItem, EntryId, ProductId};

/// The cart state as consumers see it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Current items, wholesale-replaced by fetches and resyncs.
    pub items: Vec<CartItem>,
    /// Whether an operation is in flight.
    pub is_loading: bool,
}

impl CartState {
    /// Total amount, recomputed from the items on every call.
    pub fn total_amount(&self) -> u64 {
        aggregate::total_amount(&self.items)
    }

    /// Item count, recomputed from the items on every call.
    pub fn item_count(&self) -> u32 {
        aggregate::item_count(&self.items)
    }
}

struct Inner {
    state: CartState,
    session: Session,
    epoch: u64,
}

/// Client-side cart state, synchronized with the remote cart service.
pub struct CartStore<G> {
    gateway: G,
    config: StoreConfig,
    inner: Mutex<Inner>,
    flight: FlightLock<()>,
    watch_tx: watch::Sender<CartState>,
}

impl<G: CartGateway> CartStore<G> {
    /// Create a store with the default configuration. The store starts
    /// logged out and empty.
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, StoreConfig::default())
    }

    /// Create a store with an explicit configuration.
    pub fn with_config(gateway: G, config: StoreConfig) -> Self {
        let (watch_tx, _) = watch::channel(CartState::default());
        Self {
            gateway,
            config,
            inner: Mutex::new(Inner {
                state: CartState::default(),
                session: Session::logged_out(),
                epoch: 0,
            }),
            flight: FlightLock::new(()),
            watch_tx,
        }
    }

    /// Subscribe to state snapshots. A new snapshot is published after
    /// every committed change.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.watch_tx.subscribe()
    }

    /// Current items.
    pub fn items(&self) -> Vec<CartItem> {
        self.inner.lock().state.items.clone()
    }

    /// Whether an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.is_loading
    }

    /// Total amount across all items.
    pub fn total_amount(&self) -> u64 {
        self.inner.lock().state.total_amount()
    }

    /// Item count across all items.
    pub fn item_count(&self) -> u32 {
        self.inner.lock().state.item_count()
    }

    /// The session the store is currently bound to.
    pub fn session(&self) -> Session {
        self.inner.lock().session.clone()
    }

    /// Apply a session transition.
    ///
    /// Any change of identity clears the items synchronously and bumps
    /// the epoch under one lock, so nothing issued under the old
    /// session can commit after this point. A transition into a
    /// logged-in session then loads that user's cart.
    pub async fn set_session(&self, session: Session) -> Result<(), CartError> {
        let logged_in = {
            let mut inner = self.inner.lock();
            if inner.session == session {
                return Ok(());
            }
            inner.epoch += 1;
            inner.session = session;
            inner.state.items.clear();
            inner.state.is_loading = false;
            self.watch_tx.send_replace(inner.state.clone());
            inner.session.is_logged_in()
        };

        if logged_in {
            debug!("session is now logged in, loading cart");
            self.fetch().await
        } else {
            debug!("session ended, cart cleared");
            Ok(())
        }
    }

    /// Reload the cart from the server.
    ///
    /// A quiet no-op without a session. On success the items are
    /// replaced wholesale; on failure the previous items stay available
    /// under the default policy (see [`FetchFailurePolicy`]).
    pub async fn fetch(&self) -> Result<(), CartError> {
        let _flight = self.flight.lock().await;

        let (user_id, epoch) = {
            let inner = self.inner.lock();
            match inner.session.user_id() {
                Some(user_id) => (user_id.clone(), inner.epoch),
                None => return Ok(()),
            }
        };

        self.set_loading(epoch, true);
        match self.gateway.list(&user_id).await {
            Ok(entries) => {
                self.commit(epoch, |state| {
                    state.items = project(entries);
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.set_loading(epoch, false);
                match self.config.fetch_failure {
                    FetchFailurePolicy::KeepStale => {
                        warn!(error = %err, "cart fetch failed, keeping stale items");
                        Ok(())
                    }
                    FetchFailurePolicy::Propagate => Err(err),
                }
            }
        }
    }

    /// Add a product to the cart.
    ///
    /// The server decides how the line lands (new entry, or merged into
    /// an existing one); local state follows its response, falling back
    /// to a resync when the response carries no usable cart.
    pub async fn add(
        &self,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Result<(), CartError> {
        let entry = NewEntry {
            product_id: product_id.into(),
            quantity,
        };

        let _flight = self.flight.lock().await;
        let epoch = self.mutation_epoch("add")?;

        self.set_loading(epoch, true);
        let result = match self.gateway.create(&entry).await {
            Ok(entries) => self.apply(epoch, reconcile::after_create(entries)).await,
            Err(err) => Err(err),
        };
        self.set_loading(epoch, false);
        result
    }

    /// Remove an entry from the cart.
    ///
    /// Removal is unambiguous, so the matching local item is dropped
    /// without a resync. Removing an id that is no longer held leaves
    /// state unchanged.
    pub async fn remove(&self, entry_id: &EntryId) -> Result<(), CartError> {
        let _flight = self.flight.lock().await;
        let epoch = self.mutation_epoch("remove")?;

        self.set_loading(epoch, true);
        let result = match self.gateway.delete(entry_id).await {
            Ok(()) => {
                self.commit(epoch, |state| {
                    state.items.retain(|item| &item.id != entry_id);
                });
                Ok(())
            }
            Err(err) => Err(err),
        };
        self.set_loading(epoch, false);
        result
    }

    /// Set an entry's quantity.
    ///
    /// A quantity below 1 is not a distinct state; it delegates
    /// entirely to [`CartStore::remove`].
    pub async fn set_quantity(&self, entry_id: &EntryId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(entry_id).await;
        }

        let _flight = self.flight.lock().await;
        let epoch = self.mutation_epoch("set_quantity")?;

        self.set_loading(epoch, true);
        let result = match self.gateway.update_quantity(entry_id, quantity).await {
            Ok(updated) => {
                let decision = {
                    let inner = self.inner.lock();
                    reconcile::after_quantity_update(&inner.state.items, updated)
                };
                self.apply(epoch, decision).await
            }
            Err(err) => Err(err),
        };
        self.set_loading(epoch, false);
        result
    }

    /// Gate a mutation on an active session.
    fn mutation_epoch(&self, operation: &str) -> Result<u64, CartError> {
        let inner = self.inner.lock();
        if inner.session.is_logged_in() {
            Ok(inner.epoch)
        } else {
            warn!(operation, "cart mutation attempted without an active session");
            Err(CartError::NoSession)
        }
    }

    /// Commit a reconciliation decision.
    async fn apply(&self, epoch: u64, decision: Reconciliation) -> Result<(), CartError> {
        match decision {
            Reconciliation::Replace(items) => {
                self.commit(epoch, |state| state.items = items);
                Ok(())
            }
            Reconciliation::PatchQuantity { entry_id, quantity } => {
                self.commit(epoch, |state| {
                    if let Some(item) = state.items.iter_mut().find(|item| item.id == entry_id) {
                        item.quantity = quantity;
                    }
                });
                Ok(())
            }
            Reconciliation::Resync => {
                debug!("mutation response was insufficient to patch, resyncing");
                self.resync(epoch).await
            }
        }
    }

    /// Re-derive local state from a full list call.
    async fn resync(&self, epoch: u64) -> Result<(), CartError> {
        let user_id = { self.inner.lock().session.user_id().cloned() };
        let Some(user_id) = user_id else {
            // The session ended while the mutation was in flight; the
            // commit would be discarded anyway.
            return Ok(());
        };

        let entries = self.gateway.list(&user_id).await?;
        self.commit(epoch, |state| state.items = project(entries));
        Ok(())
    }

    fn set_loading(&self, epoch: u64, is_loading: bool) {
        self.commit(epoch, |state| state.is_loading = is_loading);
    }

    /// Apply a state change, unless the session has moved on since the
    /// operation was issued.
    fn commit(&self, epoch: u64, change: impl FnOnce(&mut CartState)) {
        let mut inner = self.inner.lock();
        if inner.epoch != epoch {
            debug!("discarding completion issued under a previous session");
            return;
        }
        change(&mut inner.state);
        self.watch_tx.send_replace(inner.state.clone());
    }
}
