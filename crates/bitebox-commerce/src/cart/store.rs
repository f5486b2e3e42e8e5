//! Shared cart store with change notification.
//!
//! [`CartStore`] is a cheap handle: clone it into every screen that needs the
//! cart. All clones mutate the same [`Cart`], and every subscriber is woken
//! after a mutation that changed something. Mutations that turn out to be
//! no-ops (unknown id, ceiling reached, clearing an empty cart) wake nobody.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::cart::{Cart, CartSnapshot, ItemCandidate, LineItem};
use crate::config::CartConfig;
use crate::ids::MenuItemId;
use crate::money::Money;

/// Single source of truth for the order in progress.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: Arc<watch::Sender<Cart>>,
}

impl CartStore {
    /// Create a store from config.
    pub fn new(config: &CartConfig) -> Self {
        Self::from_cart(Cart::new(config))
    }

    /// Wrap an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        let (tx, _rx) = watch::channel(cart);
        Self { state: Arc::new(tx) }
    }

    /// Register a consumer. It starts out having seen the current state.
    pub fn subscribe(&self) -> CartSubscription {
        CartSubscription {
            rx: self.state.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    /// Add one unit of an item, inserting it if new.
    pub fn add_item(&self, candidate: ItemCandidate) -> bool {
        let id = candidate.id.clone();
        self.mutate("add_item", &id, |cart| cart.add_item(candidate))
    }

    /// Take one unit off an item, removing it at zero.
    pub fn remove_one_unit(&self, id: &MenuItemId) -> bool {
        self.mutate("remove_one_unit", id, |cart| cart.remove_one_unit(id))
    }

    /// Add one unit of an item already in the cart.
    pub fn increase_quantity(&self, id: &MenuItemId) -> bool {
        self.mutate("increase_quantity", id, |cart| cart.increase_quantity(id))
    }

    /// Take one unit off an item, removing it at zero.
    pub fn decrease_quantity(&self, id: &MenuItemId) -> bool {
        self.mutate("decrease_quantity", id, |cart| cart.decrease_quantity(id))
    }

    /// Set an item's quantity; zero removes it.
    pub fn set_quantity(&self, id: &MenuItemId, quantity: u32) -> bool {
        self.mutate("set_quantity", id, |cart| cart.set_quantity(id, quantity))
    }

    /// Remove an item regardless of quantity.
    pub fn delete_item(&self, id: &MenuItemId) -> bool {
        self.mutate("delete_item", id, |cart| cart.delete_item(id))
    }

    /// Empty the cart.
    pub fn clear(&self) -> bool {
        let changed = self.state.send_if_modified(Cart::clear);
        debug!(op = "clear", changed, "Cart mutation");
        changed
    }

    /// Sum of price times quantity.
    pub fn total_price(&self) -> Money {
        self.state.borrow().total_price()
    }

    /// Sum of quantities.
    pub fn total_item_count(&self) -> u64 {
        self.state.borrow().total_item_count()
    }

    /// Quantity of an item, 0 when absent.
    pub fn quantity_of(&self, id: &MenuItemId) -> u32 {
        self.state.borrow().quantity_of(id)
    }

    /// Copy of a single item.
    pub fn get_item(&self, id: &MenuItemId) -> Option<LineItem> {
        self.state.borrow().get_item(id).cloned()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Detached copy of the current contents and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        self.state.borrow().snapshot()
    }

    /// Run a read-only closure against the current cart.
    ///
    /// The store is locked for reading while `f` runs; do not call mutating
    /// methods from inside it.
    pub fn read<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(&self.state.borrow())
    }

    fn mutate(
        &self,
        op: &'static str,
        id: &MenuItemId,
        f: impl FnOnce(&mut Cart) -> bool,
    ) -> bool {
        let changed = self.state.send_if_modified(f);
        debug!(op, item_id = %id, changed, "Cart mutation");
        changed
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(&CartConfig::default())
    }
}

/// A consumer's view of the store.
#[derive(Debug)]
pub struct CartSubscription {
    rx: watch::Receiver<Cart>,
}

impl CartSubscription {
    /// Whether the cart changed since this subscriber last looked.
    ///
    /// Returns false once the store has been dropped.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Snapshot the current cart and mark it seen.
    pub fn latest(&mut self) -> CartSnapshot {
        self.rx.borrow_and_update().snapshot()
    }

    /// Snapshot the current cart without marking it seen.
    pub fn peek(&self) -> CartSnapshot {
        self.rx.borrow().snapshot()
    }

    /// Wait for the next change.
    ///
    /// Resolves to `None` when every store handle has been dropped.
    pub async fn changed(&mut self) -> Option<CartSnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.latest())
    }
}
