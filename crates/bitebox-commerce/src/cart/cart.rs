//! Cart state and line item types.

use crate::config::CartConfig;
use crate::ids::{MenuItemId, RestaurantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something a caller wants to put in the cart.
///
/// Carries no quantity: adding a candidate always means "one more".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCandidate {
    /// Menu item identifier.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Restaurant the item is ordered from.
    pub restaurant_id: Option<RestaurantId>,
    /// Restaurant name (denormalized for display).
    pub restaurant_name: Option<String>,
}

impl ItemCandidate {
    /// Create a candidate with no restaurant attached.
    pub fn new(id: impl Into<MenuItemId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            restaurant_id: None,
            restaurant_name: None,
        }
    }

    /// Attach the restaurant the item comes from.
    pub fn with_restaurant(mut self, id: RestaurantId, name: impl Into<String>) -> Self {
        self.restaurant_id = Some(id);
        self.restaurant_name = Some(name.into());
        self
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Menu item identifier, unique within a cart.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, never below 1.
    pub quantity: u32,
    /// Restaurant the item is ordered from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RestaurantId>,
    /// Restaurant name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl LineItem {
    fn from_candidate(candidate: ItemCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            price: candidate.price,
            quantity: 1,
            restaurant_id: candidate.restaurant_id,
            restaurant_name: candidate.restaurant_name,
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * u64::from(self.quantity)
    }
}

/// A read-only copy of the cart handed to downstream consumers.
///
/// Later cart mutations are not reflected in an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Items in display order.
    pub items: Vec<LineItem>,
    /// Sum of price times quantity.
    pub total_price: Money,
    /// Sum of quantities.
    pub total_items: u64,
}

impl CartSnapshot {
    /// Check if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The current collection of line items.
///
/// Fields are private: every change goes through a method that keeps ids
/// unique and quantities within `1..=max_quantity_per_item`. Each mutating
/// method reports whether the cart actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
    #[serde(skip)]
    max_quantity_per_item: u32,
}

impl Cart {
    /// Create an empty cart, or a seeded one when the config asks for it.
    pub fn new(config: &CartConfig) -> Self {
        let mut cart = Self {
            items: Vec::new(),
            max_quantity_per_item: config.max_quantity_per_item.max(1),
        };
        if config.seed_demo_items {
            cart.seed_demo_items();
        }
        cart
    }

    /// Create a cart holding the two sample items.
    pub fn with_demo_items() -> Self {
        Self::new(&CartConfig::default().with_demo_items(true))
    }

    fn seed_demo_items(&mut self) {
        self.add_item(ItemCandidate::new("101", "Margherita Pizza", Money::new(250)));
        self.add_item(ItemCandidate::new("202", "BBQ Bacon Burger", Money::new(280)));
        self.increase_quantity(&MenuItemId::new("202"));
    }

    /// Add one unit of an item.
    ///
    /// A candidate whose id is already present only bumps the quantity; its
    /// name and price are ignored in favor of the existing entry.
    pub fn add_item(&mut self, candidate: ItemCandidate) -> bool {
        match self.position(&candidate.id) {
            Some(index) => self.increment(index),
            None => {
                self.items.push(LineItem::from_candidate(candidate));
                true
            }
        }
    }

    /// Add one unit of an item already in the cart. No-op if absent.
    pub fn increase_quantity(&mut self, id: &MenuItemId) -> bool {
        match self.position(id) {
            Some(index) => self.increment(index),
            None => false,
        }
    }

    /// Take one unit off an item, removing it when the quantity reaches zero.
    pub fn decrease_quantity(&mut self, id: &MenuItemId) -> bool {
        match self.position(id) {
            Some(index) => {
                decrement_or_remove(&mut self.items, index);
                true
            }
            None => false,
        }
    }

    /// The "tap minus" gesture. Same policy as [`Cart::decrease_quantity`].
    pub fn remove_one_unit(&mut self, id: &MenuItemId) -> bool {
        self.decrease_quantity(id)
    }

    /// Set an item's quantity outright.
    ///
    /// Zero removes the item; values above the ceiling are clamped.
    pub fn set_quantity(&mut self, id: &MenuItemId, quantity: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if quantity == 0 {
            self.items.remove(index);
            return true;
        }

        let clamped = quantity.min(self.max_quantity_per_item);
        if clamped < quantity {
            warn!(item_id = %id, requested = quantity, max = self.max_quantity_per_item, "Quantity clamped");
        }
        let item = &mut self.items[index];
        if item.quantity == clamped {
            return false;
        }
        item.quantity = clamped;
        true
    }

    /// Remove an item regardless of its quantity. No-op if absent.
    pub fn delete_item(&mut self, id: &MenuItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Remove every item.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// Sum of price times quantity over all items.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all items.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Quantity of an item, 0 when absent.
    pub fn quantity_of(&self, id: &MenuItemId) -> u32 {
        self.get_item(id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Get an item by id.
    pub fn get_item(&self, id: &MenuItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Per-item quantity ceiling.
    pub fn max_quantity_per_item(&self) -> u32 {
        self.max_quantity_per_item
    }

    /// Copy the current contents and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_price: self.total_price(),
            total_items: self.total_item_count(),
        }
    }

    fn position(&self, id: &MenuItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    fn increment(&mut self, index: usize) -> bool {
        let max = self.max_quantity_per_item;
        let item = &mut self.items[index];
        if item.quantity >= max {
            warn!(item_id = %item.id, max, "Quantity ceiling reached");
            return false;
        }
        item.quantity += 1;
        true
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(&CartConfig::default())
    }
}

/// Decrease policy: one unit off, and the line goes away instead of sitting
/// at zero.
fn decrement_or_remove(items: &mut Vec<LineItem>, index: usize) {
    if items[index].quantity > 1 {
        items[index].quantity -= 1;
    } else {
        items.remove(index);
    }
}
