//! Restaurant and menu item types.

use crate::cart::ItemCandidate;
use crate::catalog::Category;
use crate::ids::{MenuItemId, RestaurantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog id, when the menu source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    /// Dish name.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl MenuItem {
    /// Create a menu item without an id of its own.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    /// Set an explicit id.
    pub fn with_id(mut self, id: impl Into<MenuItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The id this item carries in a cart from `restaurant`.
    pub fn cart_id(&self, restaurant: &Restaurant) -> MenuItemId {
        self.id
            .clone()
            .unwrap_or_else(|| MenuItemId::composed(&restaurant.id, &self.name))
    }

    /// Map this menu item into something the cart accepts.
    pub fn to_candidate(&self, restaurant: &Restaurant) -> ItemCandidate {
        ItemCandidate::new(self.cart_id(restaurant), self.name.clone(), self.price)
            .with_restaurant(restaurant.id.clone(), restaurant.name.clone())
    }
}

/// A restaurant and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: RestaurantId,
    /// Restaurant name.
    pub name: String,
    /// Cuisine category.
    pub category: Category,
    /// Average rating out of 5.
    pub rating: f32,
    /// Dishes offered.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Create a restaurant with an empty menu.
    pub fn new(
        id: impl Into<RestaurantId>,
        name: impl Into<String>,
        category: Category,
        rating: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rating,
            menu: Vec::new(),
        }
    }

    /// Append a dish to the menu.
    pub fn with_item(mut self, name: impl Into<String>, price: u64) -> Self {
        self.menu.push(MenuItem::new(name, Money::new(price)));
        self
    }

    /// Find a dish by name, ignoring case.
    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }
}
