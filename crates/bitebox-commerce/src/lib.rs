//! Food-ordering domain types and logic for Bitebox.
//!
//! - **Catalog**: restaurants, menus, and the menu item → cart mapping
//! - **Search**: category and name filtering over the catalog
//! - **Cart**: line items, quantity rules, totals, and the shared [`CartStore`]
//! - **Checkout**: checkout flow over a cart snapshot, simulated payment, orders
//! - **Feedback**: post-order ratings kept in a JSON file
//!
//! # Example
//!
//! ```rust
//! use bitebox_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let store = CartStore::default();
//! let badge = store.subscribe();
//!
//! let (restaurant, whopper) = catalog
//!     .find_menu_item(&RestaurantId::new("1"), "Whopper")
//!     .unwrap();
//! store.add_item(whopper.to_candidate(restaurant));
//! store.add_item(whopper.to_candidate(restaurant));
//! assert!(badge.has_changed());
//!
//! let mut checkout = CheckoutFlow::start(store.snapshot()).unwrap();
//! checkout.proceed_to_payment().unwrap();
//! checkout.select_payment(PaymentMethod::QrCode).unwrap();
//! let order = checkout.place_order().unwrap();
//! store.clear();
//!
//! assert_eq!(order.total, Money::new(398));
//! assert!(store.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod feedback;
pub mod search;

pub use cart::CartStore;
pub use catalog::Catalog;
pub use config::CartConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, MenuItem, Restaurant};

    // Search
    pub use crate::search::{RestaurantQuery, SortOption};

    // Cart
    pub use crate::cart::{
        Cart, CartSnapshot, CartStore, CartSubscription, ItemCandidate, LineItem,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, FinancialStatus, Order, OrderStatus, PaymentMethod,
    };

    // Feedback
    pub use crate::feedback::{DeliverySpeed, Feedback, FeedbackLog};
}
