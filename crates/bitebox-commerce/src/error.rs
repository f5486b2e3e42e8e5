//! Commerce error types.
//!
//! Cart operations are total and never produce these; they come from the
//! catalog lookups, checkout transitions, feedback storage, and config
//! loading around the cart.

use thiserror::Error;

/// Errors that can occur in food-ordering operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Restaurant not found.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Menu item not found.
    #[error("Menu item not found: {item} (restaurant {restaurant})")]
    MenuItemNotFound { restaurant: String, item: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty: add items before checking out")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid order status transition.
    #[error("Order {order} cannot move from {from} to {to}")]
    InvalidOrderTransition {
        order: String,
        from: String,
        to: String,
    },

    /// Star rating outside 1..=5.
    #[error("Rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(u8),

    /// Reading or writing a data file failed.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
