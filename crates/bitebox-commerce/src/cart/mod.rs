//! Shopping cart module.
//!
//! [`Cart`] holds the line items and enforces the quantity rules;
//! [`CartStore`] shares one cart between consumers and notifies them of
//! changes.

mod cart;
mod store;

pub use cart::{Cart, CartSnapshot, ItemCandidate, LineItem};
pub use store::{CartStore, CartSubscription};
