//! Checkout module.
//!
//! Contains the checkout flow over a cart snapshot and the resulting order.

mod flow;
mod order;

pub use flow::{CheckoutFlow, CheckoutStep, PaymentMethod};
pub use order::{FinancialStatus, Order, OrderStatus};
