//! Order types.

use crate::cart::{CartSnapshot, LineItem};
use crate::checkout::PaymentMethod;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, restaurant not started yet.
    #[default]
    Placed,
    /// Kitchen is preparing the food.
    Preparing,
    /// Rider is on the way.
    OutForDelivery,
    /// Handed to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Order Placed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The status that follows this one, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if order can be cancelled. Not once the rider has it.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Placed | OrderStatus::Preparing)
    }
}

/// Payment status. Orders are created paid; cancelling one refunds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Paid,
    Refunded,
}

impl FinancialStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            FinancialStatus::Paid => "Paid",
            FinancialStatus::Refunded => "Refunded",
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Display order number (`ORD-dddddd`).
    pub id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Items as they were in the cart at checkout.
    pub items: Vec<LineItem>,
    /// Amount charged.
    pub total: Money,
    /// Number of units ordered.
    pub item_count: u64,
    /// How the customer paid.
    pub payment_method: PaymentMethod,
    /// Payment status.
    pub financial_status: FinancialStatus,
    /// Delivery status.
    pub status: OrderStatus,
    /// Last status change.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a paid order from a checkout snapshot.
    pub fn paid(snapshot: CartSnapshot, payment_method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::generate(),
            placed_at: now,
            items: snapshot.items,
            total: snapshot.total_price,
            item_count: snapshot.total_items,
            payment_method,
            financial_status: FinancialStatus::Paid,
            status: OrderStatus::Placed,
            updated_at: now,
        }
    }

    /// Check if order is paid.
    pub fn is_paid(&self) -> bool {
        self.financial_status == FinancialStatus::Paid
    }

    /// Move to the next delivery status.
    pub fn advance_status(&mut self) -> Result<OrderStatus, CommerceError> {
        let next = self
            .status
            .next()
            .ok_or_else(|| self.invalid_transition("next"))?;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(next)
    }

    /// Cancel the order and refund the payment.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        if !self.status.can_cancel() {
            return Err(self.invalid_transition(OrderStatus::Cancelled.as_str()));
        }
        self.status = OrderStatus::Cancelled;
        self.financial_status = FinancialStatus::Refunded;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Plain-text receipt.
    pub fn receipt_text(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|i| format!("{}: {} x {}", i.name, i.price, i.quantity))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Order Receipt\n\
             Order ID: {}\n\
             Date: {}\n\
             Items:\n\
             {}\n\
             Total: {}\n\
             Status: {}\n\
             Thank you for your order!",
            self.id,
            self.placed_at.format("%Y-%m-%d %H:%M:%S UTC"),
            items,
            self.total,
            self.financial_status.display_name(),
        )
    }

    fn invalid_transition(&self, to: &str) -> CommerceError {
        CommerceError::InvalidOrderTransition {
            order: self.id.to_string(),
            from: self.status.as_str().to_string(),
            to: to.to_string(),
        }
    }
}
