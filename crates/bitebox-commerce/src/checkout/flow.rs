//! Checkout flow state machine.

use crate::cart::CartSnapshot;
use crate::checkout::Order;
use crate::ids::OrderId;
use crate::money::Money;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Order summary review.
    Review,
    /// Payment method selection and confirmation.
    Payment,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Review => "review",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Review => "Review",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Review => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// How the customer pays. Both are simulated; no gateway is contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Scan the merchant QR code with a payment app.
    QrCode,
    /// Tap "Confirm Payment" directly.
    Manual,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::QrCode => "QR code",
            PaymentMethod::Manual => "Manual confirmation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "qr" | "qr_code" | "qrcode" => Some(PaymentMethod::QrCode),
            "manual" | "confirm" => Some(PaymentMethod::Manual),
            _ => None,
        }
    }
}

/// Checkout over a fixed snapshot of the cart.
///
/// The snapshot is taken when checkout starts; edits to the cart after that
/// do not change what is being paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    /// What is being ordered.
    snapshot: CartSnapshot,
    /// Current step.
    step: CheckoutStep,
    /// Selected payment method.
    payment_method: Option<PaymentMethod>,
    /// Order produced on completion.
    order_id: Option<OrderId>,
    /// When checkout began.
    started_at: DateTime<Utc>,
}

impl CheckoutFlow {
    /// Start checkout. Fails on an empty cart.
    pub fn start(snapshot: CartSnapshot) -> Result<Self, CommerceError> {
        if snapshot.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        info!(
            items = snapshot.total_items,
            total = %snapshot.total_price,
            "Checkout started"
        );
        Ok(Self {
            snapshot,
            step: CheckoutStep::Review,
            payment_method: None,
            order_id: None,
            started_at: Utc::now(),
        })
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The cart contents being checked out.
    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Amount payable.
    pub fn total(&self) -> Money {
        self.snapshot.total_price
    }

    /// Selected payment method.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    /// Id of the placed order, once complete.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// When checkout began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Move from review to payment.
    pub fn proceed_to_payment(&mut self) -> Result<CheckoutStep, CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(self.invalid_transition(CheckoutStep::Payment));
        }
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Go back to review. Not possible once the order is placed.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(self.invalid_transition(CheckoutStep::Review));
        }
        self.step = CheckoutStep::Review;
        Ok(self.step)
    }

    /// Choose how to pay. Only during the payment step.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(self.invalid_transition(CheckoutStep::Payment));
        }
        self.payment_method = Some(method);
        Ok(())
    }

    /// Simulate payment and place the order.
    ///
    /// Always succeeds once a payment method is selected. The caller is
    /// responsible for clearing the cart afterwards.
    pub fn place_order(&mut self) -> Result<Order, CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(self.invalid_transition(CheckoutStep::Complete));
        }
        let method = self
            .payment_method
            .ok_or_else(|| CommerceError::CheckoutIncomplete("payment method".to_string()))?;

        let order = Order::paid(self.snapshot.clone(), method);
        self.step = CheckoutStep::Complete;
        self.order_id = Some(order.id.clone());
        info!(order_id = %order.id, total = %order.total, "Order placed");
        Ok(order)
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 3.0) * 100.0) as u8
    }

    fn invalid_transition(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, ItemCandidate};

    fn snapshot() -> CartSnapshot {
        let mut cart = Cart::default();
        cart.add_item(ItemCandidate::new("1", "Pizza", Money::new(250)));
        cart.add_item(ItemCandidate::new("2", "Burger", Money::new(120)));
        cart.snapshot()
    }

    #[test]
    fn test_empty_cart_rejected() {
        let result = CheckoutFlow::start(Cart::default().snapshot());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::start(snapshot()).unwrap();
        assert_eq!(flow.step(), CheckoutStep::Review);
        assert_eq!(flow.total(), Money::new(370));
        assert!(flow.order_id().is_none());
    }

    #[test]
    fn test_full_flow() {
        let mut flow = CheckoutFlow::start(snapshot()).unwrap();
        flow.proceed_to_payment().unwrap();
        flow.select_payment(PaymentMethod::Manual).unwrap();

        let order = flow.place_order().unwrap();
        assert!(flow.is_complete());
        assert_eq!(flow.order_id(), Some(&order.id));
        assert_eq!(order.total, Money::new(370));
        assert_eq!(order.payment_method, PaymentMethod::Manual);
        assert_eq!(flow.progress_percent(), 100);
    }

    #[test]
    fn test_place_requires_payment_method() {
        let mut flow = CheckoutFlow::start(snapshot()).unwrap();
        flow.proceed_to_payment().unwrap();

        assert!(matches!(
            flow.place_order(),
            Err(CommerceError::CheckoutIncomplete(_))
        ));
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_place_from_review_rejected() {
        let mut flow = CheckoutFlow::start(snapshot()).unwrap();
        assert!(matches!(
            flow.place_order(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
        assert!(flow.select_payment(PaymentMethod::QrCode).is_err());
    }

    #[test]
    fn test_cannot_place_twice() {
        let mut flow = CheckoutFlow::start(snapshot()).unwrap();
        flow.proceed_to_payment().unwrap();
        flow.select_payment(PaymentMethod::QrCode).unwrap();
        flow.place_order().unwrap();

        assert!(flow.place_order().is_err());
        assert!(flow.go_back().is_err());
    }

    #[test]
    fn test_go_back() {
        let mut flow = CheckoutFlow::start(snapshot()).unwrap();
        assert!(flow.go_back().is_err());

        flow.proceed_to_payment().unwrap();
        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Review);
        assert!(flow.proceed_to_payment().is_ok());
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!(PaymentMethod::from_str("QR"), Some(PaymentMethod::QrCode));
        assert_eq!(PaymentMethod::from_str("manual"), Some(PaymentMethod::Manual));
        assert_eq!(PaymentMethod::from_str("card"), None);
    }
}
