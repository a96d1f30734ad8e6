use mercato_core::payment::{ChargeStatus, CreditCard, PaymentGateway};
use std::sync::Arc;

use crate::models::{DeclineReason, Order, OrderOutcome};

/// Order submission against the payment gateway.
pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Charge the card for the order total. Every non-succeeded charge
    /// status collapses to a single payment_error outcome; a gateway
    /// transport failure propagates unchanged.
    pub async fn submit_order(
        &self,
        order: &Order,
        card: &CreditCard,
    ) -> Result<OrderOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.gateway.charge(card, order.total_amount).await?;

        match result.status {
            ChargeStatus::Succeeded => Ok(OrderOutcome::Accepted),
            status => {
                tracing::warn!(order_id = %order.id, ?status, "charge declined");
                Ok(OrderOutcome::Declined {
                    error: DeclineReason::PaymentError,
                })
            }
        }
    }
}
