use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub total_amount: f64,
}

impl Order {
    pub fn new(total_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeclineReason {
    PaymentError,
}

/// Outcome of submitting an order. A declined charge is a value, not an
/// operation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderOutcome {
    Accepted,
    Declined { error: DeclineReason },
}

impl OrderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderOutcome::Accepted)
    }
}
