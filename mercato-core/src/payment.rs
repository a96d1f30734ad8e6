use async_trait::async_trait;
use mercato_shared::Masked;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeStatus {
    RequiresAction,
    Processing,
    Succeeded,
    Canceled,
    Failed,
}

/// Terminal result of a charge attempt, as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
    pub reference: Option<String>,
}

/// Card details forwarded to the payment provider. The number is masked in
/// Debug output; format validation is the provider's job, not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: Masked<u64>,
}

impl CreditCard {
    pub fn new(number: u64) -> Self {
        Self {
            number: Masked(number),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the card for the given amount. A declined charge resolves to
    /// a ChargeResult; only transport-level failures return Err.
    async fn charge(
        &self,
        card: &CreditCard,
        amount: f64,
    ) -> Result<ChargeResult, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargeAttempt {
    pub card_number: u64,
    pub amount: f64,
}

/// Gateway stand-in that records every attempt and resolves each charge
/// with a configured status.
pub struct MockPaymentGateway {
    outcome: ChargeStatus,
    charges: Mutex<Vec<ChargeAttempt>>,
}

impl MockPaymentGateway {
    pub fn approving() -> Self {
        Self::with_status(ChargeStatus::Succeeded)
    }

    pub fn declining() -> Self {
        Self::with_status(ChargeStatus::Failed)
    }

    pub fn with_status(outcome: ChargeStatus) -> Self {
        Self {
            outcome,
            charges: Mutex::new(Vec::new()),
        }
    }

    /// Every attempt seen so far, in call order.
    pub fn charges(&self) -> Vec<ChargeAttempt> {
        self.charges.lock().expect("charge log poisoned").clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(
        &self,
        card: &CreditCard,
        amount: f64,
    ) -> Result<ChargeResult, Box<dyn std::error::Error + Send + Sync>> {
        // Card number 0 simulates a gateway outage
        if *card.number.expose() == 0 {
            return Err("Simulated payment gateway failure".into());
        }

        tracing::info!(amount, "processing mock charge");

        self.charges
            .lock()
            .expect("charge log poisoned")
            .push(ChargeAttempt {
                card_number: *card.number.expose(),
                amount,
            });

        Ok(ChargeResult {
            status: self.outcome.clone(),
            reference: Some(format!("mock_ch_{}", card.number.expose() % 10_000)),
        })
    }
}
