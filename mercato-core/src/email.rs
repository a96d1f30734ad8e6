use async_trait::async_trait;
use std::sync::Mutex;

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message to `address`. Resolves once the message has
    /// been dispatched.
    async fn send(
        &self,
        address: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub address: String,
    pub body: String,
}

/// Records every message instead of delivering it; can be flipped to fail
/// every send to exercise callers' propagation.
#[derive(Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    failing: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Everything sent so far, in dispatch order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().expect("email log poisoned").clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(
        &self,
        address: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.failing {
            return Err("mail relay unreachable".into());
        }
        self.sent.lock().expect("email log poisoned").push(SentEmail {
            address: address.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
