use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

pub trait ShippingRates: Send + Sync {
    /// Quote for a destination. None means no carrier serves it, which is
    /// a normal outcome rather than an error.
    fn quote(
        &self,
        destination: &str,
    ) -> Result<Option<ShippingQuote>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory quote table, keyed by destination.
#[derive(Default)]
pub struct InMemoryShippingRates {
    quotes: HashMap<String, ShippingQuote>,
}

impl InMemoryShippingRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, destination: &str, quote: ShippingQuote) -> Self {
        self.quotes.insert(destination.to_string(), quote);
        self
    }
}

impl ShippingRates for InMemoryShippingRates {
    fn quote(
        &self,
        destination: &str,
    ) -> Result<Option<ShippingQuote>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.quotes.get(destination).cloned())
    }
}
