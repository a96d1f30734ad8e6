use mercato_core::shipping::ShippingRates;
use std::sync::Arc;

pub const SHIPPING_UNAVAILABLE: &str = "Shipping Unavailable";

/// Human-readable shipping quotes for checkout pages.
pub struct ShippingService {
    rates: Arc<dyn ShippingRates>,
}

impl ShippingService {
    pub fn new(rates: Arc<dyn ShippingRates>) -> Self {
        Self { rates }
    }

    /// Quote message for a destination. A missing quote is a normal
    /// outcome reported in the message itself; no retry.
    pub fn shipping_info(
        &self,
        destination: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let quote = match self.rates.quote(destination)? {
            Some(quote) => quote,
            None => {
                tracing::debug!(destination, "no carrier serves destination");
                return Ok(SHIPPING_UNAVAILABLE.to_string());
            }
        };

        Ok(format!(
            "Shipping cost: ${} ({} days)",
            quote.cost, quote.estimated_days
        ))
    }
}
