use chrono::Datelike;
use mercato_core::clock::Clock;
use mercato_core::currency::ExchangeRates;
use std::sync::Arc;

use crate::config::BusinessRules;

/// Currency conversion and seasonal pricing rules.
pub struct PricingService {
    rates: Arc<dyn ExchangeRates>,
    clock: Arc<dyn Clock>,
    rules: BusinessRules,
}

impl PricingService {
    pub fn new(rates: Arc<dyn ExchangeRates>, clock: Arc<dyn Clock>, rules: BusinessRules) -> Self {
        Self {
            rates,
            clock,
            rules,
        }
    }

    /// Convert a base-currency price using the collaborator's rate. The
    /// rate is trusted as-is; a lookup failure propagates unchanged.
    pub fn price_in_currency(
        &self,
        price: f64,
        target_currency: &str,
    ) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        let rate = self.rates.rate(target_currency)?;
        tracing::debug!(target_currency, rate, "converted price");
        Ok(price * rate)
    }

    /// Holiday discount fraction: the configured rate for any time of day
    /// on December 25, zero on every other date.
    pub fn seasonal_discount(&self) -> f64 {
        let today = self.clock.now();
        if today.month() == 12 && today.day() == 25 {
            self.rules.holiday_discount
        } else {
            0.0
        }
    }
}
