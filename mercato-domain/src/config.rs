use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BusinessRules {
    /// First hour of the day the storefront is online, inclusive.
    pub open_hour: u32,
    /// Hour the storefront goes offline, exclusive.
    pub close_hour: u32,
    /// Discount fraction applied on December 25.
    #[serde(default = "default_holiday_discount")]
    pub holiday_discount: f64,
}

fn default_holiday_discount() -> f64 {
    0.2
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            open_hour: 8,
            close_hour: 20,
            holiday_discount: 0.2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("business_rules.open_hour", 8_i64)?
            .set_default("business_rules.close_hour", 20_i64)?
            .set_default("business_rules.holiday_discount", 0.2_f64)?
            // Optional configuration files layered over the defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MERCATO__BUSINESS_RULES__OPEN_HOUR=9`
            .add_source(config::Environment::with_prefix("MERCATO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
