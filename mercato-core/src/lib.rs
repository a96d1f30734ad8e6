pub mod analytics;
pub mod clock;
pub mod currency;
pub mod email;
pub mod payment;
pub mod security;
pub mod shipping;
pub mod validation;

pub use analytics::AnalyticsSink;
pub use clock::{Clock, SystemClock};
pub use currency::ExchangeRates;
pub use email::EmailSender;
pub use payment::{ChargeResult, ChargeStatus, CreditCard, PaymentGateway};
pub use security::CodeGenerator;
pub use shipping::{ShippingQuote, ShippingRates};
pub use validation::ValidationError;
