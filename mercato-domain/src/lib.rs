pub mod account;
pub mod checkout;
pub mod config;
pub mod models;
pub mod pricing;
pub mod shipping;
pub mod storefront;

pub use account::AccountService;
pub use checkout::CheckoutService;
pub use config::{BusinessRules, Config};
pub use models::{DeclineReason, Order, OrderOutcome};
pub use pricing::PricingService;
pub use shipping::ShippingService;
pub use storefront::StorefrontService;
