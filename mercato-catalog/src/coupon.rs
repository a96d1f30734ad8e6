use crate::CatalogError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

impl Coupon {
    /// Catalog entries must carry a non-empty code and a discount in [0, 1].
    pub fn is_well_formed(&self) -> bool {
        !self.code.trim().is_empty() && (0.0..=1.0).contains(&self.discount)
    }
}

/// Static coupon set, read-only at runtime. Malformed entries are dropped
/// at construction time.
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        let coupons = coupons
            .into_iter()
            .filter(|coupon| {
                if coupon.is_well_formed() {
                    true
                } else {
                    tracing::warn!(
                        code = %coupon.code,
                        discount = coupon.discount,
                        "dropping malformed coupon"
                    );
                    false
                }
            })
            .collect();

        Self { coupons }
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Discount fraction for a code; 0.0 for unknown codes. An unknown
    /// coupon is a normal outcome, not an error.
    pub fn discount_for(&self, code: &str) -> f64 {
        self.coupons
            .iter()
            .find(|coupon| coupon.code == code)
            .map(|coupon| coupon.discount)
            .unwrap_or(0.0)
    }

    /// Price after applying the coupon. Non-positive prices are invalid.
    pub fn apply(&self, price: f64, code: &str) -> Result<f64, CatalogError> {
        if price <= 0.0 {
            return Err(CatalogError::InvalidPrice);
        }

        Ok(price * (1.0 - self.discount_for(code)))
    }
}

impl Default for CouponCatalog {
    fn default() -> Self {
        Self::new(default_coupons())
    }
}

pub fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            code: "SAVE10".to_string(),
            discount: 0.1,
        },
        Coupon {
            code: "SAVE20".to_string(),
            discount: 0.2,
        },
        Coupon {
            code: "SAVE20NOW".to_string(),
            discount: 0.2,
        },
        Coupon {
            code: "DISCOUNT50OFF".to_string(),
            discount: 0.5,
        },
    ]
}
