use crate::CatalogError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creation payload as received from an untrusted caller; may be absent
/// entirely when the request body was empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product: Product,
    pub message: String,
}

pub const PRODUCT_PUBLISHED: &str = "Product was successfully published";

/// Validate the payload and mint a catalog product with a fresh id.
pub fn create_product(payload: Option<NewProduct>) -> Result<ProductCreated, CatalogError> {
    let payload = payload.ok_or(CatalogError::MissingPayload)?;

    if payload.name.trim().is_empty() {
        return Err(CatalogError::InvalidName);
    }

    if payload.price <= 0.0 {
        return Err(CatalogError::InvalidPrice);
    }

    Ok(ProductCreated {
        product: Product {
            id: Uuid::new_v4(),
            name: payload.name,
            price: payload.price,
        },
        message: PRODUCT_PUBLISHED.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload_publishes_product() {
        let created = create_product(Some(NewProduct {
            name: "Espresso Machine".to_string(),
            price: 249.0,
        }))
        .unwrap();

        assert_eq!(created.product.name, "Espresso Machine");
        assert_eq!(created.product.price, 249.0);
        assert_eq!(created.message, PRODUCT_PUBLISHED);
    }

    #[test]
    fn test_product_wire_format() {
        let created = create_product(Some(NewProduct {
            name: "Mug".to_string(),
            price: 12.5,
        }))
        .unwrap();

        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["product"]["name"], "Mug");
        assert_eq!(json["message"], PRODUCT_PUBLISHED);
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let err = create_product(None).unwrap_err();
        assert_eq!(err, CatalogError::MissingPayload);
        assert_eq!(err.code(), "missing_payload");
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let err = create_product(Some(NewProduct {
            name: "   ".to_string(),
            price: 10.0,
        }))
        .unwrap_err();

        assert_eq!(err, CatalogError::InvalidName);
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_non_positive_price_is_invalid() {
        for price in [0.0, -5.0] {
            let err = create_product(Some(NewProduct {
                name: "Mug".to_string(),
                price,
            }))
            .unwrap_err();

            assert_eq!(err, CatalogError::InvalidPrice);
        }
    }
}
