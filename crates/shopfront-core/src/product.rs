use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product normalized from one of the vendor catalogs into the single
/// shape the storefront displays, filters, and carts across vendors.
///
/// Every field is present and type-correct after normalization regardless
/// of how the originating catalog encodes it — guaranteeing that is the
/// whole job of the vendor normalization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Vendor-assigned identifier, unique within a single load for one
    /// vendor. Different vendors may legitimately reuse the same
    /// identifier; `source` disambiguates.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price. Never negative after normalization. Serialized as a
    /// decimal string (e.g. `"1299.99"`) to avoid float drift downstream.
    pub price: Decimal,
    /// Plain-text product description.
    pub description: String,
    /// URL of the primary product image.
    pub image: String,
    /// Units currently available.
    pub stock: u32,
    /// Vendor-supplied category name. The filter layer matches it exactly.
    pub category: String,
    /// Fixed label of the vendor the record came from
    /// (e.g. `"Legacy API"`).
    pub source: String,
}

impl Product {
    /// Returns `true` if at least one unit is available.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(stock: u32) -> Product {
        Product {
            id: "LEG001".to_string(),
            name: "Laptop Pro 15".to_string(),
            price: "1299.99".parse().unwrap(),
            description: "High-performance laptop".to_string(),
            image: "https://images.example.com/laptop-pro-15.jpg".to_string(),
            stock,
            category: "Electronics".to_string(),
            source: "Legacy API".to_string(),
        }
    }

    #[test]
    fn is_in_stock_false_at_zero() {
        assert!(!make_product(0).is_in_stock());
    }

    #[test]
    fn is_in_stock_true_above_zero() {
        assert!(make_product(1).is_in_stock());
    }

    #[test]
    fn serde_roundtrip_preserves_all_fields() {
        let product = make_product(15);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }

    #[test]
    fn price_serializes_as_decimal_string() {
        let json = serde_json::to_string(&make_product(15)).expect("serialization failed");
        assert!(
            json.contains("\"price\":\"1299.99\""),
            "expected string-encoded price, got: {json}"
        );
    }
}
