//! RESTful vendor catalog: flat camelCase records with numeric prices.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use shopfront_core::Product;

use crate::error::VendorError;

/// Fixed `source` label stamped on every product this vendor contributes.
pub const SOURCE: &str = "REST API";

/// Simulated round-trip latency of the RESTful backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

const FIXTURE: &str = include_str!("../fixtures/restful_products.json");

/// A raw product record as the RESTful backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestfulProduct {
    pub id: String,
    pub name: String,
    /// Numeric price; no string parsing needed for this vendor.
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub quantity_in_stock: u32,
    pub category_name: String,
}

/// Stand-in for the RESTful catalog backend.
#[derive(Debug, Clone)]
pub struct RestfulClient {
    payload: String,
    latency: Duration,
}

impl Default for RestfulClient {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl RestfulClient {
    /// Creates a client over the bundled fixture payload.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            payload: FIXTURE.to_owned(),
            latency,
        }
    }

    /// Creates a client over an arbitrary payload; used to drive failure
    /// paths in tests.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>, latency: Duration) -> Self {
        Self {
            payload: payload.into(),
            latency,
        }
    }

    /// Fetches this vendor's raw product list.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::Deserialize`] if the payload is not a valid
    /// RESTful product list.
    pub async fn fetch(&self) -> Result<Vec<RestfulProduct>, VendorError> {
        tokio::time::sleep(self.latency).await;
        serde_json::from_str(&self.payload).map_err(|e| VendorError::Deserialize {
            context: "restful product list".to_owned(),
            source: e,
        })
    }
}

/// Maps one raw RESTful record to the canonical shape.
///
/// # Errors
///
/// Returns [`VendorError::Normalization`] if `price` is not a
/// representable, non-negative decimal.
pub fn normalize_restful(record: RestfulProduct) -> Result<Product, VendorError> {
    let price = Decimal::try_from(record.price).map_err(|e| VendorError::Normalization {
        source_product_id: record.id.clone(),
        reason: format!("price {} is not a representable decimal: {e}", record.price),
    })?;
    if price.is_sign_negative() {
        return Err(VendorError::Normalization {
            source_product_id: record.id,
            reason: format!("price {price} is negative"),
        });
    }

    Ok(Product {
        id: record.id,
        name: record.name,
        price,
        description: record.description,
        image: record.image_url,
        stock: record.quantity_in_stock,
        category: record.category_name,
        source: SOURCE.to_owned(),
    })
}

/// Adapter that owns the RESTful client and yields canonical products.
#[derive(Debug, Clone, Default)]
pub struct RestfulAdapter {
    client: RestfulClient,
}

impl RestfulAdapter {
    #[must_use]
    pub fn new(client: RestfulClient) -> Self {
        Self { client }
    }

    /// Fetches and normalizes this vendor's products, preserving the
    /// vendor's native ordering.
    ///
    /// Records that fail to normalize are skipped with a warning; the rest
    /// of the list is kept.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::Deserialize`] if the underlying fetch fails.
    pub async fn products(&self) -> Result<Vec<Product>, VendorError> {
        let records = self.client.fetch().await?;
        let products = records
            .into_iter()
            .filter_map(|record| match normalize_restful(record) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(source = SOURCE, error = %e, "skipping unmappable record");
                    None
                }
            })
            .collect();
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: &str, price: f64) -> RestfulProduct {
        RestfulProduct {
            id: id.to_owned(),
            name: "NVMe SSD 1TB".to_owned(),
            price,
            description: "Fast solid-state drive".to_owned(),
            image_url: "https://images.example.com/nvme-ssd-1tb.jpg".to_owned(),
            quantity_in_stock: 45,
            category_name: "Storage".to_owned(),
        }
    }

    #[test]
    fn normalize_restful_converts_numeric_price() {
        let product = normalize_restful(make_record("REST001", 129.99)).unwrap();
        assert_eq!(product.price, "129.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn normalize_restful_maps_all_fields() {
        let product = normalize_restful(make_record("REST001", 129.99)).unwrap();
        assert_eq!(product.id, "REST001");
        assert_eq!(product.name, "NVMe SSD 1TB");
        assert_eq!(product.description, "Fast solid-state drive");
        assert_eq!(product.image, "https://images.example.com/nvme-ssd-1tb.jpg");
        assert_eq!(product.stock, 45);
        assert_eq!(product.category, "Storage");
        assert_eq!(product.source, SOURCE);
    }

    #[test]
    fn normalize_restful_rejects_negative_price() {
        let err = normalize_restful(make_record("REST001", -0.01)).unwrap_err();
        assert!(matches!(err, VendorError::Normalization { .. }));
    }

    #[tokio::test]
    async fn fetch_parses_camel_case_keys() {
        let records = RestfulClient::new(Duration::ZERO).fetch().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "REST001");
        assert_eq!(records[0].quantity_in_stock, 45);
        assert_eq!(records[0].category_name, "Storage");
    }

    #[tokio::test]
    async fn adapter_yields_one_product_per_fixture_record() {
        let adapter = RestfulAdapter::new(RestfulClient::new(Duration::ZERO));
        let products = adapter.products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.source == SOURCE));
    }

    #[tokio::test]
    async fn adapter_propagates_fetch_failure() {
        let adapter = RestfulAdapter::new(RestfulClient::with_payload("{}", Duration::ZERO));
        let err = adapter.products().await.unwrap_err();
        assert!(matches!(err, VendorError::Deserialize { .. }));
    }
}
