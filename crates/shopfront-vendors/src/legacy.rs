//! Legacy vendor catalog: flat snake_case records with string prices.
//!
//! ## Observed shape
//!
//! The legacy backend predates the storefront's JSON conventions: keys are
//! abbreviated snake_case (`desc`, `cat`, `img_url`) and `cost` is a decimal
//! **string**, not a number. No currency symbol is ever present in `cost`;
//! parsing only needs to tolerate a decimal point.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use shopfront_core::Product;

use crate::error::VendorError;

/// Fixed `source` label stamped on every product this vendor contributes.
pub const SOURCE: &str = "Legacy API";

/// Simulated round-trip latency of the legacy backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

const FIXTURE: &str = include_str!("../fixtures/legacy_products.json");

/// A raw product record as the legacy backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProduct {
    pub product_id: String,
    pub product_name: String,
    /// Price as a decimal string, e.g. `"1299.99"`.
    pub cost: String,
    pub desc: String,
    pub img_url: String,
    pub units_available: u32,
    pub cat: String,
}

/// Stand-in for the legacy catalog backend.
///
/// Holds its response payload in memory and resolves after a fixed
/// simulated latency. The bundled fixture never fails to parse, but callers
/// must still treat [`LegacyClient::fetch`] as fallible.
#[derive(Debug, Clone)]
pub struct LegacyClient {
    payload: String,
    latency: Duration,
}

impl Default for LegacyClient {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl LegacyClient {
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
    /// legacy product list.
    pub async fn fetch(&self) -> Result<Vec<LegacyProduct>, VendorError> {
        tokio::time::sleep(self.latency).await;
        serde_json::from_str(&self.payload).map_err(|e| VendorError::Deserialize {
            context: "legacy product list".to_owned(),
            source: e,
        })
    }
}

/// Maps one raw legacy record to the canonical shape.
///
/// # Errors
///
/// Returns [`VendorError::Normalization`] if `cost` is not a parseable,
/// non-negative decimal.
pub fn normalize_legacy(record: LegacyProduct) -> Result<Product, VendorError> {
    let price: Decimal =
        record
            .cost
            .parse()
            .map_err(|e: rust_decimal::Error| VendorError::Normalization {
                source_product_id: record.product_id.clone(),
                reason: format!("cost \"{}\" is not a decimal: {e}", record.cost),
            })?;
    if price.is_sign_negative() {
        return Err(VendorError::Normalization {
            source_product_id: record.product_id,
            reason: format!("cost {price} is negative"),
        });
    }

    Ok(Product {
        id: record.product_id,
        name: record.product_name,
        price,
        description: record.desc,
        image: record.img_url,
        stock: record.units_available,
        category: record.cat,
        source: SOURCE.to_owned(),
    })
}

/// Adapter that owns the legacy client and yields canonical products.
#[derive(Debug, Clone, Default)]
pub struct LegacyAdapter {
    client: LegacyClient,
}

impl LegacyAdapter {
    #[must_use]
    pub fn new(client: LegacyClient) -> Self {
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
            .filter_map(|record| match normalize_legacy(record) {
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
