//! Modern e-commerce vendor: nested records inside a status envelope.
//!
//! ## Observed shape
//!
//! The modern backend wraps its item list one level deeper than the other
//! vendors: `{ "status": ..., "data": { "items": [...] } }`. Each item
//! splits its fields across camelCase sub-objects (`pricing`, `details`,
//! `media`, `inventory`, `taxonomy`), and `pricing.amount` is already
//! numeric. The adapter extracts by fixed path and rejects envelopes whose
//! status is not `"success"`.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use shopfront_core::Product;

use crate::error::VendorError;

/// Fixed `source` label stamped on every product this vendor contributes.
pub const SOURCE: &str = "Modern E-commerce";

/// Simulated round-trip latency of the modern backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

const FIXTURE: &str = include_str!("../fixtures/modern_inventory.json");

/// Top-level envelope returned by the modern backend's inventory endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ModernInventoryResponse {
    /// `"success"` on a good response; anything else fails the fetch.
    pub status: String,
    pub data: ModernInventoryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernInventoryData {
    pub items: Vec<ModernProduct>,
}

/// A raw product as the modern backend returns it: every concern lives in
/// its own sub-object.
#[derive(Debug, Clone, Deserialize)]
pub struct ModernProduct {
    pub sku: String,
    pub title: String,
    pub pricing: ModernPricing,
    pub details: ModernDetails,
    pub media: ModernMedia,
    pub inventory: ModernInventory,
    pub taxonomy: ModernTaxonomy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernPricing {
    /// Numeric price; no string parsing needed for this vendor.
    pub amount: f64,
    /// ISO 4217 currency code. All bundled vendors quote USD.
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernDetails {
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernMedia {
    pub thumbnail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernInventory {
    #[serde(rename = "inStock")]
    pub in_stock: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModernTaxonomy {
    #[serde(rename = "primaryCategory")]
    pub primary_category: String,
}

/// Stand-in for the modern e-commerce backend.
#[derive(Debug, Clone)]
pub struct ModernClient {
    payload: String,
    latency: Duration,
}

impl Default for ModernClient {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl ModernClient {
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

    /// Fetches this vendor's inventory envelope.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::Deserialize`] if the payload is not a valid
    /// inventory envelope.
    pub async fn fetch(&self) -> Result<ModernInventoryResponse, VendorError> {
        tokio::time::sleep(self.latency).await;
        serde_json::from_str(&self.payload).map_err(|e| VendorError::Deserialize {
            context: "modern inventory envelope".to_owned(),
            source: e,
        })
    }
}

/// Maps one raw modern record to the canonical shape.
///
/// # Errors
///
/// Returns [`VendorError::Normalization`] if `pricing.amount` is not a
/// representable, non-negative decimal.
pub fn normalize_modern(record: ModernProduct) -> Result<Product, VendorError> {
    let price =
        Decimal::try_from(record.pricing.amount).map_err(|e| VendorError::Normalization {
            source_product_id: record.sku.clone(),
            reason: format!(
                "pricing.amount {} is not a representable decimal: {e}",
                record.pricing.amount
            ),
        })?;
    if price.is_sign_negative() {
        return Err(VendorError::Normalization {
            source_product_id: record.sku,
            reason: format!("pricing.amount {price} is negative"),
        });
    }

    Ok(Product {
        id: record.sku,
        name: record.title,
        price,
        description: record.details.summary,
        image: record.media.thumbnail,
        stock: record.inventory.in_stock,
        category: record.taxonomy.primary_category,
        source: SOURCE.to_owned(),
    })
}

/// Adapter that owns the modern client and yields canonical products.
#[derive(Debug, Clone, Default)]
pub struct ModernAdapter {
    client: ModernClient,
}

impl ModernAdapter {
    #[must_use]
    pub fn new(client: ModernClient) -> Self {
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
    /// - [`VendorError::Deserialize`] — the underlying fetch failed.
    /// - [`VendorError::Envelope`] — the envelope status is not
    ///   `"success"`.
    pub async fn products(&self) -> Result<Vec<Product>, VendorError> {
        let response = self.client.fetch().await?;
        if response.status != "success" {
            return Err(VendorError::Envelope {
                status: response.status,
            });
        }
        let products = response
            .data
            .items
            .into_iter()
            .filter_map(|record| match normalize_modern(record) {
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
