//! Fan-out/fan-in over all registered vendor adapters.

use std::time::Duration;

use shopfront_core::{AppConfig, Product};

use crate::error::VendorError;
use crate::legacy::{self, LegacyAdapter, LegacyClient};
use crate::modern::{self, ModernAdapter, ModernClient};
use crate::restful::{self, RestfulAdapter, RestfulClient};

/// Aggregates all vendor catalogs behind one infallible load operation.
///
/// Adapters are registered in a fixed order (legacy, modern, restful), and
/// the merged collection always concatenates per-vendor lists in that
/// order, no matter which vendor's fetch resolves first. A vendor that
/// fails contributes an empty list and a warning; the aggregate call itself
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct ProductFacade {
    legacy: LegacyAdapter,
    modern: ModernAdapter,
    restful: RestfulAdapter,
}

impl ProductFacade {
    #[must_use]
    pub fn new(legacy: LegacyAdapter, modern: ModernAdapter, restful: RestfulAdapter) -> Self {
        Self {
            legacy,
            modern,
            restful,
        }
    }

    /// Builds a facade whose simulated vendor latencies come from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            LegacyAdapter::new(LegacyClient::new(Duration::from_millis(
                config.legacy_latency_ms,
            ))),
            ModernAdapter::new(ModernClient::new(Duration::from_millis(
                config.modern_latency_ms,
            ))),
            RestfulAdapter::new(RestfulClient::new(Duration::from_millis(
                config.restful_latency_ms,
            ))),
        )
    }

    /// Loads every vendor's products concurrently and merges them into one
    /// flat collection.
    ///
    /// All vendor fetches are launched together and awaited to completion;
    /// there is no cross-vendor ordering dependency, no deduplication, and
    /// no retry — a failed vendor simply contributes nothing for this load
    /// cycle, and calling again retries all vendors together.
    pub async fn all_products(&self) -> Vec<Product> {
        let (legacy, modern, restful) = futures::join!(
            self.legacy.products(),
            self.modern.products(),
            self.restful.products(),
        );

        let mut merged = Vec::new();
        merged.extend(settle(legacy::SOURCE, legacy));
        merged.extend(settle(modern::SOURCE, modern));
        merged.extend(settle(restful::SOURCE, restful));
        merged
    }
}

/// Converts one vendor's outcome into its contribution to the merge.
fn settle(source: &'static str, outcome: Result<Vec<Product>, VendorError>) -> Vec<Product> {
    match outcome {
        Ok(products) => {
            tracing::debug!(source, count = products.len(), "collected vendor products");
            products
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "vendor fetch failed; contributing no products");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str) -> Product {
        Product {
            id: id.to_owned(),
            name: "Wireless Mouse".to_owned(),
            price: "29.99".parse().unwrap(),
            description: "Ergonomic wireless mouse".to_owned(),
            image: "https://images.example.com/wireless-mouse.jpg".to_owned(),
            stock: 50,
            category: "Accessories".to_owned(),
            source: legacy::SOURCE.to_owned(),
        }
    }

    #[test]
    fn settle_passes_successful_result_through() {
        let products = vec![make_product("LEG001"), make_product("LEG002")];
        let settled = settle(legacy::SOURCE, Ok(products.clone()));
        assert_eq!(settled, products);
    }

    #[test]
    fn settle_converts_failure_to_empty_contribution() {
        let outcome = Err(VendorError::Envelope {
            status: "maintenance".to_owned(),
        });
        assert!(settle(modern::SOURCE, outcome).is_empty());
    }
}
