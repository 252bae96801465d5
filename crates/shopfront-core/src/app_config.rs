/// Runtime configuration for the storefront binaries.
///
/// Loaded from environment variables by [`crate::config::load_app_config`].
/// Every field has a default, so a bare environment works out of the box.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Simulated round-trip latency of the legacy vendor, in milliseconds.
    pub legacy_latency_ms: u64,
    /// Simulated round-trip latency of the modern e-commerce vendor, in
    /// milliseconds.
    pub modern_latency_ms: u64,
    /// Simulated round-trip latency of the RESTful vendor, in milliseconds.
    pub restful_latency_ms: u64,
}
