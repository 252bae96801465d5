//! Vendor catalog clients and their normalization into
//! [`shopfront_core::Product`].
//!
//! Each vendor module pairs a latency-simulating client with a pure
//! record-mapping function and a thin adapter that owns the client.
//! [`ProductFacade`] fans out to all three adapters concurrently and merges
//! the results, isolating per-vendor failures.
//!
//! ```text
//! vendor payload --> client (simulated latency, deserialize)
//!                --> normalize_* (shape translation)
//!                --> ProductFacade (fan-out, error isolation, fan-in)
//! ```

pub mod error;
pub mod facade;
pub mod legacy;
pub mod modern;
pub mod restful;

pub use error::VendorError;
pub use facade::ProductFacade;
pub use legacy::{LegacyAdapter, LegacyClient};
pub use modern::{ModernAdapter, ModernClient};
pub use restful::{RestfulAdapter, RestfulClient};
