//! Owned storefront state: the loaded product catalog with category
//! filtering, and a position-keyed shopping cart.
//!
//! State lives in plain structs passed by reference to whatever front end
//! consumes them; derived views (category list, filtered products, cart
//! total) are computed on demand rather than cached.

pub mod cart;
pub mod catalog;

pub use cart::Cart;
pub use catalog::{Catalog, ALL_CATEGORIES};
