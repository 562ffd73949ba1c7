//! Input records - products and listings as read from NDJSON feeds
//!
//! Lowercasing and searchable-title derivation happen exactly once, at
//! construction. Downstream code never re-normalizes.

mod types;

pub use types::{Listing, ListingId, Product};
