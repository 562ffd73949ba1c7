//! shelfmatch-core: listing-to-product entity resolution engine
//!
//! This crate matches free-text merchant listings against a catalog of
//! canonical products without machine learning:
//! - Records: product/listing input records with construction-time
//!   normalization
//! - Normalize: searchable-title derivation (parenthetical blanking, break
//!   words, 50-char cap)
//! - Pattern: model pattern synthesis - holistic patterns plus token-level
//!   fallbacks, built from named pure rewrite steps
//! - Catalog: manufacturer grouping, ignorable-segment analysis, and the
//!   prepare transition that compiles every product's matchers
//! - Matching: manufacturer resolution, candidate generation, sanity
//!   checking, ranking, and the batch engine

pub mod catalog;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod pattern;
pub mod records;

// Re-exports for convenience
pub use catalog::{
    ignorable_segments, Catalog, Manufacturer, ManufacturerId, PreparedCatalog,
    PreparedManufacturer, PreparedProduct, ProductRef,
};
pub use error::MatchError;
pub use matching::{
    best_candidate, match_listings, match_product, resolve_manufacturers, MatchCandidate,
    MatchOutcome,
};
pub use normalize::searchable_title;
pub use pattern::{
    compile_model_pattern, compile_token_patterns, ModelMatchers, ModelPattern, TokenMatcher,
};
pub use records::{Listing, ListingId, Product};
