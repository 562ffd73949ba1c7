//! Product and listing record types

use serde::Deserialize;

use crate::error::MatchError;
use crate::normalize;

/// Stable identifier for a listing: its position in the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(pub usize);

#[derive(Debug, Deserialize)]
struct RawProduct {
    product_name: String,
    manufacturer: String,
    model: String,
    #[serde(default)]
    family: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    title: String,
    manufacturer: String,
    price: String,
    currency: String,
}

/// A canonical product from the catalog feed.
#[derive(Debug, Clone)]
pub struct Product {
    /// Display name, kept verbatim for result output
    pub name: String,
    /// Manufacturer name, lowercased
    pub manufacturer: String,
    /// Model identifier, lowercased
    pub model: String,
    /// Product line shared across several models, lowercased
    pub family: Option<String>,
    /// Original serialized line
    pub source: String,
}

impl Product {
    /// Parse one NDJSON line into a normalized product record.
    pub fn parse(line: &str) -> Result<Self, MatchError> {
        let raw: RawProduct = serde_json::from_str(line)
            .map_err(|source| MatchError::Record { kind: "product", source })?;
        Ok(Self {
            name: raw.product_name,
            manufacturer: raw.manufacturer.to_lowercase(),
            model: raw.model.to_lowercase(),
            // An empty family carries no signal; treat it as absent.
            family: raw
                .family
                .map(|f| f.to_lowercase())
                .filter(|f| !f.is_empty()),
            source: line.trim().to_string(),
        })
    }
}

/// A merchant listing to be resolved against the catalog.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Listing title, lowercased
    pub title: String,
    /// Free-text manufacturer field, lowercased
    pub manufacturer: String,
    /// Price as it appeared in the feed
    pub price: String,
    /// Currency code as it appeared in the feed
    pub currency: String,
    /// Derived search form of the title, immutable after construction
    pub searchable_title: String,
    /// Original serialized line
    pub source: String,
}

impl Listing {
    /// Parse one NDJSON line into a normalized listing record.
    pub fn parse(line: &str) -> Result<Self, MatchError> {
        let raw: RawListing = serde_json::from_str(line)
            .map_err(|source| MatchError::Record { kind: "listing", source })?;
        let title = raw.title.to_lowercase();
        let searchable_title = normalize::searchable_title(&title);
        Ok(Self {
            title,
            manufacturer: raw.manufacturer.to_lowercase(),
            price: raw.price,
            currency: raw.currency,
            searchable_title,
            source: line.trim().to_string(),
        })
    }
}
