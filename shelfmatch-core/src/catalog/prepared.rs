//! Prepared catalog - products with compiled matchers
//!
//! Produced only by `Catalog::prepare`; the matching engine takes these
//! types exclusively, so an unprepared product can never reach a matcher.

use rustc_hash::{FxHashMap, FxHashSet};

use super::index::ManufacturerId;
use crate::pattern::ModelMatchers;
use crate::records::{ListingId, Product};

/// Locates one product inside a prepared catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductRef {
    pub manufacturer: ManufacturerId,
    /// Position within the manufacturer's product list
    pub slot: usize,
}

/// A product with compiled matchers and its accumulated listing matches.
#[derive(Debug)]
pub struct PreparedProduct {
    pub product: Product,
    /// Position in the original input stream, for output ordering
    pub ordinal: usize,
    /// Listings resolved to this product, in processing order
    pub listings: Vec<ListingId>,
    pub(crate) matchers: ModelMatchers,
}

impl PreparedProduct {
    pub(crate) fn new(product: Product, ordinal: usize, matchers: ModelMatchers) -> Self {
        Self {
            product,
            ordinal,
            listings: Vec::new(),
            matchers,
        }
    }

    pub fn matchers(&self) -> &ModelMatchers {
        &self.matchers
    }
}

/// A manufacturer whose products are all prepared.
#[derive(Debug)]
pub struct PreparedManufacturer {
    pub name: String,
    pub known_families: FxHashSet<String>,
    pub products: Vec<PreparedProduct>,
}

/// The catalog after matcher preparation; the only shape the matching
/// engine accepts.
#[derive(Debug)]
pub struct PreparedCatalog {
    manufacturers: Vec<PreparedManufacturer>,
    by_name: FxHashMap<String, ManufacturerId>,
}

impl PreparedCatalog {
    pub(crate) fn new(
        manufacturers: Vec<PreparedManufacturer>,
        by_name: FxHashMap<String, ManufacturerId>,
    ) -> Self {
        Self {
            manufacturers,
            by_name,
        }
    }

    /// Manufacturers in catalog insertion order.
    pub fn manufacturers(&self) -> &[PreparedManufacturer] {
        &self.manufacturers
    }

    pub fn manufacturer(&self, id: ManufacturerId) -> &PreparedManufacturer {
        &self.manufacturers[id.0]
    }

    /// Exact-name lookup.
    pub fn lookup(&self, name: &str) -> Option<ManufacturerId> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn product_mut(&mut self, at: ProductRef) -> &mut PreparedProduct {
        &mut self.manufacturers[at.manufacturer.0].products[at.slot]
    }

    pub fn product(&self, at: ProductRef) -> &PreparedProduct {
        &self.manufacturers[at.manufacturer.0].products[at.slot]
    }

    /// All products, restored to input-stream order (results are written in
    /// this order regardless of manufacturer grouping).
    pub fn products_in_input_order(&self) -> Vec<&PreparedProduct> {
        let mut products: Vec<&PreparedProduct> = self
            .manufacturers
            .iter()
            .flat_map(|m| m.products.iter())
            .collect();
        products.sort_by_key(|p| p.ordinal);
        products
    }
}
