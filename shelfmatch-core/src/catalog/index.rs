//! Unprepared catalog - manufacturer grouping over raw product records

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

use super::ignorable::ignorable_segments;
use super::prepared::{PreparedCatalog, PreparedManufacturer, PreparedProduct};
use crate::error::MatchError;
use crate::pattern::ModelMatchers;
use crate::records::Product;

/// Stable identifier for a manufacturer: its insertion position. Resolver
/// fallbacks iterate manufacturers in this order, which makes substring
/// tie-breaks deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManufacturerId(pub usize);

/// One manufacturer and its products, in insertion order.
#[derive(Debug, Default)]
pub struct Manufacturer {
    pub name: String,
    /// (input ordinal, record) pairs in insertion order
    pub products: Vec<(usize, Product)>,
    /// Family names seen on this manufacturer's products; hyphenated names
    /// also contribute their de-hyphenated form.
    pub known_families: FxHashSet<String>,
}

impl Manufacturer {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn add_product(&mut self, ordinal: usize, product: Product) {
        if let Some(family) = &product.family {
            self.known_families.insert(family.clone());
            if family.contains('-') {
                self.known_families.insert(family.replace('-', ""));
            }
        }
        self.products.push((ordinal, product));
    }
}

/// The catalog before matcher preparation. Holds raw records only; call
/// [`Catalog::prepare`] to compile patterns and obtain something the
/// matching engine accepts.
#[derive(Debug, Default)]
pub struct Catalog {
    manufacturers: Vec<Manufacturer>,
    by_name: FxHashMap<String, ManufacturerId>,
}

impl Catalog {
    /// Group products by manufacturer, preserving input order throughout.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Self::default();
        for (ordinal, product) in products.into_iter().enumerate() {
            catalog.add_product(ordinal, product);
        }
        catalog
    }

    fn add_product(&mut self, ordinal: usize, product: Product) {
        let id = match self.by_name.get(&product.manufacturer) {
            Some(id) => *id,
            None => {
                let id = ManufacturerId(self.manufacturers.len());
                self.by_name.insert(product.manufacturer.clone(), id);
                self.manufacturers
                    .push(Manufacturer::new(product.manufacturer.clone()));
                id
            }
        };
        self.manufacturers[id.0].add_product(ordinal, product);
    }

    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    /// Compute each manufacturer's ignorable segments over its complete
    /// product set, then compile every product's matchers. Two passes by
    /// construction: no pattern is synthesized before the whole catalog has
    /// been grouped.
    pub fn prepare(self) -> Result<PreparedCatalog, MatchError> {
        info!(
            manufacturers = self.manufacturers.len(),
            "preparing catalog matchers"
        );
        let mut manufacturers = Vec::with_capacity(self.manufacturers.len());
        for m in self.manufacturers {
            let ignorable =
                ignorable_segments(&m.name, m.products.iter().map(|(_, p)| p.model.as_str()));

            let mut products = Vec::with_capacity(m.products.len());
            for (ordinal, product) in m.products {
                let matchers = ModelMatchers::compile(&product, &ignorable)?;
                products.push(PreparedProduct::new(product, ordinal, matchers));
            }
            manufacturers.push(PreparedManufacturer {
                name: m.name,
                known_families: m.known_families,
                products,
            });
        }
        Ok(PreparedCatalog::new(manufacturers, self.by_name))
    }
}
