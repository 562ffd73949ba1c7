//! Catalog index - manufacturer grouping and matcher preparation
//!
//! Products are grouped by manufacturer in insertion order. `Catalog` holds
//! raw records only; calling `prepare` computes each manufacturer's
//! ignorable segments over its complete product set and compiles every
//! product's patterns, yielding a `PreparedCatalog`. Only prepared products
//! can be matched against, so there is no half-initialized state.

mod ignorable;
mod index;
mod prepared;

pub use ignorable::ignorable_segments;
pub use index::{Catalog, Manufacturer, ManufacturerId};
pub use prepared::{PreparedCatalog, PreparedManufacturer, PreparedProduct, ProductRef};
