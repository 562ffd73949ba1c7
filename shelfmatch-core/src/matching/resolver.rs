//! Manufacturer candidate resolution
//!
//! Three tiers, stopping at the first that yields anything. Tiers 2 and 3
//! scan manufacturers in catalog insertion order, so substring tie-breaks
//! are deterministic and reproducible across runs.

use crate::catalog::{ManufacturerId, PreparedCatalog};
use crate::records::Listing;

/// Return the manufacturers plausibly responsible for a listing, in
/// catalog insertion order. Empty means "unknown manufacturer".
pub fn resolve_manufacturers(catalog: &PreparedCatalog, listing: &Listing) -> Vec<ManufacturerId> {
    // Tier 1: exact match on the listing's manufacturer field.
    if let Some(id) = catalog.lookup(&listing.manufacturer) {
        return vec![id];
    }

    // Tier 2: containment either way, e.g. "canon" inside "canon canada
    // inc.". A known name inside the listing string is decisive; the
    // reverse direction only accumulates.
    let mut candidates = Vec::new();
    for (idx, m) in catalog.manufacturers().iter().enumerate() {
        let id = ManufacturerId(idx);
        if listing.manufacturer.contains(&m.name) {
            return vec![id];
        } else if !listing.manufacturer.is_empty() && m.name.contains(&listing.manufacturer) {
            candidates.push(id);
        }
    }
    if !candidates.is_empty() {
        return candidates;
    }

    // Tier 3: look for a manufacturer or family name among the first three
    // words of the searchable title.
    let title_start = listing
        .searchable_title
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ");
    for (idx, m) in catalog.manufacturers().iter().enumerate() {
        let id = ManufacturerId(idx);
        if title_start.contains(&m.name) {
            return vec![id];
        }
        for family in &m.known_families {
            if title_start.contains(family.as_str()) {
                candidates.push(id);
                break;
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::records::Product;

    fn product(manufacturer: &str, model: &str, family: Option<&str>) -> Product {
        let family = family
            .map(|f| format!(r#","family":"{f}""#))
            .unwrap_or_default();
        Product::parse(&format!(
            r#"{{"product_name":"p","manufacturer":"{manufacturer}","model":"{model}"{family}}}"#
        ))
        .unwrap()
    }

    fn listing(manufacturer: &str, title: &str) -> Listing {
        Listing::parse(&format!(
            r#"{{"title":"{title}","manufacturer":"{manufacturer}","price":"1.00","currency":"USD"}}"#
        ))
        .unwrap()
    }

    fn catalog() -> PreparedCatalog {
        Catalog::from_products(vec![
            product("Canon", "sd600", None),
            product("Panasonic", "dmc-gf3", Some("lumix")),
            product("Sony", "dsc-w310", None),
        ])
        .prepare()
        .unwrap()
    }

    #[test]
    fn test_tier1_exact_name() {
        let ids = resolve_manufacturers(&catalog(), &listing("canon", "some camera"));
        assert_eq!(ids, vec![ManufacturerId(0)]);
    }

    #[test]
    fn test_tier2_known_name_inside_listing_string() {
        let ids = resolve_manufacturers(&catalog(), &listing("canon canada inc.", "some camera"));
        assert_eq!(ids, vec![ManufacturerId(0)]);
    }

    #[test]
    fn test_tier2_listing_string_inside_known_name() {
        let ids = resolve_manufacturers(&catalog(), &listing("pana", "some camera"));
        assert_eq!(ids, vec![ManufacturerId(1)]);
    }

    #[test]
    fn test_tier2_accumulates_multiple_manufacturers_in_catalog_order() {
        // "alpha" is contained in two catalog names; both come back, in the
        // order their first products entered the catalog.
        let catalog = Catalog::from_products(vec![
            product("Alphatron", "x100", None),
            product("Nikon", "d90", None),
            product("Alpha Imaging", "z200", None),
        ])
        .prepare()
        .unwrap();
        let ids = resolve_manufacturers(&catalog, &listing("alpha", "some camera"));
        assert_eq!(ids, vec![ManufacturerId(0), ManufacturerId(2)]);
    }

    #[test]
    fn test_tier3_family_hits_accumulate_in_catalog_order() {
        let catalog = Catalog::from_products(vec![
            product("Canon", "sd600", Some("elph")),
            product("Acme", "e-100", Some("elph")),
        ])
        .prepare()
        .unwrap();
        let ids =
            resolve_manufacturers(&catalog, &listing("best deals ltd", "elph style camera"));
        assert_eq!(ids, vec![ManufacturerId(0), ManufacturerId(1)]);
    }

    #[test]
    fn test_tier3_name_in_title_start() {
        let ids = resolve_manufacturers(&catalog(), &listing("best deals ltd", "sony dsc-w310 bundle"));
        assert_eq!(ids, vec![ManufacturerId(2)]);
    }

    #[test]
    fn test_tier3_family_in_title_start() {
        let ids = resolve_manufacturers(&catalog(), &listing("best deals ltd", "lumix dmc-gf3 kit"));
        assert_eq!(ids, vec![ManufacturerId(1)]);
    }

    #[test]
    fn test_tier3_only_first_three_words() {
        let ids = resolve_manufacturers(
            &catalog(),
            &listing("best deals ltd", "great camera deal sony dsc-w310"),
        );
        assert!(ids.is_empty());
    }

    #[test]
    fn test_unknown_manufacturer_resolves_to_nothing() {
        let ids = resolve_manufacturers(&catalog(), &listing("zzz gadgets", "frobnicator 9000"));
        assert!(ids.is_empty());
    }

    #[test]
    fn test_empty_listing_manufacturer_never_accumulates() {
        // An empty string is contained in every name; tier 2 must not
        // resolve to the whole catalog.
        let ids = resolve_manufacturers(&catalog(), &listing("", "unbranded thing"));
        assert!(ids.is_empty());
    }
}
