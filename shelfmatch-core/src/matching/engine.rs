//! Batch matching engine
//!
//! Drives the whole per-listing flow: resolve candidate manufacturers, test
//! their products, rank, associate. Single-threaded and synchronous; each
//! listing is independent of the others.

use tracing::{debug, info};

use super::matcher::match_product;
use super::ranker::best_candidate;
use super::resolver::resolve_manufacturers;
use crate::catalog::{PreparedCatalog, ProductRef};
use crate::records::{Listing, ListingId};

/// Diagnostic output of a matching run. Listings in the buckets matched no
/// manufacturer / no model; neither is an error.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Listings associated with a product
    pub matched: usize,
    /// Listings whose manufacturer could not be resolved
    pub unknown_manufacturer: Vec<ListingId>,
    /// Listings with a known manufacturer but no matching model
    pub unknown_model: Vec<ListingId>,
}

/// Match every listing against the prepared catalog, associating each with
/// at most one product (appended to that product's listing list in stream
/// order).
pub fn match_listings(catalog: &mut PreparedCatalog, listings: &[Listing]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    info!(listings = listings.len(), "starting listing resolution");

    for (index, listing) in listings.iter().enumerate() {
        let listing_id = ListingId(index);

        let manufacturers = resolve_manufacturers(catalog, listing);
        if manufacturers.is_empty() {
            debug!(title = %listing.title, "no manufacturer resolved");
            outcome.unknown_manufacturer.push(listing_id);
            continue;
        }

        let mut candidates = Vec::new();
        for id in manufacturers {
            let manufacturer = catalog.manufacturer(id);
            for (slot, product) in manufacturer.products.iter().enumerate() {
                let at = ProductRef {
                    manufacturer: id,
                    slot,
                };
                if let Some(candidate) = match_product(product, at, listing, listing_id) {
                    candidates.push(candidate);
                }
            }
        }

        match best_candidate(candidates) {
            Some(best) => {
                catalog.product_mut(best.product).listings.push(listing_id);
                outcome.matched += 1;
            }
            None => {
                debug!(title = %listing.title, "manufacturer known, model not matched");
                outcome.unknown_model.push(listing_id);
            }
        }
    }

    info!(
        matched = outcome.matched,
        unknown_manufacturer = outcome.unknown_manufacturer.len(),
        unknown_model = outcome.unknown_model.len(),
        "listing resolution finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::records::{Listing, Product};

    fn run(products: &[&str], listings: &[&str]) -> (PreparedCatalog, Vec<Listing>, MatchOutcome) {
        let products: Vec<Product> = products.iter().map(|p| Product::parse(p).unwrap()).collect();
        let listings: Vec<Listing> = listings.iter().map(|l| Listing::parse(l).unwrap()).collect();
        let mut catalog = Catalog::from_products(products).prepare().unwrap();
        let outcome = match_listings(&mut catalog, &listings);
        (catalog, listings, outcome)
    }

    #[test]
    fn test_end_to_end_association() {
        let (catalog, _, outcome) = run(
            &[r#"{"product_name":"Canon PowerShot SD600","manufacturer":"Canon","model":"SD600"}"#],
            &[r#"{"title":"canon powershot sd 600 digital camera","manufacturer":"canon canada","price":"199.99","currency":"USD"}"#],
        );
        assert_eq!(outcome.matched, 1);
        assert!(outcome.unknown_manufacturer.is_empty());
        assert!(outcome.unknown_model.is_empty());

        let products = catalog.products_in_input_order();
        assert_eq!(products[0].product.name, "Canon PowerShot SD600");
        assert_eq!(products[0].listings, vec![ListingId(0)]);
    }

    #[test]
    fn test_unknown_manufacturer_bucket() {
        let (catalog, _, outcome) = run(
            &[r#"{"product_name":"Canon PowerShot SD600","manufacturer":"Canon","model":"SD600"}"#],
            &[r#"{"title":"frobnicator 9000 deluxe","manufacturer":"zzz gadgets","price":"9.99","currency":"USD"}"#],
        );
        assert_eq!(outcome.matched, 0);
        assert_eq!(outcome.unknown_manufacturer, vec![ListingId(0)]);
        assert!(catalog.products_in_input_order()[0].listings.is_empty());
    }

    #[test]
    fn test_unknown_model_bucket() {
        let (_, _, outcome) = run(
            &[r#"{"product_name":"Canon PowerShot SD600","manufacturer":"Canon","model":"SD600"}"#],
            &[r#"{"title":"canon lens cap","manufacturer":"canon","price":"9.99","currency":"USD"}"#],
        );
        assert_eq!(outcome.unknown_model, vec![ListingId(0)]);
    }

    #[test]
    fn test_each_listing_associates_with_at_most_one_product() {
        // Both models appear in the title; the earlier match wins and the
        // listing is appended exactly once.
        let (catalog, _, outcome) = run(
            &[
                r#"{"product_name":"Canon PowerShot SD600","manufacturer":"Canon","model":"SD600"}"#,
                r#"{"product_name":"Canon PowerShot SD700","manufacturer":"Canon","model":"SD700"}"#,
            ],
            &[r#"{"title":"canon sd600 not sd700","manufacturer":"canon","price":"1.00","currency":"USD"}"#],
        );
        assert_eq!(outcome.matched, 1);
        let products = catalog.products_in_input_order();
        assert_eq!(products[0].listings, vec![ListingId(0)]);
        assert!(products[1].listings.is_empty());
    }

    #[test]
    fn test_listings_accumulate_in_stream_order() {
        let (catalog, _, outcome) = run(
            &[r#"{"product_name":"Canon PowerShot SD600","manufacturer":"Canon","model":"SD600"}"#],
            &[
                r#"{"title":"canon sd600 silver","manufacturer":"canon","price":"1.00","currency":"USD"}"#,
                r#"{"title":"canon sd600 black","manufacturer":"canon","price":"2.00","currency":"USD"}"#,
            ],
        );
        assert_eq!(outcome.matched, 2);
        let products = catalog.products_in_input_order();
        assert_eq!(products[0].listings, vec![ListingId(0), ListingId(1)]);
    }
}
