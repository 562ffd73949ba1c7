//! Per-product matching: holistic pattern first, token fallback second

use super::candidate::MatchCandidate;
use crate::catalog::{PreparedProduct, ProductRef};
use crate::records::{Listing, ListingId};

/// Test one prepared product against one listing. Returns a sanity-checked
/// candidate, or `None` when neither strategy produces one.
pub fn match_product(
    product: &PreparedProduct,
    at: ProductRef,
    listing: &Listing,
    listing_id: ListingId,
) -> Option<MatchCandidate> {
    let matchers = product.matchers();
    let title = &listing.searchable_title;

    if let Some((begin, length)) = matchers.holistic.find(title) {
        let candidate = MatchCandidate {
            product: at,
            listing: listing_id,
            begin,
            length,
        };
        // On sanity failure fall through to the token matchers.
        if let Some(passed) = candidate.sanity_check(&product.product, listing) {
            return Some(passed);
        }
    }

    if matchers.tokens.is_empty() {
        return None;
    }

    // Tokens are searched independently, not anchored to a shared position:
    // the candidate spans from the earliest hit and accumulates every hit's
    // length. A missing required token aborts the attempt.
    let mut amount_matched = 0usize;
    let mut begin = title.len();
    for matcher in matchers.tokens.iter() {
        match matcher.pattern.find(title) {
            Some((start, length)) => {
                if length > 0 {
                    amount_matched += length;
                    begin = begin.min(start);
                }
            }
            None if matcher.required => return None,
            None => {}
        }
    }

    MatchCandidate {
        product: at,
        listing: listing_id,
        begin,
        length: amount_matched,
    }
    .sanity_check(&product.product, listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ManufacturerId};
    use crate::records::Product;

    fn prepared(model: &str, family: Option<&str>) -> crate::catalog::PreparedCatalog {
        let family = family
            .map(|f| format!(r#","family":"{f}""#))
            .unwrap_or_default();
        let product = Product::parse(&format!(
            r#"{{"product_name":"p","manufacturer":"m","model":"{model}"{family}}}"#
        ))
        .unwrap();
        Catalog::from_products(vec![product]).prepare().unwrap()
    }

    fn listing(title: &str) -> Listing {
        Listing::parse(&format!(
            r#"{{"title":"{title}","manufacturer":"m","price":"1.00","currency":"USD"}}"#
        ))
        .unwrap()
    }

    fn try_match(model: &str, family: Option<&str>, title: &str) -> Option<MatchCandidate> {
        let catalog = prepared(model, family);
        let at = ProductRef {
            manufacturer: ManufacturerId(0),
            slot: 0,
        };
        match_product(catalog.product(at), at, &listing(title), ListingId(0))
    }

    #[test]
    fn test_holistic_match_wins_outright() {
        let m = try_match("sd600", None, "canon powershot sd 600 digital camera").unwrap();
        assert_eq!((m.begin, m.length), (16, 6));
    }

    #[test]
    fn test_token_fallback_when_holistic_fails() {
        // Holistic "powershot sd600" needs the words in order; the tokens
        // match independently.
        let m = try_match("powershot sd600", None, "canon sd600 powershot series").unwrap();
        assert_eq!(m.begin, 6);
        assert_eq!(m.length, "sd600".len() + "powershot".len());
    }

    #[test]
    fn test_missing_required_token_aborts() {
        assert!(try_match("powershot sd600", None, "canon powershot accessory kit").is_none());
    }

    #[test]
    fn test_missing_optional_token_is_fine() {
        let m = try_match("powershot sd600", None, "canon sd600 kit").unwrap();
        assert_eq!((m.begin, m.length), (6, 5));
    }

    #[test]
    fn test_failed_sanity_check_falls_through_to_tokens() {
        // The holistic pattern lands on the bare "100" (rejected: the model
        // has a family), but the family token rescues the match.
        let m = try_match("100", Some("ixus"), "buy 100 ixus edition").unwrap();
        assert_eq!((m.begin, m.length), (4, 7));
    }

    #[test]
    fn test_single_character_match_is_rejected_outright() {
        assert!(try_match("8", None, "item 8 in catalog").is_none());
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(try_match("sd600", None, "nikon coolpix p90").is_none());
    }
}
