//! Match candidates and the post-match sanity check

use crate::catalog::ProductRef;
use crate::pattern::is_short_number;
use crate::records::{Listing, ListingId, Product};

/// An unresolved match between a product and a listing. Ephemeral: either
/// discarded by the sanity check or consumed immediately by ranking.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate {
    pub product: ProductRef,
    pub listing: ListingId,
    /// Byte offset of the match within the listing's searchable title
    pub begin: usize,
    /// Matched byte length (summed across tokens for token matches)
    pub length: usize,
}

impl MatchCandidate {
    /// Reject matches too insubstantial to trust: anything shorter than 2
    /// characters, and bare 1-3 digit numbers - unless the product's model
    /// is itself such a bare number with no family, in which case a number
    /// is all there is to go on.
    pub fn sanity_check(self, product: &Product, listing: &Listing) -> Option<Self> {
        let span = matched_slice(&listing.searchable_title, self.begin, self.length);
        let bare_number_model = is_short_number(&product.model) && product.family.is_none();
        if is_short_number(span) && !bare_number_model {
            None
        } else if span.chars().count() < 2 {
            None
        } else {
            Some(self)
        }
    }
}

/// Slice the matched span out of the title. Token matches sum lengths from
/// disjoint spans, so the end is clamped to the title and snapped back to a
/// char boundary.
fn matched_slice(title: &str, begin: usize, length: usize) -> &str {
    let mut end = begin.saturating_add(length).min(title.len());
    while end > begin && !title.is_char_boundary(end) {
        end -= 1;
    }
    &title[begin..end]
}
