//! Ignorable-segment computation
//!
//! A segment repeated across enough of a manufacturer's model strings (all
//! Panasonic models beginning with "dmc-", say) is likely to be dropped by
//! merchants, so pattern synthesis treats it as optional. This is a batch
//! computation over the manufacturer's complete product set; it must never
//! run incrementally.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Minimum absolute occurrences before a segment can be ignorable. Guards
/// against manufacturers with too few products for the ratio test to mean
/// anything.
const MIN_SEGMENT_COUNT: usize = 10;

/// Compute the ignorable segments for one manufacturer from all of its
/// model strings. A segment qualifies when it is at least 2 characters
/// long, occurs in strictly more than a third of the products, and occurs
/// at least [`MIN_SEGMENT_COUNT`] times.
pub fn ignorable_segments<'a>(
    manufacturer: &str,
    models: impl Iterator<Item = &'a str>,
) -> FxHashSet<String> {
    let mut histogram: FxHashMap<String, usize> = FxHashMap::default();
    let mut product_count = 0usize;

    for model in models {
        product_count += 1;
        let spaced = model.replace('-', " ");
        let mut segments = spaced.split_whitespace();
        let first = match segments.next() {
            Some(s) => s,
            None => continue,
        };
        let last = segments.last().unwrap_or(first);
        for seg in [first, last] {
            *histogram.entry(seg.to_string()).or_insert(0) += 1;
        }
    }

    let mut ignorable = FxHashSet::default();
    for (seg, count) in histogram {
        // Single characters are unlikely to be dropped by a merchant, and a
        // segment common to more than a third of the catalog can be assumed
        // from context.
        if seg.chars().count() >= 2 && count > product_count / 3 && count >= MIN_SEGMENT_COUNT {
            debug!(
                manufacturer,
                segment = %seg,
                count,
                products = product_count,
                "marking model segment as optional"
            );
            ignorable.insert(seg);
        }
    }
    ignorable
}
