//! Best-match selection
//!
//! Earliest match start wins; at equal starts the longer match wins; full
//! ties keep the first-registered candidate.

use super::candidate::MatchCandidate;

/// Pick the winning candidate, or `None` when there are none.
pub fn best_candidate(candidates: Vec<MatchCandidate>) -> Option<MatchCandidate> {
    candidates.into_iter().min_by(|a, b| {
        a.begin
            .cmp(&b.begin)
            .then_with(|| b.length.cmp(&a.length))
    })
}
