//! Matching engine - candidate generation, sanity checking, ranking
//!
//! For each listing: resolve the plausible manufacturers, test every one of
//! their products, rank the surviving candidates, and associate the listing
//! with the single winner. Listings that resolve to no manufacturer or no
//! model land in diagnostic buckets instead.

mod candidate;
mod engine;
mod matcher;
mod ranker;
mod resolver;

pub use candidate::MatchCandidate;
pub use engine::{match_listings, MatchOutcome};
pub use matcher::match_product;
pub use ranker::best_candidate;
pub use resolver::resolve_manufacturers;
