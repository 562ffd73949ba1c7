//! Error types for the matching engine

use thiserror::Error;

/// Errors raised while building the catalog or compiling model patterns.
///
/// Malformed input records abort the whole batch; there is no per-record
/// skip policy. Unmatched listings are diagnostics, not errors.
#[derive(Debug, Error)]
pub enum MatchError {
    /// An input line failed to deserialize or was missing required fields.
    #[error("invalid {kind} record: {source}")]
    Record {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A synthesized pattern failed to compile.
    #[error("failed to compile model pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
