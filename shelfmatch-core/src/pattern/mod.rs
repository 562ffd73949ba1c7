//! Model pattern synthesis
//!
//! A product's model identifier is compiled into a permissive pattern family:
//! a holistic pattern over the whole model string, and an ordered sequence of
//! token-level sub-patterns used as a fallback. Synthesis is a fixed sequence
//! of named, pure rewrites over the pattern source (see `rewrite`), compiled
//! only at the end.

mod classify;
mod holistic;
mod rewrite;
mod token;

pub use classify::{has_no_digits, is_short_number, is_word_like};
pub use holistic::{compile_model_pattern, ModelPattern};
pub use rewrite::{anchor, escape_literal, mark_ignorable, prepend_family, relax_boundaries, relax_punctuation};
pub use token::{compile_token_patterns, TokenMatcher, TokenMatchers};

use rustc_hash::FxHashSet;

use crate::error::MatchError;
use crate::records::Product;

/// Compiled matchers for one product, built once per catalog preparation.
#[derive(Debug)]
pub struct ModelMatchers {
    /// Pattern over the whole model string (family prefix optional).
    pub holistic: ModelPattern,
    /// Per-token fallback patterns; empty when the model is a single token.
    pub tokens: TokenMatchers,
}

impl ModelMatchers {
    /// Compile both pattern families for a product, treating the given
    /// segments as optional.
    pub fn compile(product: &Product, ignorable: &FxHashSet<String>) -> Result<Self, MatchError> {
        Ok(Self {
            holistic: compile_model_pattern(&product.model, ignorable, product.family.as_deref())?,
            tokens: compile_token_patterns(&product.model, product.family.as_deref(), ignorable)?,
        })
    }
}
