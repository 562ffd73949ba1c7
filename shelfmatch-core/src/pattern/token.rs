//! Token-level fallback patterns
//!
//! When the holistic pattern fails, the model is matched token by token.
//! Tokens that are ignorable, part of the family name, or plain words are
//! optional; everything else is required.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::classify::{has_no_digits, is_short_number, is_word_like};
use super::holistic::{compile_model_pattern, ModelPattern};
use crate::error::MatchError;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[- _]+").unwrap());

/// A compiled token pattern plus whether a listing must match it.
#[derive(Debug)]
pub struct TokenMatcher {
    pub pattern: ModelPattern,
    pub required: bool,
}

/// Ordered token matcher sequence for one product.
pub type TokenMatchers = SmallVec<[TokenMatcher; 4]>;

/// Compile the per-token patterns for a model. Returns an empty sequence
/// when the model reduces to a single token (the holistic pattern already
/// covers that case).
pub fn compile_token_patterns(
    model: &str,
    family: Option<&str>,
    ignorable: &FxHashSet<String>,
) -> Result<TokenMatchers, MatchError> {
    compile_tokens(model, family, ignorable, true)
}

fn compile_tokens(
    model: &str,
    family: Option<&str>,
    ignorable: &FxHashSet<String>,
    split_dashes: bool,
) -> Result<TokenMatchers, MatchError> {
    let mut tokens: Vec<&str> = if split_dashes {
        SEPARATORS.split(model).collect()
    } else {
        model.split_whitespace().collect()
    };
    if let Some(family) = family {
        tokens.extend(family.split_whitespace());
    }
    tokens.retain(|t| !t.is_empty());

    let mut matchers = TokenMatchers::new();
    if tokens.len() <= 1 {
        return Ok(matchers);
    }

    // Plain numbers and very short fragments produce false positives: if
    // dash-splitting detached one ("a" and "200" out of "a-200"), retry with
    // the dashes kept so the fragment stays attached to its context.
    if split_dashes
        && tokens
            .iter()
            .any(|t| t.chars().count() < 3 || is_short_number(t))
    {
        return compile_tokens(model, family, ignorable, false);
    }

    // Word-like tokens are optional by default; when the model has no digits
    // at all they are the only anchor and stay required.
    let words_skippable = !has_no_digits(model);

    let none = FxHashSet::default();
    for tok in tokens {
        let required = if ignorable.contains(tok) || family.map_or(false, |f| f.contains(tok)) {
            false
        } else if words_skippable && is_word_like(tok) {
            false
        } else {
            true
        };
        matchers.push(TokenMatcher {
            pattern: compile_model_pattern(tok, &none, None)?,
            required,
        });
    }
    Ok(matchers)
}
