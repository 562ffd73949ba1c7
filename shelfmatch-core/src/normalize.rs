//! Searchable-title derivation
//!
//! Listing titles are mangled once, at construction, into a form suitable
//! for model and manufacturer searches: parenthesized spans blanked out,
//! everything after a break word dropped, and the result capped at 50
//! characters. The function is pure and idempotent.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Model numbers appearing after this point are usually accessories for the
/// model, not the product itself.
const MAX_SEARCHABLE_CHARS: usize = 50;

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Whole words that introduce accessory descriptions ("battery for ...").
static BREAK_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:for|pour|für)\b").unwrap());

/// Derive the searchable form of an (already lowercased) listing title.
pub fn searchable_title(title: &str) -> String {
    // Parenthesized spans become equal-length runs of spaces so character
    // distances survive for the truncation below.
    let mut out = PARENTHESIZED
        .replace_all(title, |caps: &Captures<'_>| {
            " ".repeat(caps[0].chars().count())
        })
        .into_owned();

    if let Some(m) = BREAK_WORDS.find(&out) {
        out.truncate(m.start());
    }

    if let Some((idx, _)) = out.char_indices().nth(MAX_SEARCHABLE_CHARS) {
        out.truncate(idx);
    }

    out
}
