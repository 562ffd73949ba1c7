//! Pattern-source rewriting steps
//!
//! Each step is a pure transformation over the pattern source string. The
//! fixed order is: escape, mark ignorables, prepend family, relax
//! punctuation, relax letter/digit boundaries, anchor. Compilation happens
//! only after the last step.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use rustc_hash::FxHashSet;

/// A literal backslash followed by any non-word character, i.e. one escaped
/// punctuation or whitespace character in the pattern source.
static ESCAPED_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\W").unwrap());

static LETTER_THEN_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\W\d_])(\d)").unwrap());

static DIGIT_THEN_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)([^\W\d_])").unwrap());

/// Backslash-escape every character that is not a Unicode letter, digit or
/// underscore. Escaping is deliberately broader than `regex::escape`: spaces
/// and all punctuation get a backslash, so later steps can recognize every
/// escaped non-word character uniformly.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if !(c.is_alphanumeric() || c == '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Replace whole-word occurrences of each ignorable segment in the escaped
/// source with an optional non-capturing group. Segments are applied in
/// sorted order so the rewrite is deterministic.
pub fn mark_ignorable(source: &str, ignorable: &FxHashSet<String>) -> String {
    let mut segments: Vec<&String> = ignorable.iter().collect();
    segments.sort();

    let mut source = source.to_string();
    for seg in segments {
        let needle = match Regex::new(&format!(r"\b{}\b", escape_literal(seg))) {
            Ok(re) => re,
            Err(_) => continue,
        };
        let group = format!("(?:{})?", escape_literal(seg));
        source = needle.replace_all(&source, NoExpand(&group)).into_owned();
    }
    source
}

/// Prepend an optional family prefix: the escaped prefix plus exactly one
/// non-word separator, as a single optional unit.
pub fn prepend_family(source: &str, prefix: &str) -> String {
    format!(r"(?:{}\W)?{}", escape_literal(prefix), source)
}

/// Every escaped non-word character becomes "zero or more non-word
/// characters", tolerating arbitrary punctuation and whitespace variation.
pub fn relax_punctuation(source: &str) -> String {
    ESCAPED_NON_WORD
        .replace_all(source, NoExpand(r"\W*"))
        .into_owned()
}

/// Allow punctuation or whitespace at every letter/digit boundary, so
/// "300d" also matches "300 d" and "300-d".
pub fn relax_boundaries(source: &str) -> String {
    let source = LETTER_THEN_DIGIT.replace_all(source, r"${1}\W*${2}");
    DIGIT_THEN_LETTER
        .replace_all(&source, r"${1}\W*${2}")
        .into_owned()
}

/// Anchor the body with a leading word boundary and a bounded non-digit
/// tail. The tail permits short letter suffixes (colour codes and the like)
/// but refuses to run into a following word: "300d" must not match into
/// "300 digital". The body is captured so the match span excludes the tail.
pub fn anchor(source: &str) -> String {
    format!(r"\b(?P<m>{})\D{{0,3}}\b", source)
}
