//! Holistic model pattern compilation

use regex::Regex;
use rustc_hash::FxHashSet;

use super::rewrite::{anchor, escape_literal, mark_ignorable, prepend_family, relax_boundaries, relax_punctuation};
use crate::error::MatchError;

/// A compiled, anchored model pattern.
///
/// The bounded-suffix rule is expressed as a consumed `\D{0,3}\b` tail after
/// a named capture of the body; reported spans come from the capture, so the
/// tail never counts toward a match.
#[derive(Debug)]
pub struct ModelPattern {
    re: Regex,
}

impl ModelPattern {
    fn from_source(source: String) -> Result<Self, MatchError> {
        let re = Regex::new(&source).map_err(|e| MatchError::Pattern {
            pattern: source,
            source: e,
        })?;
        Ok(Self { re })
    }

    /// Search `haystack` and return the byte span `(begin, length)` of the
    /// pattern body, or `None` when there is no match.
    pub fn find(&self, haystack: &str) -> Option<(usize, usize)> {
        let caps = self.re.captures(haystack)?;
        let m = caps.name("m")?;
        Some((m.start(), m.end() - m.start()))
    }
}

/// Compile a model string into its holistic pattern: segments in `ignorable`
/// become optional, the family prefix (when given and non-empty) becomes an
/// optional leading unit, and punctuation/boundary tolerance is applied
/// everywhere.
pub fn compile_model_pattern(
    model: &str,
    ignorable: &FxHashSet<String>,
    optional_prefix: Option<&str>,
) -> Result<ModelPattern, MatchError> {
    let mut source = escape_literal(model);
    source = mark_ignorable(&source, ignorable);
    if let Some(prefix) = optional_prefix.filter(|p| !p.is_empty()) {
        source = prepend_family(&source, prefix);
    }
    source = relax_punctuation(&source);
    source = relax_boundaries(&source);
    ModelPattern::from_source(anchor(&source))
}
