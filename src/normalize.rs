// normalize.rs
//
// Field normalization. Instruction sets often split one logical immediate
// across two non-adjacent bit ranges, written as two tokens `<base>hi` and
// `<base>lo`. This module collapses such a pair into a single canonical
// field named `<base>hilo`.
//
// The merge does not depend on token order: every `hi` half produces the
// canonical name and every `lo` half is dropped, wherever it appears.

use crate::ast::{FieldToken, Half};
use std::collections::HashSet;
use tracing::warn;

const HIGH_SUFFIX: &str = "hi";
const LOW_SUFFIX: &str = "lo";

/// Inspect an identifier's suffix and tag it as a high half, low half or
/// plain field.
pub fn split_suffix(ident: &str) -> FieldToken {
    if let Some(base) = ident.strip_suffix(HIGH_SUFFIX) {
        FieldToken { base: base.to_string(), half: Half::High }
    } else if let Some(base) = ident.strip_suffix(LOW_SUFFIX) {
        FieldToken { base: base.to_string(), half: Half::Low }
    } else {
        FieldToken { base: ident.to_string(), half: Half::None }
    }
}

impl FieldToken {
    /// The name this token contributes to a record, or `None` for a low half.
    pub fn canonical(&self) -> Option<String> {
        match self.half {
            Half::None => Some(self.base.clone()),
            Half::High => Some(format!("{}{}{}", self.base, HIGH_SUFFIX, LOW_SUFFIX)),
            Half::Low => None,
        }
    }
}

/// Merge a line's field tokens into canonical field names.
///
/// Output follows input order; duplicates of plain fields are kept.
pub fn merge_fields<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FieldToken>,
{
    let tokens: Vec<&FieldToken> = tokens.into_iter().collect();

    let highs: HashSet<&str> =
        tokens.iter().filter(|t| t.half == Half::High).map(|t| t.base.as_str()).collect();
    for orphan in tokens.iter().filter(|t| t.half == Half::Low && !highs.contains(t.base.as_str())) {
        warn!("field '{}{}' has no matching '{}{}' half, dropping it", orphan.base, LOW_SUFFIX, orphan.base, HIGH_SUFFIX);
    }

    tokens.iter().filter_map(|t| t.canonical()).collect()
}
