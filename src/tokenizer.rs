// tokenizer.rs
//
// Line classification and the low-level lexical pieces of the notation:
// whitespace splitting and integer literals.

use crate::ast::LineKind;

/// Classify a raw input line.
///
/// Comment: first non-space character is `#`.
/// Directive: first token starts with `$`.
/// Blank: no tokens at all.
/// Anything else is a definition.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }
    match trimmed.split_whitespace().next() {
        None => LineKind::Blank,
        Some(first) if first.starts_with('$') => LineKind::Directive,
        Some(_) => LineKind::Definition,
    }
}

/// Split a line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a non-negative integer literal.
///
/// Accepts decimal, `0x` hex, `0b` binary and `0o` octal (prefixes in
/// either case), with `_` allowed between digits. A decimal literal with a
/// leading zero such as `010` is rejected as ambiguous.
pub fn parse_number(s: &str) -> Result<u64, String> {
    let (digits, base) = match s.get(..2) {
        Some("0x") | Some("0X") => (&s[2..], 16),
        Some("0b") | Some("0B") => (&s[2..], 2),
        Some("0o") | Some("0O") => (&s[2..], 8),
        _ => (s, 10),
    };

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(format!("invalid number '{}'", s));
    }
    if base == 10 && cleaned.len() > 1 && cleaned.starts_with('0') {
        return Err(format!("leading zero in decimal number '{}'", s));
    }
    // from_str_radix accepts a sign; the notation does not
    if !cleaned.chars().all(|c| c.is_digit(base)) {
        return Err(format!("invalid number '{}'", s));
    }
    u64::from_str_radix(&cleaned, base).map_err(|e| format!("invalid number '{}': {}", s, e))
}
