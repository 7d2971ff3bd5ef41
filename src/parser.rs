// parser.rs
//
// Splits a definition line into its mnemonic and parts, and parses the
// `bitspec=value` syntax of fixed parts.
//
// A part whose first character is a digit is a fixed part; anything else is
// a field part. The rule is exact: there is no third kind.

use crate::ast::{BitSpec, Definition, FixedPart, Part};
use crate::error::ErrorKind;
use crate::normalize::split_suffix;
use crate::tokenizer::{parse_number, tokenize};

/// Highest bit position an encoding may constrain.
pub const MAX_BIT: u32 = 31;

/// Parse a definition line into its name and parts.
///
/// The caller is expected to have classified the line as a definition; a
/// line without tokens yields an empty name.
pub fn parse(line: &str) -> Result<Definition, ErrorKind> {
    let tokens = tokenize(line);
    let (name, rest) = match tokens.split_first() {
        Some((name, rest)) => (name.to_string(), rest),
        None => (String::new(), &[][..]),
    };

    let parts = rest.iter().map(|token| parse_part(token)).collect::<Result<Vec<_>, _>>()?;
    Ok(Definition { name, parts })
}

/// Classify and parse one part.
pub fn parse_part(token: &str) -> Result<Part, ErrorKind> {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        parse_fixed_part(token).map(Part::Fixed)
    } else {
        Ok(Part::Field(split_suffix(token)))
    }
}

/// Parse `hi..lo=value` or `b=value`.
pub fn parse_fixed_part(token: &str) -> Result<FixedPart, ErrorKind> {
    let (spec, value) = token
        .split_once('=')
        .ok_or_else(|| ErrorKind::malformed(token, "expected '<bits>=<value>'"))?;

    let bits = parse_bitspec(spec).map_err(|reason| ErrorKind::malformed(token, reason))?;
    let value = parse_number(value).map_err(|reason| ErrorKind::malformed(token, reason))?;

    Ok(FixedPart { bits, value })
}

fn parse_bitspec(spec: &str) -> Result<BitSpec, String> {
    match spec.split_once("..") {
        Some((hi, lo)) => {
            let hi = parse_bit_index(hi)?;
            let lo = parse_bit_index(lo)?;
            if hi < lo {
                return Err(format!("range {}..{} is reversed", hi, lo));
            }
            Ok(BitSpec::Range { hi, lo })
        }
        None => Ok(BitSpec::Bit(parse_bit_index(spec)?)),
    }
}

fn parse_bit_index(s: &str) -> Result<u32, String> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid bit index '{}'", s));
    }
    let bit: u32 = s.parse().map_err(|_| format!("invalid bit index '{}'", s))?;
    if bit > MAX_BIT {
        return Err(format!("bit index {} is out of range (max {})", bit, MAX_BIT));
    }
    Ok(bit)
}
