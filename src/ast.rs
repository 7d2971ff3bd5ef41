// ast.rs
//
// This file defines the data structures shared by every stage of the opcode
// table pipeline: source locations, classified lines, the parts of a
// definition line, and the finished encoding records.
//
// The overall process works as follows:
// 1. The I/O layer hands over one raw text line at a time.
// 2. The tokenizer classifies the line (comment, directive, blank, definition).
// 3. The parser splits a definition into its name and a list of `Part`s.
// 4. Field parts are normalized (split hi/lo halves merged) and fixed parts
//    are compiled into mask/value bits.
// 5. The assembler folds everything into one `Encoding` and hands it to the
//    output layer.
// 6. Any error aborts the whole run; no partial record is ever produced.

use std::fmt;

/// A single location in the input, used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: usize,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Location { file: file.into(), line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The four kinds of input line.
///
/// **Grammar Rule:** `line := comment | directive | blank | definition`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Directive,
    Blank,
    Definition,
}

/// An inclusive bit range, as written before the `=` of a fixed part.
///
/// **Grammar Rule:** `bitspec := digits '..' digits | digits`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSpec {
    /// `hi..lo`, with `hi >= lo`
    Range { hi: u32, lo: u32 },
    /// A single bit index `b`
    Bit(u32),
}

impl BitSpec {
    /// Lowest bit covered by the range.
    pub fn lo(&self) -> u32 {
        match *self {
            BitSpec::Range { lo, .. } => lo,
            BitSpec::Bit(b) => b,
        }
    }

    /// Number of bits covered by the range.
    pub fn width(&self) -> u32 {
        match *self {
            BitSpec::Range { hi, lo } => hi - lo + 1,
            BitSpec::Bit(_) => 1,
        }
    }
}

impl fmt::Display for BitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSpec::Range { hi, lo } => write!(f, "{}..{}", hi, lo),
            BitSpec::Bit(b) => write!(f, "{}", b),
        }
    }
}

/// A fixed part: `bitspec=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPart {
    pub bits: BitSpec,
    pub value: u64,
}

/// Which half of a split field a field token names, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    None,
    High,
    Low,
}

/// A field part after suffix inspection.
///
/// `base` is the identifier with any `hi`/`lo` suffix removed, so
/// `bimm12hi` becomes `{ base: "bimm12", half: High }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken {
    pub base: String,
    pub half: Half,
}

/// One whitespace-separated part of a definition line.
///
/// **Grammar Rule:** `part := fixed-part | field-part`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Fixed(FixedPart),
    Field(FieldToken),
}

/// A parsed definition line: the mnemonic and its parts in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub parts: Vec<Part>,
}

impl Definition {
    pub fn fixed_parts(&self) -> impl Iterator<Item = &FixedPart> {
        self.parts.iter().filter_map(|p| match p {
            Part::Fixed(f) => Some(f),
            Part::Field(_) => None,
        })
    }

    pub fn field_tokens(&self) -> impl Iterator<Item = &FieldToken> {
        self.parts.iter().filter_map(|p| match p {
            Part::Field(f) => Some(f),
            Part::Fixed(_) => None,
        })
    }
}

/// Instruction width class, decided by the low two bits of the fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// 16-bit compressed instruction
    Compact,
    /// 32-bit instruction
    Wide,
}

impl Width {
    pub fn bits(&self) -> u32 {
        match self {
            Width::Compact => 16,
            Width::Wide => 32,
        }
    }

    /// Number of hex digits used when printing mask and value.
    pub fn hex_digits(&self) -> usize {
        match self {
            Width::Compact => 4,
            Width::Wide => 8,
        }
    }
}

/// A finished encoding record.
///
/// `value & !mask == 0` always holds; `fields` is in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub name: String,
    pub mask: u32,
    pub value: u32,
    pub fields: Vec<String>,
    pub width: Width,
}

impl Encoding {
    /// Does `insn` match this encoding's fixed bits?
    pub fn matches(&self, insn: u32) -> bool {
        insn & self.mask == self.value
    }
}
