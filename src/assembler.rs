// assembler.rs
//
// The encoding assembler folds the parts of one definition line into a
// single record, and `Encodings` drives it over a whole input lazily.
//
// Each line is processed on its own; the only shared state is the immutable
// field catalog. The first error ends the stream.

use crate::ast::{Definition, Encoding, LineKind, Location, Width};
use crate::catalog::FieldCatalog;
use crate::encoder::{FixedBits, compile};
use crate::error::{ErrorKind, TableError};
use crate::normalize::merge_fields;
use crate::parser;
use crate::tokenizer::classify;
use tracing::{debug, trace};

/// Low two bits of every opcode; both must be fixed by the encoding.
const OPCODE_LOW_BITS: u32 = 0b11;

/// How the width of a record is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Every record is a 32-bit instruction.
    Fixed32,
    /// Low two value bits `0b11` mean 32-bit, anything else 16-bit.
    AutoDetect,
}

/// Assembler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Reject records whose mask leaves either low opcode bit unconstrained
    pub enforce_low_bits: bool,
    pub width_policy: WidthPolicy,
}

impl AssemblerConfig {
    /// Mixed 16/32-bit tables with the low-bits check.
    pub fn auto() -> Self {
        AssemblerConfig { enforce_low_bits: true, width_policy: WidthPolicy::AutoDetect }
    }

    /// 32-bit-only tables, no low-bits check.
    pub fn wide() -> Self {
        AssemblerConfig { enforce_low_bits: false, width_policy: WidthPolicy::Fixed32 }
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self::auto()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    catalog: &'a FieldCatalog,
    config: AssemblerConfig,
}

impl<'a> Assembler<'a> {
    pub fn new(catalog: &'a FieldCatalog, config: AssemblerConfig) -> Self {
        Assembler { catalog, config }
    }

    pub fn config(&self) -> AssemblerConfig {
        self.config
    }

    /// Build the record for one parsed definition.
    pub fn assemble(&self, def: &Definition) -> Result<Encoding, ErrorKind> {
        let mut bits = FixedBits::default();
        for part in def.fixed_parts() {
            bits.merge(compile(part));
        }

        let mut fields = merge_fields(def.field_tokens());
        self.catalog.sort(&mut fields)?;

        if self.config.enforce_low_bits && bits.mask & OPCODE_LOW_BITS != OPCODE_LOW_BITS {
            return Err(ErrorKind::InvariantViolation { mask: bits.mask });
        }

        let width = match self.config.width_policy {
            WidthPolicy::Fixed32 => Width::Wide,
            WidthPolicy::AutoDetect if bits.value & OPCODE_LOW_BITS == OPCODE_LOW_BITS => Width::Wide,
            WidthPolicy::AutoDetect => Width::Compact,
        };

        debug!(
            "{}: mask=0x{:08x} value=0x{:08x} width={} fields={:?}",
            def.name,
            bits.mask,
            bits.value,
            width.bits(),
            fields
        );

        Ok(Encoding { name: def.name.clone(), mask: bits.mask, value: bits.value, fields, width })
    }

    /// Process one raw input line. Comments, directives and blank lines
    /// produce `Ok(None)`.
    pub fn process_line(&self, line: &str) -> Result<Option<Encoding>, ErrorKind> {
        let kind = classify(line);
        trace!("{:?}: {}", kind, line);
        match kind {
            LineKind::Definition => {
                let def = parser::parse(line)?;
                self.assemble(&def).map(Some)
            }
            LineKind::Comment | LineKind::Directive | LineKind::Blank => Ok(None),
        }
    }

    /// Lazily assemble every definition in `lines`.
    pub fn encodings<I, S>(&self, file: &str, lines: I) -> Encodings<'a, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Encodings { assembler: *self, file: file.to_string(), lines: lines.into_iter(), line_num: 0, done: false }
    }
}

/// Lazy stream of records, one per definition line, in input order.
///
/// Yields at most one error, after which it is exhausted.
pub struct Encodings<'a, I> {
    assembler: Assembler<'a>,
    file: String,
    lines: I,
    line_num: usize,
    done: bool,
}

impl<I, S> Iterator for Encodings<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Encoding, TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            self.line_num += 1;
            let line = line.as_ref();
            match self.assembler.process_line(line) {
                Ok(Some(encoding)) => return Some(Ok(encoding)),
                Ok(None) => {}
                Err(kind) => {
                    self.done = true;
                    let location = Location::new(self.file.as_str(), self.line_num);
                    return Some(Err(TableError::from_context(kind, location, line)));
                }
            }
        }
        self.done = true;
        None
    }
}

/// Assemble a complete source text, stopping at the first error.
pub fn assemble_source(
    text: &str,
    file: &str,
    catalog: &FieldCatalog,
    config: AssemblerConfig,
) -> Result<Vec<Encoding>, TableError> {
    Assembler::new(catalog, config).encodings(file, text.lines()).collect()
}
