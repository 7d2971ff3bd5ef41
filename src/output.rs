// output.rs
//
// Serialization of encoding records. The table can be written either as
// Rust struct literals, ready to paste into a static decoder table, or as
// JSON lines.

use crate::ast::Encoding;
use serde::Serialize;
use std::io::{self, Write};

/// Output format for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// `Encoding { name: .., mask: .., value: .., fields: &[..] },`
    #[default]
    Rust,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    mask: u32,
    value: u32,
    width: u32,
    fields: &'a [String],
}

/// Format a record as a Rust struct literal line.
///
/// Mask and value use 8 hex digits for 32-bit records and 4 for 16-bit ones.
pub fn format_rust(encoding: &Encoding) -> String {
    let digits = encoding.width.hex_digits();
    let fields: Vec<String> = encoding.fields.iter().map(|f| format!("{:?}", f)).collect();
    format!(
        "Encoding {{ name: {:?}, mask: 0x{:0digits$x}, value: 0x{:0digits$x}, fields: &[{}] }},",
        encoding.name,
        encoding.mask,
        encoding.value,
        fields.join(", "),
        digits = digits
    )
}

/// Format a record as a single-line JSON object.
pub fn format_json(encoding: &Encoding) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        name: &encoding.name,
        mask: encoding.mask,
        value: encoding.value,
        width: encoding.width.bits(),
        fields: &encoding.fields,
    })
}

/// Writes records one per line as they arrive.
pub struct RecordWriter<W: Write> {
    out: W,
    format: Format,
    count: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: Format) -> Self {
        RecordWriter { out, format, count: 0 }
    }

    pub fn write(&mut self, encoding: &Encoding) -> io::Result<()> {
        let line = match self.format {
            Format::Rust => format_rust(encoding),
            Format::Json => format_json(encoding)?,
        };
        writeln!(self.out, "{}", line)?;
        self.count += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
