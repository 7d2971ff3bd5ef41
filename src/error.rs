// error.rs
//
// This file defines the error types for the opcode table generator.
// Every error is fatal: the run stops at the first one and reports the
// failing line together with its location.

use crate::ast::Location;
use std::fmt;

/// What went wrong while turning one definition line into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A fixed part's bit range or integer literal could not be parsed.
    #[error("malformed fixed part '{part}': {reason}")]
    MalformedBitspec { part: String, reason: String },

    /// The assembled mask leaves one of the two low opcode bits unconstrained.
    #[error("mask 0x{mask:08x} does not fix both low opcode bits")]
    InvariantViolation { mask: u32 },

    /// A normalized field name has no entry in the field catalog.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

impl ErrorKind {
    pub fn malformed(part: &str, reason: impl Into<String>) -> Self {
        ErrorKind::MalformedBitspec { part: part.to_string(), reason: reason.into() }
    }
}

/// An [`ErrorKind`] tied to the input line that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableError {
    pub location: Location,
    pub text: String,
    pub kind: ErrorKind,
}

impl TableError {
    pub fn from_context(kind: ErrorKind, location: Location, text: &str) -> Self {
        TableError { location, text: text.to_string(), kind }
    }

    /// The failing line, indented and marked the way the error report prints it.
    pub fn with_source_context(&self) -> String {
        format!(">>> {:4}: {}", self.location.line, self.text)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at {}: {}\n{}", self.location, self.kind, self.with_source_context())
    }
}

impl std::error::Error for TableError {}
