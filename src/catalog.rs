// catalog.rs
//
// The field catalog: an ordered list of canonical field names. A field's
// rank is its position in the list, and records list their fields by
// ascending rank. The catalog is built once and never changes.

use crate::error::ErrorKind;
use std::collections::HashMap;

/// Canonical RISC-V field names, in output order.
#[rustfmt::skip]
pub const RISCV_FIELDS: &[&str] = &[
    "rd", "rd_p", "rd_n0", "rd_n2", "rd_rs1", "rd_rs1_p", "rd_rs1_n0",
    "rs1", "rs1_n0", "rs1_p", "c_rs1_n0",
    "rs2", "rs2_p", "c_rs2", "c_rs2_n0",
    "imm20", "jimm20", "imm12", "csr", "imm12hilo", "bimm12hilo",
    "c_bimm9hilo", "c_imm12", "c_imm6hilo", "c_nzimm10hilo", "c_nzimm18hilo", "c_nzimm6hilo",
    "c_nzuimm6hilo", "c_nzuimm10", "c_uimm7hilo", "c_uimm8hilo", "c_uimm8sp_s", "c_uimm9sp_s",
    "c_uimm8sphilo", "c_uimm9sphilo",
    "shamtd", "shamtw",
    "fm", "pred", "succ",
    "aq", "rl",
    "zimm",
];

#[derive(Debug, Clone)]
pub struct FieldCatalog {
    names: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl FieldCatalog {
    /// Build a catalog from names in rank order. Fails on a repeated name.
    pub fn new<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = FieldCatalog { names: Vec::new(), ranks: HashMap::new() };
        for name in names {
            let name = name.into();
            if catalog.ranks.contains_key(&name) {
                return Err(format!("field '{}' listed twice in catalog", name));
            }
            catalog.ranks.insert(name.clone(), catalog.names.len());
            catalog.names.push(name);
        }
        Ok(catalog)
    }

    /// The built-in RISC-V catalog.
    pub fn riscv() -> Self {
        FieldCatalog {
            names: RISCV_FIELDS.iter().map(|s| s.to_string()).collect(),
            ranks: RISCV_FIELDS.iter().enumerate().map(|(i, s)| (s.to_string(), i)).collect(),
        }
    }

    /// Parse a catalog file: one name per line, `#` comments and blank lines skipped.
    pub fn parse(text: &str) -> Result<Self, String> {
        let names = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty());
        Self::new(names)
    }

    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ranks.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sort `fields` by ascending rank.
    ///
    /// The first name missing from the catalog is reported as
    /// [`ErrorKind::UnknownField`]; `fields` is left untouched in that case.
    pub fn sort(&self, fields: &mut [String]) -> Result<(), ErrorKind> {
        if let Some(unknown) = fields.iter().find(|f| !self.contains(f)) {
            return Err(ErrorKind::UnknownField(unknown.clone()));
        }
        fields.sort_by_key(|f| self.ranks[f.as_str()]);
        Ok(())
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::riscv()
    }
}
