// config.rs
//
// Configuration and CLI argument parsing for the opcode table generator

use crate::assembler::AssemblerConfig;
use crate::catalog::FieldCatalog;
use crate::output::Format;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Translate an opcode bit-field table into mask/value encoding records.
#[derive(Parser, Debug)]
#[command(name = "optable", version)]
pub struct Cli {
    /// Opcode table to read ('-' or absent for standard input)
    pub input: Option<PathBuf>,

    /// Write records to <FILE> instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Rust)]
    pub format: Format,

    /// Treat every instruction as 32-bit and skip the low opcode bits check
    #[arg(long)]
    pub wide: bool,

    /// Field catalog file (one name per line, in output order)
    #[arg(long, value_name = "FILE")]
    pub fields: Option<PathBuf>,

    /// Log each record as it is assembled
    #[arg(short, long)]
    pub verbose: bool,
}

/// Complete configuration for one run
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Format,
    pub assembler: AssemblerConfig,
    pub catalog: FieldCatalog,
    pub verbose: bool,
}

impl Cli {
    /// Resolve the parsed arguments, loading the field catalog if one was given.
    pub fn into_config(self) -> Result<Config, String> {
        let catalog = match &self.fields {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("could not read field catalog '{}': {}", path.display(), e))?;
                FieldCatalog::parse(&text).map_err(|e| format!("{}: {}", path.display(), e))?
            }
            None => FieldCatalog::riscv(),
        };

        let assembler = if self.wide { AssemblerConfig::wide() } else { AssemblerConfig::auto() };
        let input = self.input.filter(|p| p.as_os_str() != "-");

        Ok(Config { input, output: self.output, format: self.format, assembler, catalog, verbose: self.verbose })
    }
}
