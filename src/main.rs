use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use optable::assembler::Assembler;
use optable::config::{Cli, Config};
use optable::output::RecordWriter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };
    if let Err(e) = run(config) {
        report(&format!("{:#}", e));
        std::process::exit(1);
    }
}

// RUST_LOG wins; otherwise -v selects debug
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .init();
}

fn report(message: &str) {
    let mut lines = message.lines();
    let headline = lines.next().unwrap_or("error");
    if io::stderr().is_tty() {
        eprintln!("{}", headline.red().bold());
    } else {
        eprintln!("{}", headline);
    }
    for line in lines {
        eprintln!("{}", line);
    }
}

fn run(config: Config) -> Result<()> {
    let (name, text) = match &config.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read file '{}'", path.display()))?;
            (path.display().to_string(), text)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("could not read standard input")?;
            ("<stdin>".to_string(), text)
        }
    };

    let out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create '{}'", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = RecordWriter::new(out, config.format);

    let assembler = Assembler::new(&config.catalog, config.assembler);
    let mut result = Ok(());
    for encoding in assembler.encodings(&name, text.lines()) {
        match encoding {
            Ok(encoding) => writer.write(&encoding).context("could not write record")?,
            Err(e) => {
                result = Err(e);
                break;
            }
        }
    }

    // records produced before an error stay written
    let count = writer.count();
    writer.finish().context("could not write output")?;
    result?;

    info!("{}: {} records", name, count);
    Ok(())
}
