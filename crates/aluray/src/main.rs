//! aluray - a disassembler for the ALU-16 teaching CPU
//!
//! Usage:
//!   aluray program.hex              Disassemble a listing to stdout
//!   aluray -o out.asm program.hex   Write the assembly to a file
//!   aluray --strict program.hex     Fail on the first malformed line
//!   aluray --json program.hex       Emit one JSON object per instruction
//!
//! With no input path the listing is read from stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use aluray_disasm::{
    disassemble_listing, disassemble_listing_with, ListingOptions, ListingSummary,
};

#[derive(Parser)]
#[command(name = "aluray")]
#[command(about = "A disassembler for the ALU-16 teaching CPU", long_about = None)]
struct Cli {
    /// Hex listing to disassemble (one 4-digit word per line); stdin if omitted
    input: Option<PathBuf>,

    /// Write assembly to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Fail on the first malformed line instead of reporting and continuing
    #[arg(long)]
    strict: bool,

    /// Emit one JSON object per instruction instead of assembly text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input_name = match &cli.input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    };

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open listing {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let options = ListingOptions { strict: cli.strict };
    let summary = if cli.json {
        disassemble_listing_with(reader, writer, options, |writer, instruction| {
            serde_json::to_writer(&mut *writer, instruction).map_err(io::Error::other)?;
            writeln!(writer)
        })
    } else {
        disassemble_listing(reader, writer, options)
    }
    .with_context(|| format!("failed to disassemble {}", input_name))?;

    report(&input_name, &summary);
    Ok(())
}

/// Prints per-line diagnostics and logs the run counters.
fn report(input_name: &str, summary: &ListingSummary) {
    for diagnostic in &summary.diagnostics {
        eprintln!("{}:{}: {}", input_name, diagnostic.line, diagnostic.error);
    }
    info!(
        "{}: {} lines in, {} instructions out, {} unknown words, {} malformed lines",
        input_name,
        summary.lines,
        summary.instructions,
        summary.unknown,
        summary.diagnostics.len()
    );
}
