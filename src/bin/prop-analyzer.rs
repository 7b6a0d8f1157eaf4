//! Propositional Formula Analyzer - Command Line Interface
//!
//! Analyzes one formula per invocation argument or per input line and prints the
//! verdict, canonical form, prefix notation and truth table.

use clap::{Parser, ValueEnum};
use prop_analyzer::{Analysis, Analyzer, AnalyzerConfig, UnclosedBracketReport};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// One JSON document per formula
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "prop-analyzer")]
#[command(about = "Validate propositional formulas and print their truth tables", long_about = None)]
#[command(version)]
struct Args {
    /// Formula to analyze (reads one formula per line from --input or stdin when omitted)
    #[arg(value_name = "FORMULA")]
    formula: Option<String>,

    /// File with one formula per line
    #[arg(short = 'i', long = "input", conflicts_with = "formula")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Skip truth-table generation
    #[arg(long = "no-table")]
    no_table: bool,

    /// Cite the last scanned character in unclosed-bracket diagnostics
    #[arg(long = "legacy-unclosed")]
    legacy_unclosed: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit status: every formula valid
const EXIT_VALID: i32 = 0;
/// Exit status: at least one formula rejected
const EXIT_REJECTED: i32 = 1;
/// Exit status: internal fault or I/O failure
const EXIT_FAILURE: i32 = 2;

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let analyzer = Analyzer::new(AnalyzerConfig {
        unclosed_bracket_report: if args.legacy_unclosed {
            UnclosedBracketReport::ScanEnd
        } else {
            UnclosedBracketReport::Opener
        },
        truth_table: !args.no_table,
    });

    let formulas = match collect_formulas(&args) {
        Ok(formulas) => formulas,
        Err(e) => {
            eprintln!("Error reading formulas: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = EXIT_VALID;

    for formula in &formulas {
        let analysis = match analyzer.analyze(formula) {
            Ok(analysis) => analysis,
            Err(e) => {
                eprintln!("Internal error while analyzing {:?}: {}", formula, e);
                process::exit(EXIT_FAILURE);
            }
        };
        if !analysis.is_valid() {
            status = EXIT_REJECTED;
        }

        let written = match args.format {
            OutputFormat::Text => write_text(&mut out, &analysis),
            OutputFormat::Json => write_json(&mut out, &analysis, args.pretty),
        };
        if let Err(e) = written {
            eprintln!("Error writing output: {}", e);
            process::exit(EXIT_FAILURE);
        }
    }

    process::exit(status);
}

/// Formulas from the argument, the input file or stdin
fn collect_formulas(args: &Args) -> io::Result<Vec<String>> {
    if let Some(formula) = &args.formula {
        return Ok(vec![formula.clone()]);
    }
    match &args.input {
        Some(path) => read_formulas(BufReader::new(File::open(path)?)),
        None => read_formulas(io::stdin().lock()),
    }
}

/// One formula per line, kept verbatim apart from the line terminator; empty lines
/// are skipped
fn read_formulas(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut formulas = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            formulas.push(line);
        }
    }
    Ok(formulas)
}

fn write_text(out: &mut impl Write, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "Formula:   {}", analysis.formula)?;
    if !analysis.is_valid() {
        writeln!(out, "Valid:     no")?;
        for diagnostic in &analysis.diagnostics {
            writeln!(out, "  - {}", diagnostic)?;
        }
        return writeln!(out);
    }

    writeln!(out, "Valid:     yes")?;
    if let Some(canonical) = &analysis.canonical {
        writeln!(out, "Canonical: {}", canonical)?;
    }
    if let Some(prefix) = &analysis.prefix {
        writeln!(out, "Prefix:    {}", prefix)?;
    }
    if let Some(tree) = &analysis.tree {
        writeln!(out, "Tree:      {}", tree)?;
    }
    if let Some(table) = &analysis.truth_table {
        let verdict = if table.is_tautology() {
            "tautology"
        } else if table.is_contradiction() {
            "contradiction"
        } else if table.is_satisfiable() {
            "contingent"
        } else {
            "no operands"
        };
        writeln!(out, "Verdict:   {}", verdict)?;
        writeln!(out)?;
        write!(out, "{}", table)?;
    }
    writeln!(out)
}

fn write_json(out: &mut impl Write, analysis: &Analysis, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, analysis)?;
    } else {
        serde_json::to_writer(&mut *out, analysis)?;
    }
    writeln!(out)
}
