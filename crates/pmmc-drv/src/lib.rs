//! pmmc-drv — the command-line driver.
//!
//! Reads one source file, runs the lexer/parser pipeline, and writes the
//! two sink files (`tokenOutput.txt`, `output.txt`), mirroring every line
//! to stdout as it is written (spec.md §6). Driver-level failures (a
//! missing argument, an unreadable source, an unopenable sink) are
//! reported via [`DriverError`]/`anyhow` and map to exit code 1; lexical
//! and syntactic errors are never `Err` — they are diagnostics, counted
//! and reported in the summary line (spec.md §7).

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use pmmc_lex::{Lexer, Token};
use pmmc_par::Parser;
use pmmc_util::{DriverError, DriverResult, Handler};

/// Resolved configuration for one compilation: the source path plus the
/// two sink paths, both derived from the current working directory the
/// way the teacher's own hand-built `Config` resolves its output paths
/// rather than through a flag-parsing crate (spec.md §3 Configuration).
pub struct Config {
    pub source_path: PathBuf,
    pub token_output_path: PathBuf,
    pub diagnostic_output_path: PathBuf,
}

impl Config {
    /// Parses `pmmc <source-file>` out of a raw argument iterator
    /// (`std::env::args()` at the real entry point, an arbitrary
    /// `Vec<String>` in tests). Exactly one positional argument is
    /// accepted; anything else is [`DriverError::NoInputFile`].
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> DriverResult<Self> {
        let mut args = args.into_iter();
        args.next(); // argv[0]
        let source_path = args.next().ok_or(DriverError::NoInputFile)?;
        if args.next().is_some() {
            return Err(DriverError::NoInputFile);
        }
        Ok(Self {
            source_path: PathBuf::from(source_path),
            token_output_path: PathBuf::from("tokenOutput.txt"),
            diagnostic_output_path: PathBuf::from("output.txt"),
        })
    }
}

/// What one compilation produced, for the summary line and the process
/// exit code — never an error in itself (spec.md §7).
pub struct CompileReport {
    pub error_count: usize,
}

/// Runs the full pipeline for one source file: read, lex+parse, write
/// both sinks. Returns `Err` only for driver-level I/O failures; every
/// lexical/syntactic problem in the source is folded into the returned
/// report's `error_count` instead.
pub fn compile(config: &Config) -> anyhow::Result<CompileReport> {
    let source = fs::read(&config.source_path)
        .map_err(|err| DriverError::SourceUnreadable(config.source_path.clone(), err))
        .with_context(|| format!("reading {}", config.source_path.display()))?;

    let handler = Handler::new();
    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer, &handler);
    parser.compile();

    write_token_sink(&config.token_output_path, parser.tokens())
        .map_err(|err| DriverError::SinkUnopenable(config.token_output_path.clone(), err))
        .with_context(|| format!("writing {}", config.token_output_path.display()))?;

    write_diagnostic_sink(&config.diagnostic_output_path, &handler)
        .map_err(|err| DriverError::SinkUnopenable(config.diagnostic_output_path.clone(), err))
        .with_context(|| format!("writing {}", config.diagnostic_output_path.display()))?;

    Ok(CompileReport {
        error_count: handler.error_count(),
    })
}

/// Writes `tokenOutput.txt`: `<lexeme>, <CLASS_NAME>` per accepted
/// non-error token, the terminating `Lambda` rendered as `EOF`, each
/// line mirrored to stdout as it is written (spec.md §6).
fn write_token_sink(path: &Path, tokens: &[Token]) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut sink = BufWriter::new(file);
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for token in tokens {
        let line = if token.class == pmmc_lex::TokenClass::Lambda {
            "EOF".to_string()
        } else {
            format!("{}, {}", token.lexeme, token.class.canonical_name())
        };
        writeln!(sink, "{line}")?;
        writeln!(stdout, "{line}")?;
    }
    sink.flush()
}

/// Writes `output.txt`: one diagnostic per line, already in source
/// order since `Handler` only ever appends (spec.md §6).
fn write_diagnostic_sink(path: &Path, handler: &Handler) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut sink = BufWriter::new(file);
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for diagnostic in handler.diagnostics().iter() {
        writeln!(sink, "{}", diagnostic.message)?;
        writeln!(stdout, "{}", diagnostic.message)?;
    }
    sink.flush()
}

/// The one summary line spec.md §6 requires after compilation finishes.
pub fn summary_line(report: &CompileReport) -> String {
    if report.error_count == 0 {
        "Program compiled successfully".to_string()
    } else {
        format!("Program compiled with {} errors", report.error_count)
    }
}

/// Top-level driver logic, shared between `fn main` and the CLI tests
/// that call it directly against an arbitrary argument list.
pub fn main_inner(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let config = Config::from_args(args)?;
    let report = compile(&config)?;
    println!("{}", summary_line(&report));
    Ok(())
}
