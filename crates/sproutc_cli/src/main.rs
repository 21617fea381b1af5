use crate::args::{Args, Emit};
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use sprout_parsing::report::Report;
use sproutc::{Checked, Frontend, FrontendError};
use std::io::{self, stdout, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting sproutc with args: {args:?}");
    debug!("sproutc version: {}", env!("CARGO_PKG_VERSION"));

    let frontend = Frontend::builder()
        .function_scopes(args.function_scopes)
        .build();

    let source = match frontend.read_source(&args.file) {
        Ok(source) => source,
        Err(error) => return Ok(fail(&args, &error, "")),
    };
    match frontend.check_source(&args.file, &source) {
        Ok(checked) => {
            emit(&args, &checked, &mut stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => Ok(fail(&args, &error, &source)),
    }
}

/// Prints a rejection to stderr and picks the exit status for it
fn fail(args: &Args, error: &FrontendError, source: &str) -> ExitCode {
    let header = "error".if_supports_color(Stream::Stderr, |s| s.red().bold().to_string());
    match error.syntax_error() {
        Some(syntax) => {
            let report = Report::new(syntax, &args.file, source).with_non_terminals(args.productions);
            eprint!("{header}: {report}");
        }
        None => {
            let cause = std::error::Error::source(error.kind())
                .map(|e| format!(": {e}"))
                .unwrap_or_default();
            eprintln!("{header}: {error}{cause}");
        }
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Writes the requested sections for an accepted program
fn emit<W: Write>(args: &Args, checked: &Checked, out: &mut W) -> io::Result<()> {
    if args.emits(Emit::Tokens) {
        section(out, "tokens", &checked.path)?;
        for token in checked.tokens.iter() {
            writeln!(
                out,
                "[{:>3}] {:<16} '{}'",
                token.line(),
                token.kind(),
                token.lexeme()
            )?;
        }
    }
    if args.emits(Emit::Symbols) {
        section(out, "symbols", &checked.path)?;
        write!(out, "{}", checked.symbol_dump())?;
    }
    if args.emits(Emit::Ast) {
        section(out, "ast", &checked.path)?;
        write!(out, "{}", checked.unit.program.tree())?;
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, name: &str, path: &Path) -> io::Result<()> {
    let title = format!("== {name}: {} ==", path.display());
    writeln!(
        out,
        "{}",
        title.if_supports_color(Stream::Stdout, |s| s.bold().to_string())
    )
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().without_time())
                .with_writer(io::stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
