//! the args for running sproutc

use clap::ValueEnum;
use sprout_cli_common::LoggingArgs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// A section of output that can be emitted for an accepted program
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Every token of the source, one per line
    Tokens,
    /// The symbol table
    Symbols,
    /// The syntax tree
    Ast,
}

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Checks sprout programs and dumps what the front end saw")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to check
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,
    /// Which sections to print. Defaults to all of them.
    #[clap(long, value_enum, value_delimiter = ',')]
    emit: Vec<Emit>,
    /// Include every function and procedure scope in the symbol table
    #[clap(long)]
    pub function_scopes: bool,
    /// List the productions being parsed when a program is rejected
    #[clap(long, env = "SPROUTC_TRACE_PRODUCTIONS")]
    pub productions: bool,
}

impl Args {
    /// Whether a section should be printed
    pub fn emits(&self, emit: Emit) -> bool {
        self.emit.is_empty() || self.emit.contains(&emit)
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.logging.log_level_filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_args_parsing() {
        let test = "sproutc file.lang";
        let args = Args::try_parse_from(test.split(' ')).expect("could not parse test string");
        assert_eq!(args.file, Path::new("file.lang"));
        assert!(!args.function_scopes);
        assert!(args.emits(Emit::Tokens));
        assert!(args.emits(Emit::Symbols));
        assert!(args.emits(Emit::Ast));
    }

    #[test]
    fn test_emit_parsing() {
        let test = "sproutc --emit symbols,ast --function-scopes file.lang";
        let args = Args::try_parse_from(test.split(' ')).expect("could not parse test string");
        assert!(!args.emits(Emit::Tokens));
        assert!(args.emits(Emit::Symbols));
        assert!(args.emits(Emit::Ast));
        assert!(args.function_scopes);
    }

    #[test]
    fn test_file_required() {
        assert!(Args::try_parse_from(["sproutc"]).is_err());
        assert!(Args::try_parse_from(["sproutc", "--emit", "bytes", "file.lang"]).is_err());
    }

    #[test]
    fn test_logging_flags() {
        let args = Args::try_parse_from(["sproutc", "-vv", "file.lang"]).expect("could not parse");
        assert_eq!(args.log_level_filter(), LevelFilter::TRACE);
    }
}
