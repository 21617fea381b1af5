//! Arguments shared by the sprout command line tools

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Log more, can be repeated
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, can be repeated
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used.
    ///
    /// Without either flag only warnings and errors are logged, so the regular output of a tool
    /// stays readable.
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.verbose as i8 - self.quiet as i8 {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}
