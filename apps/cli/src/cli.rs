//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive flashcard trainer
#[derive(Debug, Parser)]
#[command(name = "flashcards")]
#[command(version)]
#[command(about = "Quiz yourself on term/definition flashcards")]
pub struct Cli {
    /// File to import cards from before the first prompt
    #[arg(long = "import_from", alias = "import-from", env = "FLASHCARDS_IMPORT_FROM")]
    pub import_from: Option<PathBuf>,

    /// File to export cards to on exit
    #[arg(long = "export_to", alias = "export-to", env = "FLASHCARDS_EXPORT_TO")]
    pub export_to: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
