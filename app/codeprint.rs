//! Command-line interface for codeprint.
//!
//! Prints every file under a directory as an absolute path line followed by the
//! file's text and a blank line.

use clap::{ArgAction, Parser, ValueEnum};
use codeprint::{CodeprintError, PrintOptions, PrintOptionsBuilder, output, print_tree_with};
use std::io;
use std::path::PathBuf;
use std::process::exit;

/// codeprint — dump the text of every file under a directory
#[derive(Parser)]
#[command(name = "codeprint", version, about, long_about = None, args_override_self = true)]
struct Cli {
    /// Directory to print
    directory: PathBuf,

    /// Names to exclude, matched case-insensitively against file and directory names.
    /// A later -e replaces the names of an earlier one.
    #[arg(short, long, num_args = 1.., value_name = "NAME", action = ArgAction::Set)]
    exclude: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (PrintOptions, OutputFormat) {
        let options = PrintOptionsBuilder::new(self.directory)
            .exclude(self.exclude)
            .recursive(self.recursive)
            .build();
        (options, self.format)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // stdout carries the file blocks, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn run(options: &PrintOptions, format: OutputFormat) -> Result<(), CodeprintError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_tree_with(options, &mut handle, format.into())
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, format) = cli.into_options();

    if let Err(e) = run(&options, format) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
