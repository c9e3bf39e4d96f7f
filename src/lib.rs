//! # Codeprint
//!
//! `codeprint` prints the contents of the files under a directory: each file's absolute
//! path on its own line, then its text, then a blank line. Subdirectories are walked
//! only when recursion is enabled, and entries whose basename matches an excluded name
//! (case-insensitively) are skipped, including whole directories.
//!
//! Sibling order is whatever the filesystem enumeration yields; it is not sorted.
//! Symlinks and special files are never printed or followed. The first unreadable
//! directory, unreadable file or non-UTF-8 file aborts the whole run.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codeprint::{PrintOptionsBuilder, print_tree};
//!
//! let options = PrintOptionsBuilder::new(".")
//!     .exclude(["target", ".git"])
//!     .recursive(true)
//!     .build();
//!
//! let stdout = std::io::stdout();
//! print_tree(&options, &mut stdout.lock()).expect("Failed to print directory");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{FileStream, codeprint, print_tree, print_tree_with};
pub use error::{CodeprintError, ErrorKind};
pub use options::{PrintOptions, PrintOptionsBuilder};
pub use types::{EntryKind, FileEntry};
