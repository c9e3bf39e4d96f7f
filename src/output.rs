//! Output formatting for printed files.
//!
//! Every file becomes one self-contained block so that output can be written as the
//! walk progresses. File content is emitted exactly as read.

use crate::{CodeprintError, FileEntry};
use std::io::Write;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Absolute path line, content, blank line.
    #[default]
    Text,
    /// One compact JSON object per line.
    Json,
}

/// Formats a single file entry into its output block.
pub fn format_entry(entry: &FileEntry, format: OutputFormat) -> Result<String, CodeprintError> {
    match format {
        OutputFormat::Text => Ok(format_text(entry)),
        OutputFormat::Json => format_json(entry),
    }
}

/// Writes a single file entry to `out`.
pub fn write_entry(
    out: &mut impl Write,
    entry: &FileEntry,
    format: OutputFormat,
) -> Result<(), CodeprintError> {
    let block = format_entry(entry, format)?;
    out.write_all(block.as_bytes())
        .map_err(CodeprintError::Output)
}

// ----------------------- Internal formatting -----------------------

fn format_text(entry: &FileEntry) -> String {
    let path = entry.path.display().to_string();
    let mut out = String::with_capacity(path.len() + entry.content.len() + 3);
    out.push_str(&path);
    out.push('\n');
    out.push_str(&entry.content);
    out.push_str("\n\n");
    out
}

fn format_json(entry: &FileEntry) -> Result<String, CodeprintError> {
    let mut line = serde_json::to_string(entry)?;
    line.push('\n');
    Ok(line)
}
