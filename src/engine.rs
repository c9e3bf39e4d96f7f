use crate::error::CodeprintError;
use crate::options::PrintOptions;
use crate::output::{OutputFormat, write_entry};
use crate::types::{EntryKind, FileEntry};
use ignore::WalkBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Depth-first walk over the root in raw enumeration order.
///
/// Without recursion the walk stops at depth 1; directories there are still yielded
/// and dropped by the caller. Excluded names are pruned before descent.
struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(options: &PrintOptions) -> Result<Self, CodeprintError> {
        if !options.root.is_dir() {
            return Err(CodeprintError::InvalidArgument {
                path: options.root.clone(),
            });
        }
        let root = std::path::absolute(&options.root)
            .map_err(|e| CodeprintError::io(&options.root, e))?;

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(if options.recursive { None } else { Some(1) });

        if !options.exclude.is_empty() {
            let excluded = options.clone();
            builder.filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let skip = excluded.is_excluded(&entry.file_name().to_string_lossy());
                #[cfg(feature = "logging")]
                if skip {
                    tracing::debug!("Excluded: {}", entry.path().display());
                }
                !skip
            });
        }

        Ok(Self {
            inner: builder.build(),
        })
    }
}

impl Iterator for Walker {
    type Item = Result<(PathBuf, EntryKind), CodeprintError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(CodeprintError::Walk(e))),
            };
            if entry.depth() == 0 {
                continue;
            }
            let kind = EntryKind::from_file_type(entry.file_type());
            return Some(Ok((entry.into_path(), kind)));
        }
    }
}

/// Reads a file as strict UTF-8 text with `\r\n` and lone `\r` line endings folded to `\n`.
fn read_file_content(path: &Path) -> Result<String, CodeprintError> {
    let bytes = fs::read(path).map_err(|e| CodeprintError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| CodeprintError::decode(path, e))?;
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Lazily yields every printable file under the root, in walk order.
///
/// The first error ends the stream; nothing is yielded after it.
pub struct FileStream {
    walker: Walker,
    failed: bool,
}

impl FileStream {
    /// Validates the root and prepares the walk. No file is read until iteration.
    pub fn new(options: &PrintOptions) -> Result<Self, CodeprintError> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Starting walk at {} (recursive: {}, excluded: {:?})",
            options.root.display(),
            options.recursive,
            options.exclude
        );
        Ok(Self {
            walker: Walker::new(options)?,
            failed: false,
        })
    }

    fn next_file(&mut self) -> Option<Result<FileEntry, CodeprintError>> {
        loop {
            let (path, kind) = match self.walker.next()? {
                Ok(item) => item,
                Err(e) => return Some(Err(e)),
            };
            match kind {
                EntryKind::File => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Reading {}", path.display());
                    return Some(read_file_content(&path).map(|content| FileEntry { path, content }));
                }
                EntryKind::Directory | EntryKind::Other => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping {:?} entry {}", kind, path.display());
                }
            }
        }
    }
}

impl Iterator for FileStream {
    type Item = Result<FileEntry, CodeprintError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_file()?;
        if let Err(ref _e) = item {
            #[cfg(feature = "logging")]
            tracing::warn!("Aborting walk: {}", _e);
            self.failed = true;
        }
        Some(item)
    }
}

/// Reads every printable file under the root into memory.
///
/// Fails on the first unreadable directory, unreadable file or non-UTF-8 file.
pub fn codeprint(options: &PrintOptions) -> Result<Vec<FileEntry>, CodeprintError> {
    FileStream::new(options)?.collect()
}

/// Writes each file under the root to `out` as a text block, in walk order.
///
/// Blocks are written as soon as each file is read. On error, the blocks already
/// written stay in `out` and the walk stops.
pub fn print_tree(options: &PrintOptions, out: &mut impl Write) -> Result<(), CodeprintError> {
    print_tree_with(options, out, OutputFormat::Text)
}

/// Like [`print_tree`], with a chosen output format.
pub fn print_tree_with(
    options: &PrintOptions,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<(), CodeprintError> {
    for entry in FileStream::new(options)? {
        write_entry(out, &entry?, format)?;
    }
    out.flush().map_err(CodeprintError::Output)
}
