use serde::{Deserialize, Serialize};
use std::fs::FileType;
use std::path::PathBuf;

/// What a directory entry is, judged without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, devices, fifos, sockets. Never printed or descended into.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: Option<FileType>) -> Self {
        match file_type {
            Some(ft) if ft.is_file() => EntryKind::File,
            Some(ft) if ft.is_dir() => EntryKind::Directory,
            _ => EntryKind::Other,
        }
    }
}

/// A single printed file: its absolute path and decoded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}
