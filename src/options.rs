use std::collections::BTreeSet;
use std::path::PathBuf;

/// Run configuration for a single print pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub root: PathBuf,
    /// Lowercased basenames to skip.
    pub exclude: BTreeSet<String>,
    pub recursive: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: BTreeSet::new(),
            recursive: false,
        }
    }
}

impl PrintOptions {
    /// Case-insensitive membership test against the exclusion set.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(&name.to_lowercase())
    }
}

#[derive(Debug, Default)]
pub struct PrintOptionsBuilder {
    options: PrintOptions,
}

impl PrintOptionsBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: PrintOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options
            .exclude
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    pub fn recursive(mut self, yes: bool) -> Self {
        self.options.recursive = yes;
        self
    }

    pub fn build(self) -> PrintOptions {
        self.options
    }
}
