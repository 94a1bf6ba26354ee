use std::path::PathBuf;

/// Artifact formats that can be generated from a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// C header: include guard plus one `#define CONFIG_<SYMBOL> <value>` per key.
    Header,
    /// Makefile fragment: one `CONFIG_<SYMBOL> := <value>` per key.
    Makefile,
}

/// One requested artifact: what to write and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl Output {
    pub fn header(path: impl Into<PathBuf>) -> Self {
        Self {
            format: OutputFormat::Header,
            path: path.into(),
        }
    }

    pub fn makefile(path: impl Into<PathBuf>) -> Self {
        Self {
            format: OutputFormat::Makefile,
            path: path.into(),
        }
    }
}
