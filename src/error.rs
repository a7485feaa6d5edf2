// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading a scrape configuration.
///
/// Both variants are terminal: the loader never returns a partially
/// populated `Config` alongside an error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to load config: {}, Error: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a well-formed configuration document.
    #[error("Failed to parse YAML{}: {source}", display_path(path))]
    Parse {
        path: Option<PathBuf>,
        line: Option<usize>,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: None,
            line: source.location().map(|loc| loc.line()),
            source,
        }
    }

    /// Attaches the originating file to a parse error. I/O errors already carry it.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Parse { line, source, .. } => Self::Parse {
                path: Some(file.to_path_buf()),
                line,
                source,
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    /// Line (1-based) of the offending YAML, when the parser reported one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => *line,
            Self::Io { .. } => None,
        }
    }

    /// File the error relates to, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => path.as_deref(),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ConfigError>;
