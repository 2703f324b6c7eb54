//! Per-file failure taxonomy.
//!
//! Every variant carries the path of the compilation unit that failed so a
//! report never loses track of which file was responsible.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummaryError>;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// The parser could not produce a clean tree (syntax error, bad encoding).
    #[error("failed to parse {}: {diagnostic}", path.display())]
    Parse {
        path: PathBuf,
        diagnostic: String,
        line: Option<usize>,
        column: Option<usize>,
        stack: Option<String>,
    },

    /// The file was unreadable or vanished between discovery and read.
    #[error("failed to read {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
        stack: Option<String>,
    },

    /// The tree had a shape the extractor cannot model.
    #[error("internal invariant violated while extracting {}: {detail}", path.display())]
    InternalInvariant {
        path: PathBuf,
        detail: String,
        stack: Option<String>,
    },
}

impl SummaryError {
    pub fn parse(
        path: impl Into<PathBuf>,
        diagnostic: impl Into<String>,
        location: Option<(usize, usize)>,
    ) -> Self {
        SummaryError::Parse {
            path: path.into(),
            diagnostic: diagnostic.into(),
            line: location.map(|(line, _)| line),
            column: location.map(|(_, column)| column),
            stack: capture_stack(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SummaryError::Filesystem {
            path: path.into(),
            source,
            stack: capture_stack(),
        }
    }

    pub fn invariant(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        SummaryError::InternalInvariant {
            path: path.into(),
            detail: detail.into(),
            stack: capture_stack(),
        }
    }

    /// Path of the compilation unit this failure belongs to
    pub fn path(&self) -> &Path {
        match self {
            SummaryError::Parse { path, .. }
            | SummaryError::Filesystem { path, .. }
            | SummaryError::InternalInvariant { path, .. } => path,
        }
    }

    /// Invariant violations are programmer errors and stop the run under any policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SummaryError::InternalInvariant { .. })
    }

    /// 1-based line and column of a parse failure, when known
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            SummaryError::Parse {
                line: Some(line),
                column: Some(column),
                ..
            } => Some((*line, *column)),
            _ => None,
        }
    }

    /// Backtrace captured where the failure was raised, if capture was enabled
    pub fn stack_context(&self) -> Option<&str> {
        match self {
            SummaryError::Parse { stack, .. }
            | SummaryError::Filesystem { stack, .. }
            | SummaryError::InternalInvariant { stack, .. } => stack.as_deref(),
        }
    }
}

/// Honors RUST_BACKTRACE / RUST_LIB_BACKTRACE; returns None when capture is disabled.
fn capture_stack() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}
