//! Source discovery under a scan root.
//!
//! Traversal is depth-first; inside each directory files come before
//! subdirectories and both are sorted by name, so the order is stable across
//! runs and platforms.

use crate::error::SummaryError;
use crate::language;
use crate::utils::ignore::{is_ignored_by_pattern, load_ignore_patterns};
use crate::utils::paths::to_relative_unix_style;
use anyhow::{bail, Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// A discovered compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Unix-style path relative to the scan root
    pub relative_path: String,
    /// Unix-style directory relative to the scan root (empty for the root)
    pub relative_dir: String,
}

impl SourceFile {
    fn new(path: PathBuf, relative_path: String) -> Self {
        let relative_dir = match relative_path.rfind('/') {
            Some(idx) => relative_path[..idx].to_string(),
            None => String::new(),
        };
        Self {
            path,
            relative_path,
            relative_dir,
        }
    }
}

/// One discovery slot: a file to summarize, or a path that could not be read
pub type Discovered = std::result::Result<SourceFile, SummaryError>;

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    /// Walker for `root`, honoring `.outlineignore` when `root` is a directory
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            bail!("scan root '{}' does not exist", root.display());
        }
        let ignore_patterns = if root.is_dir() {
            load_ignore_patterns(&root)?
        } else {
            Vec::new()
        };
        Ok(Self {
            root,
            ignore_patterns,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover every summarizable file in traversal order
    ///
    /// Unreadable directories and unusable file paths show up as `Err` slots at
    /// the position they were met, so callers can report them alongside parse failures.
    pub fn discover(&self) -> Result<Vec<Discovered>> {
        if self.root.is_file() {
            return self.discover_single_file();
        }

        let mut discovered = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(|entry| self.is_visible(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop"));
                    debug!("Unreadable entry {}: {}", path.display(), source);
                    discovered.push(Err(SummaryError::filesystem(path, source)));
                    continue;
                }
            };

            // Links are not followed during the walk; a link to a regular file still counts
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file || !language::is_source_file(entry.path()) {
                continue;
            }

            match to_relative_unix_style(entry.path(), &self.root) {
                Ok(relative_path) => discovered.push(Ok(SourceFile::new(
                    entry.path().to_path_buf(),
                    relative_path,
                ))),
                Err(err) => {
                    debug!("Unusable path {}: {:#}", entry.path().display(), err);
                    discovered.push(Err(SummaryError::filesystem(
                        entry.path(),
                        io::Error::new(io::ErrorKind::InvalidData, format!("{err:#}")),
                    )));
                }
            }
        }

        info!(
            "Discovered {} source files under {}",
            discovered.len(),
            self.root.display()
        );
        Ok(discovered)
    }

    fn discover_single_file(&self) -> Result<Vec<Discovered>> {
        let is_java = self
            .root
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language::detect_language_from_extension)
            .is_some();
        if !is_java {
            bail!("'{}' is not a Java source file", self.root.display());
        }

        let file_name = self
            .root
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Invalid file name '{}'", self.root.display()))?
            .to_string();
        Ok(vec![Ok(SourceFile::new(self.root.clone(), file_name))])
    }

    fn is_visible(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
        {
            return false;
        }
        if self.ignore_patterns.is_empty() {
            return true;
        }
        match to_relative_unix_style(entry.path(), &self.root) {
            Ok(relative) => {
                let ignored = is_ignored_by_pattern(&relative, &self.ignore_patterns);
                if ignored {
                    debug!("Ignoring {}", relative);
                }
                !ignored
            }
            Err(_) => true,
        }
    }
}
