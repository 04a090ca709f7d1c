//! File scanner for discovering documents to analyze

use crate::config::DEFAULT_NAME_FILTER;
use crate::corpus::DocumentId;
use crate::error::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Rule deciding which file names are documents
#[derive(Debug, Clone)]
pub enum Selection {
    /// File name contains the substring
    Contains(String),
    /// File name matches the glob pattern
    Glob(Pattern),
}

impl Selection {
    /// Build a glob selection
    pub fn glob(pattern: &str) -> Result<Self> {
        Ok(Selection::Glob(Pattern::new(pattern)?))
    }

    /// Check a file name against the rule
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Selection::Contains(needle) => file_name.contains(needle.as_str()),
            Selection::Glob(pattern) => pattern.matches_with(
                file_name,
                glob::MatchOptions {
                    case_sensitive: false,
                    require_literal_separator: false,
                    require_literal_leading_dot: false,
                },
            ),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Contains(DEFAULT_NAME_FILTER.to_string())
    }
}

/// Lists the documents in a directory
pub struct Scanner {
    /// Directory to scan
    root: PathBuf,
    /// File name rule
    selection: Selection,
    /// Descend into subdirectories
    recursive: bool,
}

impl Scanner {
    /// Create a scanner over `root`
    pub fn new<P: AsRef<Path>>(root: P, selection: Selection) -> Self {
        Scanner {
            root: root.as_ref().to_path_buf(),
            selection,
            recursive: false,
        }
    }

    /// Also scan subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// List matching files, sorted by path
    ///
    /// Only regular files whose name satisfies the selection are returned. A
    /// missing or unreadable root is an error. An entry that cannot be
    /// inspected (such as a dangling symlink) is still listed when its name is
    /// selected, so the failure surfaces when the document is read; other
    /// unreadable entries are skipped with a warning.
    pub fn scan(&self) -> Result<Vec<DocumentId>> {
        if !self.root.is_dir() {
            return Err(Error::Scan(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter();

        let mut ids = Vec::new();
        loop {
            let entry = match walker.next() {
                None => break,
                Some(Ok(entry)) => entry,
                Some(Err(e)) if e.depth() == 0 => return Err(e.into()),
                Some(Err(e)) => {
                    // A selected name stays in the list so reading it fails
                    // the run instead of shrinking the corpus
                    let listed = e.path().filter(|p| {
                        p.file_name()
                            .is_some_and(|n| self.selection.matches(&n.to_string_lossy()))
                    });
                    if let Some(path) = listed {
                        tracing::warn!("Listing unreadable entry: {}", e);
                        ids.push(DocumentId::from(path));
                    } else {
                        tracing::warn!("Skipping unreadable entry: {}", e);
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.selection.matches(&name) {
                ids.push(DocumentId::from(entry.path()));
            }
        }

        ids.sort();
        tracing::debug!(
            "Scanned {}: {} matching files",
            self.root.display(),
            ids.len()
        );
        Ok(ids)
    }
}
