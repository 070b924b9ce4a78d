//! Extension Scanner
//!
//! Depth-first search for the first file whose name ends with a disallowed
//! suffix. Stops at the first hit: callers only need to know that one exists.
//!
//! Symbolic links are never followed. A link is a leaf and is matched by its
//! own name, so cyclic links cannot cause unbounded recursion. Entries are
//! visited in file-name order so "first" is stable across platforms.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};
use crate::report::{Finding, Report};

/// Suffixes that must not appear in a JSX-only client
pub const TYPESCRIPT_SUFFIXES: [&str; 2] = [".ts", ".tsx"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(PathBuf),
    Clean,
}

#[derive(Clone, Debug)]
pub struct ExtensionScanner {
    suffixes: Vec<String>,
}

impl ExtensionScanner {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(TYPESCRIPT_SUFFIXES)
    }

    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// First matching file under `root`, or [`ScanOutcome::Clean`].
    ///
    /// A missing root is an error, never `Clean`.
    pub fn first_match(&self, root: &Path) -> Result<ScanOutcome> {
        let meta = fs::metadata(root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CheckError::RootNotFound(root.to_path_buf()),
            _ => CheckError::io(root, e),
        })?;
        if !meta.is_dir() {
            return Err(CheckError::NotADirectory(root.to_path_buf()));
        }

        Ok(self
            .walk(root)?
            .map_or(ScanOutcome::Clean, ScanOutcome::Found))
    }

    fn walk(&self, dir: &Path) -> Result<Option<PathBuf>> {
        tracing::trace!(dir = %dir.display(), "scanning");

        let mut entries = fs::read_dir(dir)
            .map_err(|e| CheckError::io(dir, e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| CheckError::io(dir, e))?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            // file_type() does not traverse symlinks
            let file_type = entry.file_type().map_err(|e| CheckError::io(&path, e))?;

            if file_type.is_dir() {
                if let Some(found) = self.walk(&path)? {
                    return Ok(Some(found));
                }
            } else if self.matches(&entry.file_name()) {
                tracing::debug!(path = %path.display(), "disallowed file");
                return Ok(Some(path));
            }
        }
        Ok(None)
    }
}

/// `check-entry`: the client must not contain TypeScript sources.
pub fn check_no_typescript(client_root: &Path) -> Report {
    match ExtensionScanner::typescript().first_match(client_root) {
        Ok(ScanOutcome::Clean) => {
            Report::new().with(Finding::ok("OK — no .ts/.tsx files found in client"))
        }
        Ok(ScanOutcome::Found(path)) => Report::new()
            .with(Finding::fatal(
                1,
                format!("Found TypeScript file in client: {}", path.display()),
            ))
            .with(Finding::fatal(
                1,
                "Either rename to .js/.jsx or configure TypeScript properly \
                 (install typescript and adjust Vite).",
            )),
        Err(e) => Report::new().with(Finding::fatal(1, e.to_string())),
    }
}
