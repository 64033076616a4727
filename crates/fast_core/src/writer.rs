//! Project writer.
//!
//! Writes a materialized file set into a destination directory. One failing
//! file never aborts the rest: a partially written scaffold is still useful,
//! and the report tells the user exactly which files need retrying.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use fast_templates::FileSet;

/// Outcome of a single file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    Failed { reason: String },
}

/// Per-path outcome entry.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Relative path within the project directory.
    pub path: String,
    pub status: FileStatus,
}

/// Report of a whole write pass: one entry per file, in path order.
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    pub entries: Vec<FileOutcome>,
}

impl WriteReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn written(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == FileStatus::Written)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.written()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0
    }

    /// Failed entries with their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|e| match &e.status {
            FileStatus::Failed { reason } => Some((e.path.as_str(), reason.as_str())),
            FileStatus::Written => None,
        })
    }
}

/// Stateless writer for materialized file sets.
pub struct ProjectWriter;

impl ProjectWriter {
    /// Write every file of the set under `destination_root`.
    ///
    /// The root is created if absent (existing directories are reused, never
    /// replaced); failure to create it aborts with [`CoreError::ProjectDir`].
    /// Existing files at target paths are overwritten. Per-file errors are
    /// recorded in the report and do not stop the remaining writes.
    pub fn write(destination_root: &Path, files: &FileSet) -> CoreResult<WriteReport> {
        fs::create_dir_all(destination_root).map_err(|source| CoreError::ProjectDir {
            path: destination_root.to_path_buf(),
            source,
        })?;

        let mut report = WriteReport::default();
        for (relative, content) in files {
            let target = join_relative(destination_root, relative);
            let status = match Self::write_one(&target, content) {
                Ok(()) => {
                    debug!("Created: {}", relative);
                    FileStatus::Written
                }
                Err(e) => {
                    warn!("Failed to write {}: {}", relative, e);
                    FileStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.entries.push(FileOutcome {
                path: relative.clone(),
                status,
            });
        }

        debug!(
            "Wrote {}/{} files to {:?}",
            report.written(),
            report.total(),
            destination_root
        );
        Ok(report)
    }

    fn write_one(target: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)
    }
}

/// Join a slash-separated relative key onto the destination root using host
/// path components.
fn join_relative(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for part in relative.split('/') {
        path.push(part);
    }
    path
}
