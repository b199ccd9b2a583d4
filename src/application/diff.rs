//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Emit the bundle in memory
//! 2. Compare each source with the file currently on disk
//! 3. Return what would change
//!
//! This is essentially a dry-run of the emit use case.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::config::EmitConfig;
use crate::domain::entities::SchemaBundle;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::EmitResult;

use super::emit::{emit_bundle, join_out};

/// Type of change for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// New file would be created
    Create,
    /// Existing file would be updated
    Update,
    /// File already matches
    Unchanged,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Create => "create",
            ChangeType::Update => "update",
            ChangeType::Unchanged => "unchanged",
        }
    }
}

/// One emitted file compared with disk
#[derive(Debug, Clone)]
pub struct DiffEntry {
    pub entity: String,
    /// Path below the output directory
    pub path: PathBuf,
    pub change_type: ChangeType,
    /// Unified diff, empty when unchanged
    pub diff: String,
}

/// Result of the diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change_type != ChangeType::Unchanged)
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .count()
    }
}

/// Unified diff between `old` and `new`, labelled with `path`
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let path = path.display();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

/// Diff Use Case
pub struct DiffUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> DiffUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Compare what `emit` would write below `out_dir` with what is there
    pub fn execute(
        &self,
        bundle: &SchemaBundle,
        config: &EmitConfig,
        out_dir: &Path,
    ) -> EmitResult<DiffResult> {
        let mut result = DiffResult::default();

        for file in emit_bundle(bundle, config)? {
            let destination = join_out(out_dir, &file.path);
            let current = match self.file_system.read(&destination) {
                Ok(content) => Some(content),
                Err(FsError::NotFound(_)) => None,
                Err(e) => return Err(e.into()),
            };

            let new = file.source.as_str();
            let (change_type, diff) = match current.as_deref() {
                None => (ChangeType::Create, unified_diff(&file.path, "", new)),
                Some(old) if old == new => (ChangeType::Unchanged, String::new()),
                Some(old) => (ChangeType::Update, unified_diff(&file.path, old, new)),
            };

            result.entries.push(DiffEntry {
                entity: file.entity,
                path: file.path,
                change_type,
                diff,
            });
        }

        Ok(result)
    }
}
