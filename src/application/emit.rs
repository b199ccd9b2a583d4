//! Emit Use Case
//!
//! Orchestrates the emit flow:
//! 1. Validate every entity of a bundle
//! 2. Render each entity with the configured target's emitter
//! 3. Write the sources below the output directory (unless dry run)
//!
//! Nothing is written unless the whole bundle emits cleanly.

use std::path::{Path, PathBuf};

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, SchemaBundle, SourceText};
use crate::domain::ports::FileSystem;
use crate::domain::services::{emit_with, validate_bundle};
use crate::error::EmitResult;
use crate::infrastructure::emitters::get_emitter;

/// Emit one accessor class for `config.target`
///
/// Output is a pure function of `(schema, config)`; on error no text is
/// produced.
pub fn emit(schema: &EntitySchema, config: &EmitConfig) -> EmitResult<SourceText> {
    let emitter = get_emitter(config.target);
    emit_with(emitter.as_ref(), schema, config)
}

/// One rendered entity and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub entity: String,
    /// Location relative to the output directory
    pub path: PathBuf,
    pub source: SourceText,
}

/// Emit every entity of `bundle`, in bundle order
///
/// Fails with the first violation across the whole bundle before rendering
/// anything.
pub fn emit_bundle(bundle: &SchemaBundle, config: &EmitConfig) -> EmitResult<Vec<EmittedFile>> {
    let emitter = get_emitter(config.target);

    if let Some(first) = validate_bundle(emitter.as_ref(), bundle, config)
        .into_iter()
        .next()
    {
        return Err(first);
    }

    bundle
        .entities
        .iter()
        .map(|schema| {
            Ok(EmittedFile {
                entity: schema.name.clone(),
                path: emitter.relative_path(schema),
                source: emit_with(emitter.as_ref(), schema, config)?,
            })
        })
        .collect()
}

/// Options for the emit operation
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Root directory for emitted files
    pub out_dir: PathBuf,
    /// Render only, write nothing
    pub dry_run: bool,
}

impl EmitOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of the emit operation
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    pub files: Vec<EmittedFile>,
    /// Absolute or out-dir-relative paths actually written
    pub written: Vec<PathBuf>,
}

/// Emit Use Case
pub struct EmitUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> EmitUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Emit `bundle` and persist the sources below `options.out_dir`
    pub fn execute(
        &self,
        bundle: &SchemaBundle,
        config: &EmitConfig,
        options: &EmitOptions,
    ) -> EmitResult<EmitReport> {
        let files = emit_bundle(bundle, config)?;
        let mut report = EmitReport::default();

        if !options.dry_run {
            for file in &files {
                let destination = join_out(&options.out_dir, &file.path);
                self.file_system
                    .write(&destination, file.source.as_str())?;
                tracing::info!(entity = %file.entity, path = %destination.display(), "emitted");
                report.written.push(destination);
            }
        }

        report.files = files;
        Ok(report)
    }
}

pub(crate) fn join_out(out_dir: &Path, relative: &Path) -> PathBuf {
    if out_dir.as_os_str().is_empty() {
        relative.to_path_buf()
    } else {
        out_dir.join(relative)
    }
}
