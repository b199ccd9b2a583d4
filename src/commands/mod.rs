//! Command handlers

pub mod check;
pub mod diff;
pub mod emit;
pub mod targets;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use accessorgen::config::{Config, ConfigWarning};
use accessorgen::infrastructure::LocalFs;
use accessorgen::{load_schema, EmitConfig, SchemaBundle, Target};

use crate::ui;

/// Flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Everything a schema command needs
pub struct Inputs {
    pub bundle: SchemaBundle,
    pub emit_config: EmitConfig,
    pub config: Config,
}

impl Inputs {
    /// `--out`, then `[output] dir`, then the current directory
    pub fn out_dir(&self, out: Option<PathBuf>) -> PathBuf {
        out.or_else(|| self.config.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load layered config and the schema file, reporting warnings
pub fn load_inputs(globals: &Globals, schema: &Path, target: Option<Target>) -> Result<Inputs> {
    let project_root = std::env::current_dir().context("cannot determine current directory")?;

    let (config, config_warnings) =
        Config::load_layered(Some(&project_root), globals.config.as_deref())?;
    report_warnings(globals, &config_warnings)?;

    let emit_config = config.resolve(target)?;

    let (bundle, schema_warnings) = load_schema(&LocalFs::new(), schema)
        .with_context(|| format!("failed to load schema {}", schema.display()))?;
    report_warnings(globals, &schema_warnings)?;

    tracing::info!(
        schema = %schema.display(),
        target = %emit_config.target,
        entities = bundle.entities.len(),
        "inputs loaded"
    );

    Ok(Inputs {
        bundle,
        emit_config,
        config,
    })
}

fn report_warnings(globals: &Globals, warnings: &[ConfigWarning]) -> Result<()> {
    write_warnings(&mut io::stdout().lock(), globals.json, warnings)
}

/// NDJSON warnings go to `out`; text warnings go to stderr
fn write_warnings(out: &mut impl Write, json: bool, warnings: &[ConfigWarning]) -> Result<()> {
    for warning in warnings {
        if json {
            ui::json::write_event(out, &ui::json::warning_event(warning))?;
        } else {
            eprintln!("warning: {}", warning);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn warning() -> ConfigWarning {
        ConfigWarning {
            key: "nulable".to_string(),
            file: PathBuf::from("schema.toml"),
            line: Some(6),
            suggestion: Some("nullable".to_string()),
        }
    }

    #[test]
    fn json_warnings_are_written_one_per_line() {
        let mut out = Vec::new();
        write_warnings(&mut out, true, &[warning(), warning()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\"suggestion\":\"nullable\""));
    }

    #[test]
    fn json_warning_write_failure_is_reported() {
        assert!(write_warnings(&mut ClosedPipe, true, &[warning()]).is_err());
    }

    #[test]
    fn text_warnings_do_not_touch_stdout() {
        assert!(write_warnings(&mut ClosedPipe, false, &[warning()]).is_ok());
    }
}
