use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use accessorgen::application::{emit_bundle, EmitOptions, EmitUseCase};
use accessorgen::infrastructure::LocalFs;
use accessorgen::Target;

use super::{load_inputs, Globals};
use crate::ui::json;

pub fn cmd_emit(
    globals: &Globals,
    schema: &Path,
    target: Option<Target>,
    out: Option<PathBuf>,
    stdout: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let inputs = load_inputs(globals, schema, target)?;

    if stdout {
        let files = emit_bundle(&inputs.bundle, &inputs.emit_config)?;
        for (i, file) in files.iter().enumerate() {
            if globals.json {
                json::emit(serde_json::json!({
                    "event": "source",
                    "entity": file.entity,
                    "path": file.path.display().to_string(),
                    "source": file.source.as_str(),
                }))?;
            } else {
                if i > 0 {
                    println!();
                }
                print!("{}", file.source);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let out_dir = inputs.out_dir(out);
    let options = EmitOptions::new(&out_dir).with_dry_run(dry_run);
    let report = EmitUseCase::new(LocalFs::new()).execute(
        &inputs.bundle,
        &inputs.emit_config,
        &options,
    )?;

    if globals.json {
        for file in &report.files {
            json::emit(serde_json::json!({
                "event": "emitted",
                "entity": file.entity,
                "path": out_dir.join(&file.path).display().to_string(),
                "written": !dry_run,
            }))?;
        }
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "emit",
            "target": inputs.emit_config.target.as_str(),
            "files": report.files.len(),
            "written": report.written.len(),
            "dry_run": dry_run,
        }))?;
    } else {
        let verb = if dry_run { "Would write" } else { "Wrote" };
        for file in &report.files {
            println!("{} {}", verb, out_dir.join(&file.path).display());
        }
        println!(
            "{} {} {} file(s)",
            inputs.emit_config.target.display_name(),
            if dry_run { "dry run:" } else { "emitted" },
            report.files.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}
