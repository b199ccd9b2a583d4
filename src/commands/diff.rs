use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use accessorgen::application::{ChangeType, DiffUseCase};
use accessorgen::infrastructure::LocalFs;
use accessorgen::Target;

use super::{load_inputs, Globals};
use crate::ui::json;

pub fn cmd_diff(
    globals: &Globals,
    schema: &Path,
    target: Option<Target>,
    out: Option<PathBuf>,
) -> Result<ExitCode> {
    let inputs = load_inputs(globals, schema, target)?;
    let out_dir = inputs.out_dir(out);
    let result = DiffUseCase::new(LocalFs::new()).execute(
        &inputs.bundle,
        &inputs.emit_config,
        &out_dir,
    )?;

    if globals.json {
        for entry in &result.entries {
            json::emit(serde_json::json!({
                "event": "diff",
                "entity": entry.entity,
                "path": out_dir.join(&entry.path).display().to_string(),
                "change": entry.change_type.as_str(),
                "diff": entry.diff,
            }))?;
        }
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "diff",
            "create": result.count(ChangeType::Create),
            "update": result.count(ChangeType::Update),
            "unchanged": result.count(ChangeType::Unchanged),
        }))?;
    } else {
        for entry in &result.entries {
            if entry.change_type != ChangeType::Unchanged {
                print!("{}", entry.diff);
            }
        }
        println!(
            "{} to create, {} to update, {} unchanged",
            result.count(ChangeType::Create),
            result.count(ChangeType::Update),
            result.count(ChangeType::Unchanged)
        );
    }

    Ok(ExitCode::SUCCESS)
}
