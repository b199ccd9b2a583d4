use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use accessorgen::{check_bundle, Target};

use super::{load_inputs, Globals};
use crate::ui::json;

pub fn cmd_check(globals: &Globals, schema: &Path, target: Option<Target>) -> Result<ExitCode> {
    let inputs = load_inputs(globals, schema, target)?;
    let report = check_bundle(&inputs.bundle, &inputs.emit_config);

    if globals.json {
        for violation in &report.violations {
            json::emit(json::error_event(violation))?;
        }
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "target": inputs.emit_config.target.as_str(),
            "entities": report.entities,
            "violations": report.violations.len(),
        }))?;
    } else {
        for violation in &report.violations {
            eprintln!("error: {}", violation);
        }
        if report.is_ok() {
            println!(
                "{} entities OK for {}",
                report.entities,
                inputs.emit_config.target.display_name()
            );
        } else {
            println!(
                "{} violation(s) in {} entities",
                report.violations.len(),
                report.entities
            );
        }
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
