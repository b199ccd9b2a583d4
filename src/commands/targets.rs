use std::process::ExitCode;

use anyhow::Result;

use accessorgen::all_emitters;

use super::Globals;
use crate::ui::json;

pub fn cmd_targets(globals: &Globals) -> Result<ExitCode> {
    for emitter in all_emitters() {
        let mapping = emitter.default_type_mapping();

        if globals.json {
            let types: serde_json::Map<String, serde_json::Value> = mapping
                .iter()
                .map(|(kind, token)| (kind.to_string(), token.into()))
                .collect();
            json::emit(serde_json::json!({
                "event": "target",
                "target": emitter.target().as_str(),
                "name": emitter.target().display_name(),
                "extension": emitter.file_extension(),
                "fluent_style": emitter.fluent_style().description(),
                "types": types,
            }))?;
        } else {
            println!(
                "{} ({}, .{})",
                emitter.target().display_name(),
                emitter.target().as_str(),
                emitter.file_extension()
            );
            println!("  {}", emitter.fluent_style().description());
            for (kind, token) in mapping.iter() {
                println!("  {:<24} {}", kind.to_string(), token);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
