use std::io::{self, Write};

use accessorgen::config::ConfigWarning;
use accessorgen::EmitError;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn warning_event(warning: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
        "message": warning.to_string(),
    })
}

pub fn error_event(error: &EmitError) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "kind": error.kind().as_str(),
        "message": error.to_string(),
    })
}
