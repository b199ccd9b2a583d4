//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal warning raised while decoding a config or schema file.
///
/// Unknown keys do not fail loading; they are collected and shown to the
/// user together with a spelling suggestion when one is close enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The file that contained it
    pub file: PathBuf,
    /// The line number (1-indexed) if found
    pub line: Option<usize>,
    /// A known key within edit distance 2
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
