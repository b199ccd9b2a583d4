//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, Target};
use crate::error::{EmitError, EmitResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "accessorgen.toml";

/// Directory below the platform config dir holding `config.toml`
pub const USER_CONFIG_DIR: &str = "accessorgen";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmitResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.source = Some(path.to_path_buf());

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key, CONFIG_KEYS),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User config path, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join("config.toml"))
}

/// Merge user config, project config and an explicit file, then env overrides
///
/// Missing layers are skipped; a layer that exists but fails to parse is an
/// error.
pub fn load_layered(
    project_root: Option<&Path>,
    explicit: Option<&Path>,
) -> EmitResult<(Config, Vec<ConfigWarning>)> {
    let mut layers: Vec<PathBuf> = Vec::new();

    if let Some(user_config) = user_config_path() {
        layers.push(user_config);
    }
    if let Some(root) = project_root {
        layers.push(root.join(PROJECT_CONFIG_FILE));
    }

    let mut config = Config::default();
    let mut warnings = Vec::new();

    for layer in layers.iter().filter(|p| p.is_file()) {
        tracing::debug!(path = %layer.display(), "loading config layer");
        let (loaded, layer_warnings) = load_with_warnings(layer)?;
        config = config.merge(loaded);
        warnings.extend(layer_warnings);
    }

    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading explicit config");
        let (loaded, layer_warnings) = load_with_warnings(path)?;
        config = config.merge(loaded);
        warnings.extend(layer_warnings);
    }

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ACCESSORGEN_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ACCESSORGEN_TARGET
    if let Ok(target) = std::env::var("ACCESSORGEN_TARGET") {
        match target.parse::<Target>() {
            Ok(target) => config.target = Some(target),
            Err(e) => tracing::warn!("ignoring ACCESSORGEN_TARGET: {}", e),
        }
    }

    // ACCESSORGEN_INDENT (a number means that many spaces)
    if let Ok(indent) = std::env::var("ACCESSORGEN_INDENT") {
        config.indent = Some(match indent.trim().parse::<usize>() {
            Ok(width) => " ".repeat(width),
            Err(_) => indent,
        });
    }

    config
}

const CONFIG_KEYS: &[&str] = &[
    "target",
    "indent",
    "header",
    "naming",
    "setter_prefix",
    "getter_prefix",
    "boolean_getter_prefix",
    "types",
    "output",
    "dir",
];

pub(crate) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
