//! Schema file loading
//!
//! A schema file holds either a bundle (`package` plus `[[entities]]`) or a
//! single entity at the top level. TOML, YAML and JSON are accepted; the
//! format is picked from the file extension.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value as Document;

use crate::config::{find_line_number, suggest_key, ConfigWarning};
use crate::domain::entities::{EntitySchema, SchemaBundle};
use crate::domain::ports::FileSystem;
use crate::error::{EmitError, EmitResult};

const SCHEMA_KEYS: &[&str] = &[
    "package",
    "entities",
    "name",
    "description",
    "fields",
    "type",
    "entity",
    "nullable",
    "list",
];

/// Serialization format of a schema file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Toml,
    Yaml,
    Json,
}

impl SchemaFormat {
    /// Format for `path`'s extension, if supported
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(SchemaFormat::Toml),
            "yaml" | "yml" => Some(SchemaFormat::Yaml),
            "json" => Some(SchemaFormat::Json),
            _ => None,
        }
    }
}

/// Decode schema text into a bundle, collecting unknown-key warnings
///
/// `file` is only used for error messages and warnings.
pub fn parse_schema(
    content: &str,
    format: SchemaFormat,
    file: &Path,
) -> EmitResult<(SchemaBundle, Vec<ConfigWarning>)> {
    let invalid = |message: String| EmitError::InvalidSchemaFile {
        file: file.to_path_buf(),
        message,
    };

    let document: Document = match format {
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        SchemaFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?,
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    let single_entity = document
        .as_object()
        .is_some_and(|map| map.contains_key("name") && !map.contains_key("entities"));

    let mut unknown_paths = Vec::new();
    let mut bundle = if single_entity {
        let entity: EntitySchema =
            decode(document, &mut unknown_paths).map_err(|e| invalid(e.to_string()))?;
        SchemaBundle::default().with_entity(entity)
    } else {
        decode::<SchemaBundle>(document, &mut unknown_paths).map_err(|e| invalid(e.to_string()))?
    };
    bundle.apply_package();

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, SCHEMA_KEYS),
                key,
                file: file.to_path_buf(),
            }
        })
        .collect();

    Ok((bundle, warnings))
}

fn decode<T: DeserializeOwned>(
    document: Document,
    unknown_paths: &mut Vec<String>,
) -> Result<T, serde_json::Error> {
    serde_ignored::deserialize(document, |p| unknown_paths.push(p.to_string()))
}

/// Read and decode a schema file through `fs`
pub fn load_schema(
    fs: &dyn FileSystem,
    path: &Path,
) -> EmitResult<(SchemaBundle, Vec<ConfigWarning>)> {
    let format = SchemaFormat::from_path(path).ok_or_else(|| EmitError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs.read(path)?;

    let (bundle, warnings) = parse_schema(&content, format, path)?;
    tracing::debug!(
        path = %path.display(),
        entities = bundle.entities.len(),
        warnings = warnings.len(),
        "loaded schema"
    );
    Ok((bundle, warnings))
}
