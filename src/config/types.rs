//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::naming::NamingRule;
use crate::domain::value_objects::{ConfigWarning, SemanticTypeKind, Target, TypeMapping};
use crate::error::{EmitError, EmitResult};
use crate::infrastructure::emitters::get_emitter;

use super::loader;

/// Fully resolved input of one `emit` call besides the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    pub target: Target,
    /// Semantic type kind to target type token
    pub type_mapping: TypeMapping,
    /// Setter/getter derivation
    pub naming_rule: NamingRule,
    /// Opaque text prepended verbatim to every emitted file
    pub header_text: Option<String>,
    /// Whitespace unit for one nesting level
    pub indent: String,
}

impl EmitConfig {
    /// Config with an explicit type table and default naming and layout
    pub fn new(target: Target, type_mapping: TypeMapping) -> Self {
        Self {
            target,
            type_mapping,
            naming_rule: NamingRule::default(),
            header_text: None,
            indent: "    ".to_string(),
        }
    }

    /// Built-in defaults of the target's emitter
    pub fn for_target(target: Target) -> Self {
        let emitter = get_emitter(target);
        Self {
            target,
            type_mapping: emitter.default_type_mapping(),
            naming_rule: emitter.default_naming_rule(),
            header_text: None,
            indent: emitter.default_indent().to_string(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header_text = Some(header.into());
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_naming_rule(mut self, rule: NamingRule) -> Self {
        self.naming_rule = rule;
        self
    }

    pub fn with_type(mut self, kind: SemanticTypeKind, token: impl Into<String>) -> Self {
        self.type_mapping.insert(kind, token);
        self
    }
}

/// Naming overrides; unset prefixes keep the target default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default)]
    pub setter_prefix: Option<String>,

    #[serde(default)]
    pub getter_prefix: Option<String>,

    #[serde(default)]
    pub boolean_getter_prefix: Option<String>,
}

/// Output location configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for emitted files
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Contents of an `accessorgen.toml` file
///
/// Every setting is optional so layers can be merged; `resolve` fills the
/// gaps from the target's built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: Option<Target>,

    #[serde(default)]
    pub indent: Option<String>,

    #[serde(default)]
    pub header: Option<String>,

    #[serde(default)]
    pub naming: NamingConfig,

    /// Type table overrides keyed by semantic type kind
    #[serde(default)]
    pub types: BTreeMap<String, String>,

    #[serde(default)]
    pub output: OutputConfig,

    /// File this config was read from, for error messages
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmitResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Merge user config, project config and an explicit file, then env overrides
    pub fn load_layered(
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> EmitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, explicit)
    }

    /// Apply environment variable overrides (ACCESSORGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Overlay `other` on top of `self`; settings present in `other` win
    pub fn merge(mut self, other: Config) -> Self {
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.indent.is_some() {
            self.indent = other.indent;
        }
        if other.header.is_some() {
            self.header = other.header;
        }
        if other.naming.setter_prefix.is_some() {
            self.naming.setter_prefix = other.naming.setter_prefix;
        }
        if other.naming.getter_prefix.is_some() {
            self.naming.getter_prefix = other.naming.getter_prefix;
        }
        if other.naming.boolean_getter_prefix.is_some() {
            self.naming.boolean_getter_prefix = other.naming.boolean_getter_prefix;
        }
        self.types.extend(other.types);
        if other.output.dir.is_some() {
            self.output.dir = other.output.dir;
        }
        if other.source.is_some() {
            self.source = other.source;
        }
        self
    }

    /// Target from config, or the default target
    pub fn target(&self) -> Target {
        self.target.unwrap_or_default()
    }

    fn invalid(&self, message: String) -> EmitError {
        EmitError::InvalidConfig {
            file: self
                .source
                .clone()
                .unwrap_or_else(|| PathBuf::from("<config>")),
            message,
        }
    }

    /// Produce the `EmitConfig` for `target_override` or the configured target
    pub fn resolve(&self, target_override: Option<Target>) -> EmitResult<EmitConfig> {
        let target = target_override.unwrap_or_else(|| self.target());
        let mut config = EmitConfig::for_target(target);

        for (key, token) in &self.types {
            let kind = key
                .parse::<SemanticTypeKind>()
                .map_err(|e| self.invalid(e))?;
            if token.trim().is_empty() {
                return Err(self.invalid(format!("type token for '{}' is empty", key)));
            }
            config.type_mapping.insert(kind, token.trim());
        }

        if let Some(prefix) = &self.naming.setter_prefix {
            config.naming_rule.setter_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.naming.getter_prefix {
            config.naming_rule.getter_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.naming.boolean_getter_prefix {
            config.naming_rule.boolean_getter_prefix = Some(prefix.clone());
        }
        config.naming_rule.validate()?;

        if let Some(indent) = &self.indent {
            if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
                return Err(self.invalid(format!(
                    "indent must be spaces or tabs, got {:?}",
                    indent
                )));
            }
            config.indent = indent.clone();
        }

        config.header_text = self.header.clone().filter(|h| !h.trim().is_empty());

        Ok(config)
    }
}
