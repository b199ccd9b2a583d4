//! TargetEmitter port - renders resolved classes in one target language
//!
//! The emitter service does all validation and name/type resolution, then
//! hands a `ResolvedClass` to the emitter for the configured target.
//! Implementations are pure formatters: they never fail and never do I/O.

use std::path::PathBuf;

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, ResolvedClass};
use crate::domain::services::naming::NamingRule;
use crate::domain::value_objects::{Target, TypeMapping};
use crate::error::IdentifierRole;

/// How a target realizes the "setter returns the receiver" contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluentStyle {
    /// Setter returns the instance it mutated (`return this;`)
    ReturnsSelf,
    /// Setters live on a separate builder object that returns itself
    Builder,
    /// Setter returns nothing; chaining goes through a separate helper
    Detached,
}

impl FluentStyle {
    pub fn description(&self) -> &'static str {
        match self {
            FluentStyle::ReturnsSelf => "setters return the mutated instance",
            FluentStyle::Builder => "setters live on a builder that returns itself",
            FluentStyle::Detached => "setters return nothing; chain through a helper",
        }
    }
}

/// Accessor class emitter for one target language
pub trait TargetEmitter: Send + Sync {
    /// Target this emitter renders
    fn target(&self) -> Target;

    /// Extension of emitted files, without the dot
    fn file_extension(&self) -> &'static str;

    /// Built-in semantic type table
    fn default_type_mapping(&self) -> TypeMapping;

    /// Built-in accessor naming rule
    fn default_naming_rule(&self) -> NamingRule {
        NamingRule::default()
    }

    /// Indentation unit used when the config does not set one
    fn default_indent(&self) -> &'static str {
        "    "
    }

    fn fluent_style(&self) -> FluentStyle {
        FluentStyle::ReturnsSelf
    }

    /// Whether `word` is reserved for an identifier in `role`
    fn is_reserved(&self, word: &str, role: IdentifierRole) -> bool;

    /// Render a validated class
    fn render(&self, class: &ResolvedClass<'_>, config: &EmitConfig) -> String;

    /// Conventional location of the emitted file, relative to an output root
    fn relative_path(&self, schema: &EntitySchema) -> PathBuf;
}
