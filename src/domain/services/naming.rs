//! Accessor name derivation
//!
//! `loginCount` becomes `setLoginCount` / `getLoginCount` under the default
//! rule. Overrides only swap prefixes; every name still goes through
//! [`accessor_name`].

use serde::{Deserialize, Serialize};

use crate::domain::entities::FieldDescriptor;
use crate::domain::value_objects::{is_identifier, SemanticTypeKind};
use crate::error::{EmitError, EmitResult};

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `prefix` + capitalized `name`; an empty prefix keeps `name` as is
pub fn accessor_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{}", prefix, capitalize_first(name))
    }
}

/// Setter/getter naming rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRule {
    pub setter_prefix: String,
    pub getter_prefix: String,
    /// Getter prefix for scalar boolean fields (e.g. `is`); falls back to
    /// `getter_prefix` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_getter_prefix: Option<String>,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            setter_prefix: "set".to_string(),
            getter_prefix: "get".to_string(),
            boolean_getter_prefix: None,
        }
    }
}

impl NamingRule {
    pub fn setter_name(&self, field: &FieldDescriptor) -> String {
        accessor_name(&self.setter_prefix, &field.name)
    }

    pub fn getter_name(&self, field: &FieldDescriptor) -> String {
        let is_boolean =
            !field.list && field.semantic_type.kind() == SemanticTypeKind::Boolean;
        let prefix = match &self.boolean_getter_prefix {
            Some(prefix) if is_boolean => prefix,
            _ => &self.getter_prefix,
        };
        accessor_name(prefix, &field.name)
    }

    /// Prefixes must be empty or identifier-shaped
    pub fn validate(&self) -> EmitResult<()> {
        let prefixes = [
            Some(&self.setter_prefix),
            Some(&self.getter_prefix),
            self.boolean_getter_prefix.as_ref(),
        ];
        for prefix in prefixes.into_iter().flatten() {
            if !prefix.is_empty() && !is_identifier(prefix) {
                return Err(EmitError::InvalidNamingRule {
                    prefix: prefix.clone(),
                });
            }
        }
        Ok(())
    }
}
