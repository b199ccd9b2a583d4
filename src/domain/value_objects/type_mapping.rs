//! Type mapping table - semantic type kinds to target language type tokens

use std::collections::BTreeMap;

use super::semantic_type::{SemanticType, SemanticTypeKind};

/// Placeholder replaced by the referenced entity's name in a token
pub const ENTITY_PLACEHOLDER: &str = "{entity}";

/// Maps each semantic type kind to a target type token
///
/// Tokens may be qualified (`java.util.Date`); splitting them into imports
/// and short names is up to the target emitter. The token for
/// nested-entity-reference usually is just [`ENTITY_PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    entries: BTreeMap<SemanticTypeKind, String>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, kind: SemanticTypeKind, token: impl Into<String>) -> Self {
        self.insert(kind, token);
        self
    }

    pub fn insert(&mut self, kind: SemanticTypeKind, token: impl Into<String>) {
        self.entries.insert(kind, token.into());
    }

    pub fn remove(&mut self, kind: SemanticTypeKind) -> Option<String> {
        self.entries.remove(&kind)
    }

    pub fn get(&self, kind: SemanticTypeKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    pub fn contains(&self, kind: SemanticTypeKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Entries in kind order
    pub fn iter(&self) -> impl Iterator<Item = (SemanticTypeKind, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Overlay `other` on top of this table
    pub fn merge(&mut self, other: &TypeMapping) {
        for (kind, token) in other.iter() {
            self.insert(kind, token);
        }
    }

    /// Resolve the token for a concrete semantic type
    pub fn resolve(&self, ty: &SemanticType) -> Option<String> {
        let token = self.get(ty.kind())?;
        Some(match ty.referenced_entity() {
            Some(entity) => token.replace(ENTITY_PLACEHOLDER, entity),
            None => token.to_string(),
        })
    }
}
