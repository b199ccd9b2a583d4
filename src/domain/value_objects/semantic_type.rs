//! Semantic type value object - portable field types independent of any target language

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a semantic type, used as the key of a type mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticTypeKind {
    Boolean,
    Integer,
    LongInteger,
    FloatingPoint,
    Text,
    DateTime,
    IdentifierReference,
    NestedEntityReference,
}

impl SemanticTypeKind {
    /// Every kind, in declaration order
    pub const ALL: [SemanticTypeKind; 8] = [
        SemanticTypeKind::Boolean,
        SemanticTypeKind::Integer,
        SemanticTypeKind::LongInteger,
        SemanticTypeKind::FloatingPoint,
        SemanticTypeKind::Text,
        SemanticTypeKind::DateTime,
        SemanticTypeKind::IdentifierReference,
        SemanticTypeKind::NestedEntityReference,
    ];

    /// Kebab-case name used in schema and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticTypeKind::Boolean => "boolean",
            SemanticTypeKind::Integer => "integer",
            SemanticTypeKind::LongInteger => "long-integer",
            SemanticTypeKind::FloatingPoint => "floating-point",
            SemanticTypeKind::Text => "text",
            SemanticTypeKind::DateTime => "date-time",
            SemanticTypeKind::IdentifierReference => "identifier-reference",
            SemanticTypeKind::NestedEntityReference => "nested-entity-reference",
        }
    }
}

impl std::fmt::Display for SemanticTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticTypeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticTypeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown semantic type '{}'", s))
    }
}

/// Semantic type of a field
///
/// A nested-entity reference carries the name of the entity it points to;
/// every other type is fully described by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Boolean,
    Integer,
    LongInteger,
    FloatingPoint,
    Text,
    DateTime,
    IdentifierReference,
    NestedEntityReference { entity: String },
}

impl SemanticType {
    /// Reference to another entity by name
    pub fn nested(entity: impl Into<String>) -> Self {
        SemanticType::NestedEntityReference {
            entity: entity.into(),
        }
    }

    /// Build a semantic type from its kind, plus the entity name for nested references
    pub fn from_kind(kind: SemanticTypeKind, entity: Option<String>) -> Result<Self, String> {
        let ty = match kind {
            SemanticTypeKind::Boolean => SemanticType::Boolean,
            SemanticTypeKind::Integer => SemanticType::Integer,
            SemanticTypeKind::LongInteger => SemanticType::LongInteger,
            SemanticTypeKind::FloatingPoint => SemanticType::FloatingPoint,
            SemanticTypeKind::Text => SemanticType::Text,
            SemanticTypeKind::DateTime => SemanticType::DateTime,
            SemanticTypeKind::IdentifierReference => SemanticType::IdentifierReference,
            SemanticTypeKind::NestedEntityReference => {
                let entity = entity.ok_or_else(|| {
                    "nested-entity-reference requires an 'entity' name".to_string()
                })?;
                return Ok(SemanticType::NestedEntityReference { entity });
            }
        };
        if entity.is_some() {
            return Err(format!("'entity' is only allowed on nested-entity-reference, not {}", kind));
        }
        Ok(ty)
    }

    pub fn kind(&self) -> SemanticTypeKind {
        match self {
            SemanticType::Boolean => SemanticTypeKind::Boolean,
            SemanticType::Integer => SemanticTypeKind::Integer,
            SemanticType::LongInteger => SemanticTypeKind::LongInteger,
            SemanticType::FloatingPoint => SemanticTypeKind::FloatingPoint,
            SemanticType::Text => SemanticTypeKind::Text,
            SemanticType::DateTime => SemanticTypeKind::DateTime,
            SemanticType::IdentifierReference => SemanticTypeKind::IdentifierReference,
            SemanticType::NestedEntityReference { .. } => SemanticTypeKind::NestedEntityReference,
        }
    }

    /// Name of the referenced entity for nested references
    pub fn referenced_entity(&self) -> Option<&str> {
        match self {
            SemanticType::NestedEntityReference { entity } => Some(entity),
            _ => None,
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticType::NestedEntityReference { entity } => {
                write!(f, "{}({})", self.kind(), entity)
            }
            _ => write!(f, "{}", self.kind()),
        }
    }
}
