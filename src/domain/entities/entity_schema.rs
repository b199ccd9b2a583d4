//! Entity schema entities - the declarative input of emission
//!
//! A schema describes one generated class: its name, description, package
//! and ordered fields. Field order is significant and preserved everywhere.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SemanticType, SemanticTypeKind};

/// One field of an entity schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct FieldDescriptor {
    /// Field name (camelCase by convention)
    pub name: String,
    /// Portable type of the stored value
    pub semantic_type: SemanticType,
    /// Whether "unset" is a legal value
    pub nullable: bool,
    /// Whether the field stores an ordered collection of `semantic_type`
    pub list: bool,
    /// Free text used for the member's doc comment
    pub description: String,
}

impl FieldDescriptor {
    /// Create a non-nullable scalar field without description
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            nullable: false,
            list: false,
            description: String::new(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// On-disk shape of a field: the semantic type is a kebab-case string and
/// nested references name their entity in a sibling key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    kind: SemanticTypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
    #[serde(default)]
    nullable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    list: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<RawField> for FieldDescriptor {
    type Error = String;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let semantic_type = SemanticType::from_kind(raw.kind, raw.entity)
            .map_err(|e| format!("field '{}': {}", raw.name, e))?;
        Ok(Self {
            name: raw.name,
            semantic_type,
            nullable: raw.nullable,
            list: raw.list,
            description: raw.description,
        })
    }
}

impl From<FieldDescriptor> for RawField {
    fn from(field: FieldDescriptor) -> Self {
        Self {
            kind: field.semantic_type.kind(),
            entity: field.semantic_type.referenced_entity().map(str::to_string),
            name: field.name,
            nullable: field.nullable,
            list: field.list,
            description: field.description,
        }
    }
}

/// Declarative description of one generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Class name (PascalCase by convention)
    pub name: String,
    /// Free text used verbatim in the class doc comment
    #[serde(default)]
    pub description: String,
    /// Logical grouping, rendered as the target's package or namespace
    #[serde(default)]
    pub package: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl EntitySchema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            package: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A group of entity schemas loaded from one file
///
/// Entities without their own package inherit the bundle's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaBundle {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub entities: Vec<EntitySchema>,
}

impl SchemaBundle {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: EntitySchema) -> Self {
        self.entities.push(entity);
        self
    }

    /// Copy the bundle package onto entities that do not declare one
    pub fn apply_package(&mut self) {
        if self.package.is_empty() {
            return;
        }
        for entity in &mut self.entities {
            if entity.package.is_empty() {
                entity.package = self.package.clone();
            }
        }
    }
}
