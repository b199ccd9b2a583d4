//! Error types for accessorgen
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for accessorgen operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Which identifier of a schema failed lexical validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// The entity (class) name
    Entity,
    /// A field name
    Field,
    /// The entity named by a nested-entity-reference field
    EntityReference,
}

impl std::fmt::Display for IdentifierRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierRole::Entity => write!(f, "entity name"),
            IdentifierRole::Field => write!(f, "field name"),
            IdentifierRole::EntityReference => write!(f, "entity reference"),
        }
    }
}

/// Coarse classification of an [`EmitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The schema is structurally invalid for emission
    Schema,
    /// The emit configuration is incomplete or malformed
    Config,
    /// A value did not fit an entity record slot
    Record,
    /// Reading or writing files failed
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema",
            ErrorKind::Config => "config",
            ErrorKind::Record => "record",
            ErrorKind::Io => "io",
        }
    }
}

/// Main error type for accessorgen operations
#[derive(Error, Debug)]
pub enum EmitError {
    /// Entity or field name is not a legal identifier for the target
    #[error("invalid {role} '{name}' in entity '{entity}'")]
    InvalidIdentifier {
        entity: String,
        name: String,
        role: IdentifierRole,
    },

    /// Two fields share a name
    #[error("duplicate field '{field}' in entity '{entity}'")]
    DuplicateField { entity: String, field: String },

    /// Two entities of one schema bundle share a name
    #[error("duplicate entity '{entity}' in schema bundle")]
    DuplicateEntity { entity: String },

    /// Two fields derive the same setter or getter name
    #[error("accessor '{accessor}' is derived by more than one field in entity '{entity}'")]
    AccessorCollision { entity: String, accessor: String },

    /// A non-nullable field defaults to a new instance of its own entity
    #[error("field '{field}' of entity '{entity}' is a non-nullable reference to its own entity")]
    SelfReference { entity: String, field: String },

    /// Non-nullable nested references of a bundle form a loop
    #[error("non-nullable reference cycle in schema bundle: {cycle}")]
    ReferenceCycle { entity: String, cycle: String },

    /// Schema file could not be decoded
    #[error("invalid schema in {file}: {message}")]
    InvalidSchemaFile { file: PathBuf, message: String },

    /// Semantic type has no entry in the type mapping table
    #[error("no type mapping for '{semantic_type}' (field '{field}' in entity '{entity}')")]
    MissingTypeMapping {
        entity: String,
        field: String,
        semantic_type: String,
    },

    /// Naming rule prefix would produce illegal method names
    #[error("invalid naming rule prefix '{prefix}'")]
    InvalidNamingRule { prefix: String },

    /// Configuration file could not be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Schema file extension is not one of toml, yaml, yml, json
    #[error("unsupported schema format for {file} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat { file: PathBuf },

    /// Record access to a field the entity does not declare
    #[error("entity '{entity}' has no field '{field}'")]
    UnknownField { entity: String, field: String },

    /// Record value does not match the field's semantic type
    #[error("field '{field}' of entity '{entity}' expects {expected}")]
    TypeMismatch {
        entity: String,
        field: String,
        expected: String,
    },

    /// Attempt to clear a non-nullable record slot
    #[error("field '{field}' of entity '{entity}' is not nullable")]
    UnsetNonNullable { entity: String, field: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmitError::InvalidIdentifier { .. }
            | EmitError::DuplicateField { .. }
            | EmitError::DuplicateEntity { .. }
            | EmitError::AccessorCollision { .. }
            | EmitError::SelfReference { .. }
            | EmitError::ReferenceCycle { .. }
            | EmitError::InvalidSchemaFile { .. } => ErrorKind::Schema,
            EmitError::MissingTypeMapping { .. }
            | EmitError::InvalidNamingRule { .. }
            | EmitError::InvalidConfig { .. }
            | EmitError::UnsupportedFormat { .. } => ErrorKind::Config,
            EmitError::UnknownField { .. }
            | EmitError::TypeMismatch { .. }
            | EmitError::UnsetNonNullable { .. } => ErrorKind::Record,
            EmitError::Io(_) => ErrorKind::Io,
        }
    }

    /// True for errors caused by an invalid schema
    pub fn is_schema_error(&self) -> bool {
        self.kind() == ErrorKind::Schema
    }

    /// True for errors caused by an incomplete configuration
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Config
    }
}
