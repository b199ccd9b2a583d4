//! accessorgen - deterministic accessor class generator
//!
//! accessorgen turns declarative entity schemas (field name, semantic type,
//! nullability) into plain accessor classes: private storage, a default
//! constructor, fluent setters and getters, each with a doc comment.
//! Output is a pure function of the schema and the emit configuration.
//!
//! Layers:
//! - `domain` - schemas, type tables, naming rules, validation, ports
//! - `infrastructure` - target emitters (Java, PHP), schema files, file systems
//! - `application` - emit / check / diff use cases
//! - `config` - layered `accessorgen.toml` configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{check_bundle, emit, emit_bundle, EmittedFile};
pub use config::{Config, EmitConfig};
pub use domain::entities::{EntityRecord, EntitySchema, FieldDescriptor, SchemaBundle, SourceText, Value};
pub use domain::ports::{FluentMutation, FluentStyle, TargetEmitter};
pub use domain::services::{validate, NamingRule};
pub use domain::value_objects::{SemanticType, SemanticTypeKind, Target, TypeMapping};
pub use error::{EmitError, EmitResult, ErrorKind};
pub use infrastructure::emitters::{all_emitters, get_emitter};
pub use infrastructure::schema_loader::{load_schema, parse_schema, SchemaFormat};
