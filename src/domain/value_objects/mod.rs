//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod identifier;
mod semantic_type;
mod target;
mod type_mapping;

pub use config_warning::ConfigWarning;
pub use identifier::is_identifier;
pub use semantic_type::{SemanticType, SemanticTypeKind};
pub use target::Target;
pub use type_mapping::{TypeMapping, ENTITY_PLACEHOLDER};
