//! Domain Entities
//!
//! - `EntitySchema` / `FieldDescriptor` - the declarative input
//! - `SchemaBundle` - several schemas loaded from one file
//! - `ResolvedClass` - a validated schema with names and types decided
//! - `SourceText` - the emitted class
//! - `EntityRecord` - an in-memory instance obeying the accessor contract

mod entity_schema;
mod record;
mod resolved;
mod source_text;

pub use entity_schema::{EntitySchema, FieldDescriptor, SchemaBundle};
pub use record::{EntityRecord, Value};
pub use resolved::{ResolvedClass, ResolvedMember};
pub use source_text::SourceText;
