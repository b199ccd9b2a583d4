//! Domain Layer
//!
//! This is the core of accessorgen - schema in, source text out, no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Entity schemas, field descriptors, emitted source text, records
//! - `value_objects/` - Immutable value types (SemanticType, Target, TypeMapping)
//! - `services/` - Validation, naming and the emitter itself
//! - `ports/` - Interface definitions implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - `emit` is a function of (schema, config)
//! 3. **Ports & Adapters** - Each target language is an adapter behind `TargetEmitter`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
