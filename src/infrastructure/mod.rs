//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `emitters/` - Target emitters (Java, PHP)
//! - `fs/` - File system implementations (Local, Memory)
//! - `schema_loader` - TOML / YAML / JSON schema files

pub mod emitters;
pub mod fs;
pub mod schema_loader;

// Re-export for convenience
pub use emitters::{all_emitters, get_emitter, JavaEmitter, PhpEmitter};
pub use fs::{LocalFs, MemoryFs};
pub use schema_loader::{load_schema, parse_schema, SchemaFormat};
