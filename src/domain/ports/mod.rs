//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod fluent;
pub mod target_emitter;

pub use file_system::{FileSystem, FsError, FsResult};
pub use fluent::FluentMutation;
pub use target_emitter::{FluentStyle, TargetEmitter};
