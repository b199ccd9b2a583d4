//! Domain Services
//!
//! Pure services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod emitter;
pub mod naming;
pub mod validator;

pub use emitter::{emit_with, resolve};
pub use naming::{accessor_name, capitalize_first, NamingRule};
pub use validator::{validate, validate_bundle};
