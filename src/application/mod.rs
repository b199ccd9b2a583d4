//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `emit` / `emit_bundle` - Render accessor classes for the configured target
//! - `EmitUseCase` - Emit a bundle and write it below an output directory
//! - `check_bundle` - Report every violation of a bundle
//! - `DiffUseCase` - Compare emitted sources with files on disk

pub mod check;
pub mod diff;
pub mod emit;

pub use check::{check_bundle, CheckReport};
pub use diff::{unified_diff, ChangeType, DiffEntry, DiffResult, DiffUseCase};
pub use emit::{emit, emit_bundle, EmitOptions, EmitReport, EmitUseCase, EmittedFile};
