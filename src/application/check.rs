//! Check Use Case
//!
//! Validates a schema bundle and reports every violation instead of
//! stopping at the first one.

use crate::config::EmitConfig;
use crate::domain::entities::SchemaBundle;
use crate::domain::services::validate_bundle;
use crate::error::EmitError;
use crate::infrastructure::emitters::get_emitter;

/// Result of the check operation
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of entities checked
    pub entities: usize,
    /// Violations in bundle order
    pub violations: Vec<EmitError>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate every entity of `bundle` against `config`
pub fn check_bundle(bundle: &SchemaBundle, config: &EmitConfig) -> CheckReport {
    let emitter = get_emitter(config.target);
    let violations = validate_bundle(emitter.as_ref(), bundle, config);

    tracing::debug!(
        entities = bundle.entities.len(),
        violations = violations.len(),
        "checked schema bundle"
    );

    CheckReport {
        entities: bundle.entities.len(),
        violations,
    }
}
