//! FluentMutation port - chainable field access on entity instances

use crate::domain::entities::Value;
use crate::error::EmitResult;

/// Setter/getter pair over named fields
///
/// `set` hands back the receiver so calls chain:
/// `record.set("a", x)?.set("b", y)?`.
pub trait FluentMutation {
    /// Store `value` in `field` and return the same instance
    fn set(&mut self, field: &str, value: Value) -> EmitResult<&mut Self>;

    /// Current value of `field`, unmodified
    fn get(&self, field: &str) -> EmitResult<&Value>;
}
