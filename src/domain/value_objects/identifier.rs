//! Lexical identifier shape shared by all targets.
//!
//! Only ASCII letters, digits and underscores are accepted, and the first
//! character must not be a digit. Reserved words are target specific and
//! checked by each `TargetEmitter`.

/// Whether `name` has the shape of an identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
