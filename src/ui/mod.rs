//! Terminal output helpers

pub mod json;
