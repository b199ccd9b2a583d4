//! ResolvedClass entity - a validated schema with every name and type decided
//!
//! The emitter service builds this once all checks pass; target emitters
//! only format it and never fail.

use super::entity_schema::{EntitySchema, FieldDescriptor};

/// A field with its target type token and accessor names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember<'a> {
    pub field: &'a FieldDescriptor,
    /// Mapped element type token, before any nullability or list decoration
    pub type_token: String,
    pub setter: String,
    pub getter: String,
}

impl ResolvedMember<'_> {
    pub fn name(&self) -> &str {
        &self.field.name
    }

    /// Doc text for the member: the field description, or its name when empty
    pub fn doc(&self) -> &str {
        let description = self.field.description.trim();
        if description.is_empty() {
            &self.field.name
        } else {
            description
        }
    }
}

/// A schema ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass<'a> {
    pub schema: &'a EntitySchema,
    /// One entry per field, in schema order
    pub members: Vec<ResolvedMember<'a>>,
}

impl ResolvedClass<'_> {
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn description(&self) -> &str {
        self.schema.description.trim()
    }

    pub fn package(&self) -> &str {
        self.schema.package.trim()
    }
}
