//! EntityRecord entity - an in-memory instance of an accessor class
//!
//! A record holds one slot per schema field, initialized with the same
//! default-value policy the target emitters print: nullable slots start
//! `Unset`, non-nullable slots start at their type's zero value. It is the
//! executable counterpart of an emitted class.

use chrono::{DateTime, Utc};

use super::entity_schema::{EntitySchema, FieldDescriptor};
use crate::domain::ports::FluentMutation;
use crate::domain::value_objects::SemanticTypeKind;
use crate::error::{EmitError, EmitResult};

/// A value stored in a record slot
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent; only legal for nullable fields
    Unset,
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Float(f64),
    Text(String),
    DateTime(DateTime<Utc>),
    Identifier(String),
    /// Handle of another entity instance
    Reference(String),
    List(Vec<Value>),
}

impl Value {
    /// The zero value of a scalar kind
    ///
    /// Date-time and reference have no natural zero; they use the epoch and
    /// the empty handle as sentinels.
    pub fn zero(kind: SemanticTypeKind) -> Value {
        match kind {
            SemanticTypeKind::Boolean => Value::Boolean(false),
            SemanticTypeKind::Integer => Value::Integer(0),
            SemanticTypeKind::LongInteger => Value::Long(0),
            SemanticTypeKind::FloatingPoint => Value::Float(0.0),
            SemanticTypeKind::Text => Value::Text(String::new()),
            SemanticTypeKind::DateTime => Value::DateTime(DateTime::<Utc>::UNIX_EPOCH),
            SemanticTypeKind::IdentifierReference => Value::Identifier(String::new()),
            SemanticTypeKind::NestedEntityReference => Value::Reference(String::new()),
        }
    }

    /// Initial slot value for a field
    pub fn default_for(field: &FieldDescriptor) -> Value {
        if field.nullable {
            Value::Unset
        } else if field.list {
            Value::List(Vec::new())
        } else {
            Value::zero(field.semantic_type.kind())
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    fn is_scalar_of(&self, kind: SemanticTypeKind) -> bool {
        matches!(
            (self, kind),
            (Value::Boolean(_), SemanticTypeKind::Boolean)
                | (Value::Integer(_), SemanticTypeKind::Integer)
                | (Value::Long(_), SemanticTypeKind::LongInteger)
                | (Value::Float(_), SemanticTypeKind::FloatingPoint)
                | (Value::Text(_), SemanticTypeKind::Text)
                | (Value::DateTime(_), SemanticTypeKind::DateTime)
                | (Value::Identifier(_), SemanticTypeKind::IdentifierReference)
                | (Value::Reference(_), SemanticTypeKind::NestedEntityReference)
        )
    }

    /// Whether this value may be stored in `field`, ignoring nullability
    fn fits(&self, field: &FieldDescriptor) -> bool {
        let kind = field.semantic_type.kind();
        match self {
            Value::List(items) => field.list && items.iter().all(|v| v.is_scalar_of(kind)),
            other => !field.list && other.is_scalar_of(kind),
        }
    }
}

fn expected_description(field: &FieldDescriptor) -> String {
    if field.list {
        format!("a list of {}", field.semantic_type)
    } else {
        format!("a {} value", field.semantic_type)
    }
}

/// An instance of an entity: one slot per field, in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    entity: String,
    fields: Vec<FieldDescriptor>,
    values: Vec<Value>,
}

impl EntityRecord {
    /// Zero-argument construction: every slot gets its default value
    pub fn new(schema: &EntitySchema) -> Self {
        Self {
            entity: schema.name.clone(),
            values: schema.fields.iter().map(Value::default_for).collect(),
            fields: schema.fields.clone(),
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Field names and current values, in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .zip(self.values.iter())
    }

    fn slot(&self, field: &str) -> EmitResult<usize> {
        self.fields
            .iter()
            .position(|f| f.name == field)
            .ok_or_else(|| EmitError::UnknownField {
                entity: self.entity.clone(),
                field: field.to_string(),
            })
    }
}

impl FluentMutation for EntityRecord {
    fn set(&mut self, field: &str, value: Value) -> EmitResult<&mut Self> {
        let index = self.slot(field)?;
        let descriptor = &self.fields[index];

        if value.is_unset() {
            if !descriptor.nullable {
                return Err(EmitError::UnsetNonNullable {
                    entity: self.entity.clone(),
                    field: field.to_string(),
                });
            }
        } else if !value.fits(descriptor) {
            return Err(EmitError::TypeMismatch {
                entity: self.entity.clone(),
                field: field.to_string(),
                expected: expected_description(descriptor),
            });
        }

        self.values[index] = value;
        Ok(self)
    }

    fn get(&self, field: &str) -> EmitResult<&Value> {
        let index = self.slot(field)?;
        Ok(&self.values[index])
    }
}
