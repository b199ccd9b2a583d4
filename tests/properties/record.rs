//! Property tests for the behavioral accessor contract on EntityRecord.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use accessorgen::{EntityRecord, FieldDescriptor, FluentMutation, SemanticTypeKind, Value};

use super::strategies::schema;

fn scalar(kind: SemanticTypeKind) -> BoxedStrategy<Value> {
    match kind {
        SemanticTypeKind::Boolean => any::<bool>().prop_map(Value::Boolean).boxed(),
        SemanticTypeKind::Integer => any::<i32>().prop_map(Value::Integer).boxed(),
        SemanticTypeKind::LongInteger => any::<i64>().prop_map(Value::Long).boxed(),
        SemanticTypeKind::FloatingPoint => (-1.0e9f64..1.0e9).prop_map(Value::Float).boxed(),
        SemanticTypeKind::Text => ".{0,16}".prop_map(Value::Text).boxed(),
        SemanticTypeKind::DateTime => (0i64..4_000_000_000)
            .prop_map(|secs| Value::DateTime(Utc.timestamp_opt(secs, 0).unwrap()))
            .boxed(),
        SemanticTypeKind::IdentifierReference => "[a-f0-9]{8}".prop_map(Value::Identifier).boxed(),
        SemanticTypeKind::NestedEntityReference => "addr-[0-9]{1,3}".prop_map(Value::Reference).boxed(),
    }
}

fn value_for(field: &FieldDescriptor) -> BoxedStrategy<Value> {
    let kind = field.semantic_type.kind();
    if field.list {
        prop::collection::vec(scalar(kind), 0..4)
            .prop_map(Value::List)
            .boxed()
    } else {
        scalar(kind)
    }
}

/// A schema plus one fitting value per field
fn schema_with_values() -> impl Strategy<Value = (accessorgen::EntitySchema, Vec<Value>)> {
    schema().prop_flat_map(|schema| {
        let values: Vec<BoxedStrategy<Value>> = schema.fields.iter().map(value_for).collect();
        (Just(schema), values)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a fresh record follows the default-value policy.
    #[test]
    fn property_record_defaults(schema in schema()) {
        let record = EntityRecord::new(&schema);
        for field in &schema.fields {
            let value = record.get(&field.name).unwrap();
            prop_assert_eq!(value.is_unset(), field.nullable);
            prop_assert_eq!(value, &Value::default_for(field));
        }
    }

    /// PROPERTY: get returns exactly what set stored.
    #[test]
    fn property_record_round_trip((schema, values) in schema_with_values()) {
        let mut record = EntityRecord::new(&schema);
        for (field, value) in schema.fields.iter().zip(&values) {
            record.set(&field.name, value.clone()).unwrap();
        }
        for (field, value) in schema.fields.iter().zip(&values) {
            prop_assert_eq!(record.get(&field.name).unwrap(), value);
        }
    }

    /// PROPERTY: set returns the record it mutated, so calls chain.
    #[test]
    fn property_record_set_is_fluent((schema, values) in schema_with_values()) {
        let mut record = EntityRecord::new(&schema);
        let original: *const EntityRecord = &record;

        for (field, value) in schema.fields.iter().zip(values) {
            let returned: *const EntityRecord = record.set(&field.name, value).unwrap();
            prop_assert_eq!(returned, original);
        }
    }

    /// PROPERTY: Unset is accepted exactly for nullable fields.
    #[test]
    fn property_record_unset_only_nullable(schema in schema()) {
        let mut record = EntityRecord::new(&schema);
        for field in &schema.fields {
            prop_assert_eq!(record.set(&field.name, Value::Unset).is_ok(), field.nullable);
        }
    }
}
