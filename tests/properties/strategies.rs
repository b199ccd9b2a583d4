//! Shared generators for schema properties.

use proptest::prelude::*;

use accessorgen::{EntitySchema, FieldDescriptor, SemanticType, Target};

pub fn semantic_type() -> impl Strategy<Value = SemanticType> {
    prop_oneof![
        Just(SemanticType::Boolean),
        Just(SemanticType::Integer),
        Just(SemanticType::LongInteger),
        Just(SemanticType::FloatingPoint),
        Just(SemanticType::Text),
        Just(SemanticType::DateTime),
        Just(SemanticType::IdentifierReference),
        Just(SemanticType::nested("Address")),
    ]
}

pub fn target() -> impl Strategy<Value = Target> {
    prop_oneof![Just(Target::Java), Just(Target::Php)]
}

/// Field shape without a name: (type, nullable, list, description)
fn field_shape() -> impl Strategy<Value = (SemanticType, bool, bool, String)> {
    (
        semantic_type(),
        any::<bool>(),
        prop::bool::weighted(0.2),
        "[A-Za-z ]{0,24}",
    )
}

/// Names are unique by their index; the suffix keeps them varied
pub fn field_name(index: usize, suffix: &str) -> String {
    format!("f{}_{}", index, suffix)
}

/// A valid schema with 0..12 uniquely named fields
pub fn schema() -> impl Strategy<Value = EntitySchema> {
    (
        "Entity[A-Z][a-z]{0,6}",
        "[a-z]{0,6}(\\.[a-z]{1,6}){0,2}",
        prop::collection::vec((field_shape(), "[a-zA-Z0-9]{0,6}"), 0..12),
    )
        .prop_map(|(name, package, fields)| {
            let mut schema = EntitySchema::new(name, "Generated entity").with_package(package);
            for (i, ((ty, nullable, list, description), suffix)) in fields.into_iter().enumerate() {
                schema = schema.with_field(
                    FieldDescriptor::new(field_name(i, &suffix), ty)
                        .nullable(nullable)
                        .list(list)
                        .with_description(description),
                );
            }
            schema
        })
}
