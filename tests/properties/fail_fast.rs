//! Property tests for the fail-fast law: invalid input never yields text.

use proptest::prelude::*;

use accessorgen::{emit, EmitConfig, EmitError, FieldDescriptor, SemanticType, SemanticTypeKind};

use super::strategies::{schema, target};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a duplicated field anywhere makes emission fail.
    #[test]
    fn property_duplicate_field_fails(
        mut schema in schema(),
        target in target(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!schema.fields.is_empty());
        let duplicate = schema.fields[pick.index(schema.fields.len())].clone();
        schema.fields.push(duplicate.clone());

        let result = emit(&schema, &EmitConfig::for_target(target));
        let is_duplicate = matches!(
            result,
            Err(EmitError::DuplicateField { ref field, .. }) if *field == duplicate.name
        );
        prop_assert!(is_duplicate);
    }

    /// PROPERTY: an illegal field name makes emission fail.
    #[test]
    fn property_illegal_identifier_fails(
        mut schema in schema(),
        target in target(),
        bad in "[0-9-][a-z]{0,4}|[a-z]{1,4}[- .][a-z]{1,4}",
    ) {
        schema.fields.push(FieldDescriptor::new(bad, SemanticType::Text));
        let result = emit(&schema, &EmitConfig::for_target(target));
        prop_assert!(matches!(result, Err(EmitError::InvalidIdentifier { .. })), "expected InvalidIdentifier, got {:?}", result);
    }

    /// PROPERTY: an unmapped semantic type in use makes emission fail.
    #[test]
    fn property_missing_mapping_fails(schema in schema(), target in target()) {
        prop_assume!(schema.fields.iter().any(|f| f.semantic_type == SemanticType::Text));

        let mut config = EmitConfig::for_target(target);
        config.type_mapping.remove(SemanticTypeKind::Text);

        let result = emit(&schema, &config);
        prop_assert!(matches!(result, Err(EmitError::MissingTypeMapping { .. })), "expected MissingTypeMapping, got {:?}", result);
    }
}
