//! Property tests for emitted source text.

use proptest::prelude::*;

use accessorgen::domain::services::capitalize_first;
use accessorgen::{emit, EmitConfig, FieldDescriptor, NamingRule, Target};

use super::strategies::{schema, target};

/// Byte offset of `needle`, which must occur
fn position(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, text))
}

fn setter_signature(target: Target, field: &str) -> String {
    match target {
        Target::Java => format!(" set{}(", capitalize_first(field)),
        Target::Php => format!("public function set{}(", capitalize_first(field)),
    }
}

fn getter_signature(target: Target, field: &FieldDescriptor) -> String {
    let getter = NamingRule::default().getter_name(field);
    match target {
        Target::Java => format!(" {}() {{", getter),
        Target::Php => format!("public function {}(): ", getter),
    }
}

fn storage(target: Target, field: &str) -> String {
    match target {
        Target::Java => format!(" {} = ", field),
        Target::Php => format!(" ${}", field),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical inputs produce byte-identical output.
    #[test]
    fn property_emit_is_deterministic(schema in schema(), target in target()) {
        let config = EmitConfig::for_target(target);
        let first = emit(&schema, &config).unwrap();
        let second = emit(&schema.clone(), &config.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: storage declarations, setters and getters follow schema field order.
    #[test]
    fn property_emit_preserves_field_order(schema in schema(), target in target()) {
        let text = emit(&schema, &EmitConfig::for_target(target)).unwrap().into_string();

        let storage_positions: Vec<usize> = schema
            .fields
            .iter()
            .map(|f| position(&text, &storage(target, &f.name)))
            .collect();
        let setter_positions: Vec<usize> = schema
            .fields
            .iter()
            .map(|f| position(&text, &setter_signature(target, &f.name)))
            .collect();

        let getter_positions: Vec<usize> = schema
            .fields
            .iter()
            .map(|f| position(&text, &getter_signature(target, f)))
            .collect();

        prop_assert!(storage_positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(setter_positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(getter_positions.windows(2).all(|w| w[0] < w[1]));
        // each getter sits between its own setter and the next field's setter
        for (i, getter) in getter_positions.iter().enumerate() {
            prop_assert!(setter_positions[i] < *getter);
            if let Some(next_setter) = setter_positions.get(i + 1) {
                prop_assert!(getter < next_setter);
            }
        }
        if let (Some(last_storage), Some(first_setter)) =
            (storage_positions.last(), setter_positions.first())
        {
            prop_assert!(last_storage < first_setter);
        }
    }

    /// PROPERTY: exactly one setter and one getter per field, plus one constructor.
    #[test]
    fn property_emit_is_total(schema in schema(), target in target()) {
        let text = emit(&schema, &EmitConfig::for_target(target)).unwrap().into_string();
        let n = schema.fields.len();

        match target {
            Target::Java => {
                let methods = text.lines().filter(|l| l.starts_with("    public ")).count();
                prop_assert_eq!(methods, 2 * n + 1);
                let setters = text.matches(&format!("    public {} set", schema.name)).count();
                prop_assert_eq!(setters, n);
            }
            Target::Php => {
                prop_assert_eq!(text.matches("public function ").count(), 2 * n + 1);
                prop_assert_eq!(text.matches("): self\n").count(), n);
            }
        }
        let slots = text.lines().filter(|l| l.starts_with("    private ")).count();
        prop_assert_eq!(slots, n);
    }

    /// PROPERTY: every setter returns the receiver.
    #[test]
    fn property_setters_return_receiver(schema in schema(), target in target()) {
        let text = emit(&schema, &EmitConfig::for_target(target)).unwrap().into_string();
        let returns = match target {
            Target::Java => text.matches("return this;").count(),
            Target::Php => text.matches("return $this;").count(),
        };
        prop_assert_eq!(returns, schema.fields.len());
    }

    /// PROPERTY: nullable fields default to null; non-nullable ones never do.
    #[test]
    fn property_nullable_default(schema in schema(), target in target()) {
        let text = emit(&schema, &EmitConfig::for_target(target)).unwrap().into_string();

        for field in &schema.fields {
            let declared_null = match target {
                Target::Java => text.contains(&format!(" {} = null;", field.name)),
                Target::Php => text.contains(&format!(" ${} = null;", field.name)),
            };
            prop_assert_eq!(declared_null, field.nullable, "field {}", field.name);
        }
    }
}
