//! Accessor class emitter
//!
//! Validates a schema, resolves type tokens and accessor names, then asks
//! the target emitter to render. Nothing is rendered unless every check
//! passes, so callers get either complete source text or an error.

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, ResolvedClass, ResolvedMember, SourceText};
use crate::domain::ports::TargetEmitter;
use crate::error::{EmitError, EmitResult};

use super::validator;

/// Validate `schema` and decide every type token and accessor name
pub fn resolve<'a>(
    emitter: &dyn TargetEmitter,
    schema: &'a EntitySchema,
    config: &EmitConfig,
) -> EmitResult<ResolvedClass<'a>> {
    if let Some(first) = validator::validate(emitter, schema, config).into_iter().next() {
        return Err(first);
    }

    let members = schema
        .fields
        .iter()
        .map(|field| {
            let type_token = config
                .type_mapping
                .resolve(&field.semantic_type)
                .ok_or_else(|| EmitError::MissingTypeMapping {
                    entity: schema.name.clone(),
                    field: field.name.clone(),
                    semantic_type: field.semantic_type.kind().to_string(),
                })?;
            Ok(ResolvedMember {
                field,
                type_token,
                setter: config.naming_rule.setter_name(field),
                getter: config.naming_rule.getter_name(field),
            })
        })
        .collect::<EmitResult<Vec<_>>>()?;

    Ok(ResolvedClass { schema, members })
}

/// Emit one accessor class with a specific target emitter
pub fn emit_with(
    emitter: &dyn TargetEmitter,
    schema: &EntitySchema,
    config: &EmitConfig,
) -> EmitResult<SourceText> {
    let class = resolve(emitter, schema, config)?;

    tracing::debug!(
        entity = %schema.name,
        target = %emitter.target(),
        fields = class.members.len(),
        "rendering accessor class"
    );

    Ok(SourceText::new(emitter.render(&class, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldDescriptor;
    use crate::domain::services::naming::NamingRule;
    use crate::domain::value_objects::{SemanticType, SemanticTypeKind, Target};
    use crate::infrastructure::emitters::JavaEmitter;

    fn schema() -> EntitySchema {
        EntitySchema::new("Post", "A blog post")
            .with_field(FieldDescriptor::new("title", SemanticType::Text))
            .with_field(FieldDescriptor::new("author", SemanticType::nested("User")).nullable(true))
            .with_field(FieldDescriptor::new("published", SemanticType::Boolean))
    }

    #[test]
    fn resolve_keeps_field_order_and_names() {
        let schema = schema();
        let config = EmitConfig::for_target(Target::Java);
        let class = resolve(&JavaEmitter::new(), &schema, &config).unwrap();

        let names: Vec<_> = class.members.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["title", "author", "published"]);
        assert_eq!(class.members[1].type_token, "User");
        assert_eq!(class.members[2].setter, "setPublished");
    }

    #[test]
    fn resolve_applies_naming_override() {
        let schema = schema();
        let config = EmitConfig::for_target(Target::Java).with_naming_rule(NamingRule {
            boolean_getter_prefix: Some("is".to_string()),
            ..NamingRule::default()
        });
        let class = resolve(&JavaEmitter::new(), &schema, &config).unwrap();
        assert_eq!(class.members[2].getter, "isPublished");
        assert_eq!(class.members[0].getter, "getTitle");
    }

    #[test]
    fn emit_with_fails_before_rendering() {
        let mut config = EmitConfig::for_target(Target::Java);
        config.type_mapping.remove(SemanticTypeKind::Text);

        let err = emit_with(&JavaEmitter::new(), &schema(), &config).unwrap_err();
        assert!(matches!(err, EmitError::MissingTypeMapping { field, .. } if field == "title"));
    }
}
