//! Schema validation
//!
//! Collects every violation that would make emission fail. Violations are
//! reported in schema order: entity name, naming rule, then each field.
//! Bundles add duplicate entities and cycles of non-nullable references.

use std::collections::{HashMap, HashSet};

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, SchemaBundle};
use crate::domain::ports::TargetEmitter;
use crate::domain::value_objects::is_identifier;
use crate::error::{EmitError, IdentifierRole};

fn check_identifier(
    emitter: &dyn TargetEmitter,
    entity: &str,
    name: &str,
    role: IdentifierRole,
) -> Option<EmitError> {
    if is_identifier(name) && !emitter.is_reserved(name, role) {
        None
    } else {
        Some(EmitError::InvalidIdentifier {
            entity: entity.to_string(),
            name: name.to_string(),
            role,
        })
    }
}

/// Every violation in `schema` for the given target and config
pub fn validate(
    emitter: &dyn TargetEmitter,
    schema: &EntitySchema,
    config: &EmitConfig,
) -> Vec<EmitError> {
    let entity = schema.name.as_str();
    let mut violations = Vec::new();

    violations.extend(check_identifier(emitter, entity, entity, IdentifierRole::Entity));

    if let Err(err) = config.naming_rule.validate() {
        violations.push(err);
    }

    let mut names = HashSet::new();
    let mut accessors = HashSet::new();

    for field in &schema.fields {
        if let Some(err) = check_identifier(emitter, entity, &field.name, IdentifierRole::Field) {
            violations.push(err);
            continue;
        }

        if !names.insert(field.name.as_str()) {
            violations.push(EmitError::DuplicateField {
                entity: entity.to_string(),
                field: field.name.clone(),
            });
            continue;
        }

        if let Some(target) = field.semantic_type.referenced_entity() {
            violations.extend(check_identifier(
                emitter,
                entity,
                target,
                IdentifierRole::EntityReference,
            ));
            if target == entity && !field.nullable && !field.list {
                violations.push(EmitError::SelfReference {
                    entity: entity.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        if config.type_mapping.resolve(&field.semantic_type).is_none() {
            violations.push(EmitError::MissingTypeMapping {
                entity: entity.to_string(),
                field: field.name.clone(),
                semantic_type: field.semantic_type.kind().to_string(),
            });
        }

        for accessor in [
            config.naming_rule.setter_name(field),
            config.naming_rule.getter_name(field),
        ] {
            if !accessors.insert(accessor.clone()) {
                violations.push(EmitError::AccessorCollision {
                    entity: entity.to_string(),
                    accessor,
                });
            }
        }
    }

    violations
}

/// Every violation across a bundle, including duplicate entity names
pub fn validate_bundle(
    emitter: &dyn TargetEmitter,
    bundle: &SchemaBundle,
    config: &EmitConfig,
) -> Vec<EmitError> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for schema in &bundle.entities {
        if !seen.insert(schema.name.as_str()) {
            violations.push(EmitError::DuplicateEntity {
                entity: schema.name.clone(),
            });
        }
        violations.extend(validate(emitter, schema, config));
    }

    violations.extend(reference_cycles(bundle));
    violations
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Edges `(field, target)` of entities whose default constructs another entity
type ReferenceGraph<'a> = HashMap<&'a str, Vec<(&'a str, &'a str)>>;

/// One violation per cycle of non-nullable scalar references between entities
fn reference_cycles(bundle: &SchemaBundle) -> Vec<EmitError> {
    let mut graph = ReferenceGraph::new();
    let mut order = Vec::new();
    for schema in &bundle.entities {
        let name = schema.name.as_str();
        if graph.contains_key(name) {
            continue;
        }
        order.push(name);
        let edges = schema
            .fields
            .iter()
            .filter(|f| !f.nullable && !f.list)
            .filter_map(|f| {
                f.semantic_type
                    .referenced_entity()
                    .filter(|target| *target != name)
                    .map(|target| (f.name.as_str(), target))
            })
            .collect();
        graph.insert(name, edges);
    }

    let mut state = HashMap::new();
    let mut path = Vec::new();
    let mut cycles = Vec::new();
    for entity in order {
        if !state.contains_key(entity) {
            visit(entity, &graph, &mut state, &mut path, &mut cycles);
        }
    }
    cycles
}

fn visit<'a>(
    entity: &'a str,
    graph: &ReferenceGraph<'a>,
    state: &mut HashMap<&'a str, Visit>,
    path: &mut Vec<(&'a str, &'a str)>,
    cycles: &mut Vec<EmitError>,
) {
    state.insert(entity, Visit::InProgress);

    for &(field, target) in graph.get(entity).into_iter().flatten() {
        if !graph.contains_key(target) {
            continue;
        }
        path.push((entity, field));
        match state.get(target).copied() {
            Some(Visit::InProgress) => {
                let start = path.iter().position(|(e, _)| *e == target).unwrap_or(0);
                let mut cycle = path[start..]
                    .iter()
                    .map(|(e, f)| format!("{}.{}", e, f))
                    .collect::<Vec<_>>()
                    .join(" -> ");
                cycle.push_str(" -> ");
                cycle.push_str(target);
                cycles.push(EmitError::ReferenceCycle {
                    entity: target.to_string(),
                    cycle,
                });
            }
            Some(Visit::Done) => {}
            None => visit(target, graph, state, path, cycles),
        }
        path.pop();
    }

    state.insert(entity, Visit::Done);
}
