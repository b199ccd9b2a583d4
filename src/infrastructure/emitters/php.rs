//! PHP Emitter
//!
//! Renders a typed PHP class (7.4+ property types). Property defaults must be
//! constant expressions, so object-valued zero values are assigned in
//! `__construct()` instead.

use std::path::PathBuf;

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, ResolvedClass, ResolvedMember};
use crate::domain::ports::TargetEmitter;
use crate::domain::services::naming::capitalize_first;
use crate::domain::value_objects::{SemanticTypeKind, Target, TypeMapping, ENTITY_PLACEHOLDER};
use crate::error::IdentifierRole;

use super::{package_segments, SourceWriter};

/// Keywords and reserved type names, compared case-insensitively
const RESERVED: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "include_once", "instanceof", "insteadof",
    "int", "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never",
    "new", "null", "object", "or", "parent", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "self", "static", "string", "switch",
    "throw", "trait", "true", "try", "unset", "use", "var", "void", "while", "xor", "yield",
];

/// PHP emitter
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpEmitter;

impl PhpEmitter {
    pub fn new() -> Self {
        Self
    }
}

/// `Acme\Entity` spelling of a package
pub fn php_namespace(package: &str) -> String {
    package_segments(package)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("\\")
}

enum Initial {
    /// Constant expression usable as the property default
    Literal(String),
    /// Object value assigned in the constructor
    Constructed(String),
}

fn zero_value(token: &str) -> Initial {
    let literal = match token.trim_start_matches('\\') {
        "bool" => "false",
        "int" => "0",
        "float" => "0.0",
        "string" => "''",
        "array" | "iterable" => "[]",
        "DateTimeInterface" => {
            return Initial::Constructed("new \\DateTimeImmutable('@0')".to_string())
        }
        "DateTime" | "DateTimeImmutable" => {
            return Initial::Constructed(format!("new {}('@0')", token))
        }
        _ => return Initial::Constructed(format!("new {}()", token)),
    };
    Initial::Literal(literal.to_string())
}

struct PhpMember<'m> {
    member: &'m ResolvedMember<'m>,
    /// Declared property/parameter type
    declared: String,
    /// phpDoc type
    hint: String,
    initial: Initial,
}

impl<'m> PhpMember<'m> {
    fn new(member: &'m ResolvedMember<'m>) -> Self {
        let field = member.field;
        let token = member.type_token.as_str();

        let (mut declared, mut hint) = if field.list {
            ("array".to_string(), format!("{}[]", token))
        } else {
            (token.to_string(), token.to_string())
        };
        if field.nullable {
            declared = format!("?{}", declared);
            hint.push_str("|null");
        }

        let initial = if field.nullable {
            Initial::Literal("null".to_string())
        } else if field.list {
            Initial::Literal("[]".to_string())
        } else {
            zero_value(token)
        };

        Self {
            member,
            declared,
            hint,
            initial,
        }
    }

    fn property(&self) -> String {
        match &self.initial {
            Initial::Literal(value) => format!(
                "private {} ${} = {};",
                self.declared,
                self.member.name(),
                value
            ),
            Initial::Constructed(_) => {
                format!("private {} ${};", self.declared, self.member.name())
            }
        }
    }

    fn doc_lines(&self) -> Vec<String> {
        match &self.initial {
            Initial::Literal(_) => vec![format!("@var {} {}", self.hint, self.member.doc())],
            Initial::Constructed(expr) => vec![
                self.member.doc().to_string(),
                format!("Sentinel default: {}", expr),
                format!("@var {}", self.hint),
            ],
        }
    }
}

impl TargetEmitter for PhpEmitter {
    fn target(&self) -> Target {
        Target::Php
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn default_type_mapping(&self) -> TypeMapping {
        TypeMapping::new()
            .with(SemanticTypeKind::Boolean, "bool")
            .with(SemanticTypeKind::Integer, "int")
            .with(SemanticTypeKind::LongInteger, "int")
            .with(SemanticTypeKind::FloatingPoint, "float")
            .with(SemanticTypeKind::Text, "string")
            .with(SemanticTypeKind::DateTime, "\\DateTimeInterface")
            .with(SemanticTypeKind::IdentifierReference, "string")
            .with(SemanticTypeKind::NestedEntityReference, ENTITY_PLACEHOLDER)
    }

    fn is_reserved(&self, word: &str, role: IdentifierRole) -> bool {
        match role {
            // properties live in their own `$` namespace
            IdentifierRole::Field => word == "this",
            IdentifierRole::Entity | IdentifierRole::EntityReference => RESERVED
                .iter()
                .any(|reserved| reserved.eq_ignore_ascii_case(word)),
        }
    }

    fn render(&self, class: &ResolvedClass<'_>, config: &EmitConfig) -> String {
        let name = class.name();
        let namespace = php_namespace(class.package());
        let members: Vec<PhpMember<'_>> = class.members.iter().map(PhpMember::new).collect();

        let mut w = SourceWriter::new(&config.indent);
        w.line(0, "<?php");
        w.blank();
        w.header(config.header_text.as_deref());

        if !namespace.is_empty() {
            w.line(0, &format!("namespace {};", namespace));
            w.blank();
        }

        let mut class_doc = vec![format!("Class {}", name)];
        if !class.description().is_empty() {
            class_doc.push(class.description().to_string());
        }
        if !namespace.is_empty() {
            class_doc.push(format!("@package {}", namespace));
        }
        w.doc(0, &class_doc);
        w.line(0, &format!("class {}", name));
        w.line(0, "{");

        for m in &members {
            w.doc_compact(1, &m.doc_lines());
            w.line(1, &m.property());
            w.blank();
        }

        w.doc(1, &[format!("{} constructor", name)]);
        w.line(1, "public function __construct()");
        w.line(1, "{");
        for m in &members {
            if let Initial::Constructed(expr) = &m.initial {
                w.line(2, &format!("$this->{} = {};", m.member.name(), expr));
            }
        }
        w.line(1, "}");

        for m in &members {
            let field = m.member.name();

            w.blank();
            w.doc(1, &[format!("@param {} ${}", m.hint, field), "@return self".to_string()]);
            w.line(
                1,
                &format!(
                    "public function {}({} ${}): self",
                    m.member.setter, m.declared, field
                ),
            );
            w.line(1, "{");
            w.line(2, &format!("$this->{0} = ${0};", field));
            w.line(2, "return $this;");
            w.line(1, "}");

            w.blank();
            w.doc(1, &[format!("@return {}", m.hint)]);
            w.line(
                1,
                &format!("public function {}(): {}", m.member.getter, m.declared),
            );
            w.line(1, "{");
            w.line(2, &format!("return $this->{};", field));
            w.line(1, "}");
        }

        w.line(0, "}");
        w.finish()
    }

    fn relative_path(&self, schema: &EntitySchema) -> PathBuf {
        let mut path = PathBuf::from("src");
        for segment in package_segments(&schema.package) {
            path.push(capitalize_first(segment));
        }
        path.push(format!("{}.{}", schema.name, self.file_extension()));
        path
    }
}
