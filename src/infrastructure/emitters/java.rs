//! Java Emitter
//!
//! Renders a plain Java class: private fields, a default constructor, fluent
//! setters returning `this`, and getters.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::config::EmitConfig;
use crate::domain::entities::{EntitySchema, ResolvedClass, ResolvedMember};
use crate::domain::ports::TargetEmitter;
use crate::domain::value_objects::{SemanticTypeKind, Target, TypeMapping, ENTITY_PLACEHOLDER};
use crate::error::IdentifierRole;

use super::{package_segments, SourceWriter};

const KEYWORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Contextual keywords that cannot name a type but remain legal field names
const RESTRICTED_TYPE_NAMES: &[&str] = &["permits", "record", "sealed", "var", "yield"];

/// Java emitter
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

impl JavaEmitter {
    pub fn new() -> Self {
        Self
    }
}

/// `com.acme.Entity` spelling of a package
pub fn java_package(package: &str) -> String {
    package_segments(&package.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

/// Short name of a possibly qualified token (`java.util.Date` → `Date`)
fn simple_name(token: &str) -> &str {
    if is_importable(token) {
        token.rsplit('.').next().unwrap_or(token)
    } else {
        token
    }
}

fn is_importable(token: &str) -> bool {
    token.contains('.') && !token.contains(['<', '[', ' '])
}

fn boxed(simple: &str) -> &str {
    match simple {
        "boolean" => "Boolean",
        "byte" => "Byte",
        "char" => "Character",
        "short" => "Short",
        "int" => "Integer",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        other => other,
    }
}

/// Zero value for a non-nullable scalar spelled `spelled`; `true` marks a sentinel object
fn zero_literal(spelled: &str) -> (String, bool) {
    let literal = match simple_name(spelled) {
        "boolean" | "Boolean" => "false",
        "byte" | "Byte" | "short" | "Short" | "int" | "Integer" => "0",
        "long" | "Long" => "0L",
        "float" | "Float" => "0.0f",
        "double" | "Double" => "0.0",
        "char" | "Character" => "'\\0'",
        "String" | "CharSequence" => "\"\"",
        "BigDecimal" | "BigInteger" => return (format!("{}.ZERO", spelled), false),
        "Instant" => return (format!("{}.EPOCH", spelled), true),
        "UUID" => return (format!("new {}(0L, 0L)", spelled), true),
        "Date" => return (format!("new {}(0)", spelled), true),
        _ => return (format!("new {}()", spelled), true),
    };
    (literal.to_string(), false)
}

const LIST: &str = "java.util.List";
const ARRAY_LIST: &str = "java.util.ArrayList";

/// How each type token is spelled in one compilation unit, and what it imports
///
/// The class itself and same-package types own their simple names. A qualified
/// token is imported only when its simple name is still free; otherwise it is
/// written fully qualified.
struct TypeNames {
    spelled: HashMap<String, String>,
    imports: BTreeSet<String>,
}

impl TypeNames {
    fn new(class_name: &str, package: &str, members: &[ResolvedMember<'_>]) -> Self {
        let mut owners: HashMap<String, String> = HashMap::new();
        owners.insert(class_name.to_string(), class_name.to_string());
        for m in members {
            let token = m.type_token.as_str();
            if !is_importable(token) {
                owners
                    .entry(token.to_string())
                    .or_insert_with(|| token.to_string());
            }
        }

        let mut names = Self {
            spelled: HashMap::new(),
            imports: BTreeSet::new(),
        };
        for m in members {
            names.claim(&mut owners, &m.type_token, package);
            if m.field.list {
                names.claim(&mut owners, LIST, package);
                if !m.field.nullable {
                    names.claim(&mut owners, ARRAY_LIST, package);
                }
            }
        }
        names
    }

    fn claim(&mut self, owners: &mut HashMap<String, String>, token: &str, package: &str) {
        if !is_importable(token) || self.spelled.contains_key(token) {
            return;
        }
        let simple = simple_name(token);
        let taken = owners.get(simple).is_some_and(|owner| owner != token);
        let spelled = if taken {
            token
        } else {
            owners.insert(simple.to_string(), token.to_string());
            let implicit = token
                .rsplit_once('.')
                .is_some_and(|(pkg, _)| pkg == package || pkg == "java.lang");
            if !implicit {
                self.imports.insert(token.to_string());
            }
            simple
        };
        self.spelled.insert(token.to_string(), spelled.to_string());
    }

    fn spell<'t>(&'t self, token: &'t str) -> &'t str {
        self.spelled.get(token).map(String::as_str).unwrap_or(token)
    }
}

/// How one field is declared and initialized
struct JavaMember<'m> {
    member: &'m ResolvedMember<'m>,
    declared: String,
    default: String,
    sentinel: bool,
}

impl<'m> JavaMember<'m> {
    fn new(member: &'m ResolvedMember<'m>, names: &TypeNames) -> Self {
        let field = member.field;
        let spelled = names.spell(&member.type_token);

        let declared = if field.list {
            format!("{}<{}>", names.spell(LIST), boxed(spelled))
        } else if field.nullable {
            boxed(spelled).to_string()
        } else {
            spelled.to_string()
        };

        let (default, sentinel) = if field.nullable {
            ("null".to_string(), false)
        } else if field.list {
            (format!("new {}<>()", names.spell(ARRAY_LIST)), false)
        } else {
            zero_literal(spelled)
        };

        Self {
            member,
            declared,
            default,
            sentinel,
        }
    }

    fn doc_lines(&self) -> Vec<String> {
        let mut lines = vec![self.member.doc().to_string()];
        if self.sentinel {
            lines.push(format!("Sentinel default: {}", self.default));
        }
        lines
    }
}

impl TargetEmitter for JavaEmitter {
    fn target(&self) -> Target {
        Target::Java
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn default_type_mapping(&self) -> TypeMapping {
        TypeMapping::new()
            .with(SemanticTypeKind::Boolean, "boolean")
            .with(SemanticTypeKind::Integer, "int")
            .with(SemanticTypeKind::LongInteger, "long")
            .with(SemanticTypeKind::FloatingPoint, "double")
            .with(SemanticTypeKind::Text, "String")
            .with(SemanticTypeKind::DateTime, "java.util.Date")
            .with(SemanticTypeKind::IdentifierReference, "String")
            .with(SemanticTypeKind::NestedEntityReference, ENTITY_PLACEHOLDER)
    }

    fn is_reserved(&self, word: &str, role: IdentifierRole) -> bool {
        KEYWORDS.contains(&word)
            || (role != IdentifierRole::Field && RESTRICTED_TYPE_NAMES.contains(&word))
    }

    fn render(&self, class: &ResolvedClass<'_>, config: &EmitConfig) -> String {
        let name = class.name();
        let package = java_package(class.package());
        let names = TypeNames::new(name, &package, &class.members);
        let members: Vec<JavaMember<'_>> = class
            .members
            .iter()
            .map(|m| JavaMember::new(m, &names))
            .collect();

        let mut w = SourceWriter::new(&config.indent);
        w.header(config.header_text.as_deref());

        if !package.is_empty() {
            w.line(0, &format!("package {};", package));
            w.blank();
        }

        if !names.imports.is_empty() {
            for import in &names.imports {
                w.line(0, &format!("import {};", import));
            }
            w.blank();
        }

        let mut class_doc = vec![format!("Class {}", name)];
        if !class.description().is_empty() {
            class_doc.push(class.description().to_string());
        }
        if !package.is_empty() {
            class_doc.push(format!("@package {}", package));
        }
        w.doc(0, &class_doc);
        w.line(0, &format!("public class {}", name));
        w.line(0, "{");

        for m in &members {
            w.doc_compact(1, &m.doc_lines());
            w.line(
                1,
                &format!("private {} {} = {};", m.declared, m.member.name(), m.default),
            );
            w.blank();
        }

        w.doc(1, &[format!("{} default constructor", name)]);
        w.line(1, &format!("public {}() {{}}", name));
        w.blank();

        for m in &members {
            let field = m.member.name();

            w.doc(1, &[format!("@param {}", field), format!("@return {}", name)]);
            w.line(
                1,
                &format!(
                    "public {} {}({} {}) {{",
                    name, m.member.setter, m.declared, field
                ),
            );
            w.line(2, &format!("this.{0} = {0};", field));
            w.line(2, "return this;");
            w.line(1, "}");
            w.blank();

            w.doc(1, &[format!("@return {}", m.declared)]);
            w.line(1, &format!("public {} {}() {{", m.declared, m.member.getter));
            w.line(2, &format!("return this.{};", field));
            w.line(1, "}");
            w.blank();
        }

        w.line(0, "}");
        w.finish()
    }

    fn relative_path(&self, schema: &EntitySchema) -> PathBuf {
        let mut path = PathBuf::from("src");
        for segment in package_segments(&schema.package.to_lowercase()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", schema.name, self.file_extension()));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldDescriptor;
    use crate::domain::services::emit_with;
    use crate::domain::value_objects::SemanticType;

    fn emit(schema: &EntitySchema, config: &EmitConfig) -> String {
        emit_with(&JavaEmitter::new(), schema, config)
            .unwrap()
            .into_string()
    }

    fn config() -> EmitConfig {
        EmitConfig::for_target(Target::Java)
    }

    #[test]
    fn java_emitter_basics() {
        let emitter = JavaEmitter::new();
        assert_eq!(emitter.target(), Target::Java);
        assert_eq!(emitter.file_extension(), "java");
        assert_eq!(
            emitter.default_type_mapping().get(SemanticTypeKind::LongInteger),
            Some("long")
        );
    }

    #[test]
    fn keywords_are_reserved_case_sensitively() {
        let emitter = JavaEmitter::new();
        assert!(emitter.is_reserved("class", IdentifierRole::Field));
        assert!(emitter.is_reserved("null", IdentifierRole::Entity));
        assert!(!emitter.is_reserved("Class", IdentifierRole::Entity));
        assert!(!emitter.is_reserved("count", IdentifierRole::Field));
    }

    #[test]
    fn restricted_identifiers_cannot_name_types() {
        let emitter = JavaEmitter::new();
        for word in ["var", "record", "yield", "sealed", "permits"] {
            assert!(emitter.is_reserved(word, IdentifierRole::Entity), "{word}");
            assert!(emitter.is_reserved(word, IdentifierRole::EntityReference), "{word}");
            assert!(!emitter.is_reserved(word, IdentifierRole::Field), "{word}");
        }
    }

    #[test]
    fn class_named_like_import_uses_qualified_type() {
        let schema = EntitySchema::new("Date", "")
            .with_field(FieldDescriptor::new("at", SemanticType::DateTime).nullable(true))
            .with_field(FieldDescriptor::new("since", SemanticType::DateTime));
        let out = emit(&schema, &config());

        assert!(!out.contains("import java.util.Date;"));
        assert!(out.contains("    private java.util.Date at = null;
"));
        assert!(out.contains("    private java.util.Date since = new java.util.Date(0);
"));
        assert!(out.contains("public Date setSince(java.util.Date since) {"));
        assert!(out.contains("public java.util.Date getAt() {"));
    }

    #[test]
    fn class_named_list_qualifies_list_type() {
        let schema = EntitySchema::new("List", "")
            .with_field(FieldDescriptor::new("items", SemanticType::Text).list(true));
        let out = emit(&schema, &config());

        assert!(!out.contains("import java.util.List;"));
        assert!(out.contains("import java.util.ArrayList;
"));
        assert!(out.contains("    private java.util.List<String> items = new ArrayList<>();
"));
    }

    #[test]
    fn class_named_array_list_qualifies_constructor() {
        let schema = EntitySchema::new("ArrayList", "")
            .with_field(FieldDescriptor::new("items", SemanticType::Integer).list(true));
        let out = emit(&schema, &config());

        assert!(!out.contains("import java.util.ArrayList;"));
        assert!(out.contains("import java.util.List;
"));
        assert!(out.contains("    private List<Integer> items = new java.util.ArrayList<>();
"));
    }

    #[test]
    fn same_package_type_wins_over_import() {
        let schema = EntitySchema::new("Event", "")
            .with_field(FieldDescriptor::new("when", SemanticType::DateTime).nullable(true))
            .with_field(FieldDescriptor::new("day", SemanticType::nested("Date")).nullable(true));
        let out = emit(&schema, &config());

        assert!(!out.contains("import java.util.Date;"));
        assert!(out.contains("    private java.util.Date when = null;
"));
        assert!(out.contains("    private Date day = null;
"));
    }

    #[test]
    fn package_is_lowercased_and_dotted() {
        assert_eq!(java_package("Acme\\Tests/Entity"), "acme.tests.entity");
        assert_eq!(java_package(""), "");
    }

    #[test]
    fn relative_path_follows_package() {
        let schema = EntitySchema::new("UserStats", "").with_package("acme.tests.entity");
        assert_eq!(
            JavaEmitter::new().relative_path(&schema),
            PathBuf::from("src/acme/tests/entity/UserStats.java")
        );
        assert_eq!(
            JavaEmitter::new().relative_path(&EntitySchema::new("Plain", "")),
            PathBuf::from("src/Plain.java")
        );
    }

    #[test]
    fn empty_entity_has_only_constructor() {
        let out = emit(&EntitySchema::new("Empty", ""), &config());
        assert_eq!(
            out,
            "/**\n * Class Empty\n */\npublic class Empty\n{\n    /**\n     * Empty default constructor\n     */\n    public Empty() {}\n\n}\n"
        );
    }

    #[test]
    fn nullable_primitives_are_boxed() {
        let schema = EntitySchema::new("Counter", "")
            .with_field(FieldDescriptor::new("hits", SemanticType::LongInteger).nullable(true))
            .with_field(FieldDescriptor::new("misses", SemanticType::LongInteger));
        let out = emit(&schema, &config());

        assert!(out.contains("    private Long hits = null;\n"));
        assert!(out.contains("    private long misses = 0L;\n"));
        assert!(out.contains("public Counter setHits(Long hits) {"));
        assert!(out.contains("public long getMisses() {"));
    }

    #[test]
    fn zero_values_per_type() {
        let schema = EntitySchema::new("Zeroes", "")
            .with_field(FieldDescriptor::new("flag", SemanticType::Boolean))
            .with_field(FieldDescriptor::new("count", SemanticType::Integer))
            .with_field(FieldDescriptor::new("ratio", SemanticType::FloatingPoint))
            .with_field(FieldDescriptor::new("label", SemanticType::Text));
        let out = emit(&schema, &config());

        assert!(out.contains("private boolean flag = false;"));
        assert!(out.contains("private int count = 0;"));
        assert!(out.contains("private double ratio = 0.0;"));
        assert!(out.contains("private String label = \"\";"));
    }

    #[test]
    fn sentinel_defaults_are_documented() {
        let schema = EntitySchema::new("Order", "")
            .with_field(
                FieldDescriptor::new("placedAt", SemanticType::DateTime)
                    .with_description("When the order was placed"),
            )
            .with_field(FieldDescriptor::new("shipTo", SemanticType::nested("Address")));
        let out = emit(&schema, &config());

        assert!(out.contains(
            "    /**\n     * When the order was placed\n     * Sentinel default: new Date(0)\n     */\n    private Date placedAt = new Date(0);\n"
        ));
        assert!(out.contains("private Address shipTo = new Address();"));
        assert!(out.contains("import java.util.Date;\n"));
    }

    #[test]
    fn lists_use_boxed_element_types() {
        let schema = EntitySchema::new("Series", "")
            .with_field(FieldDescriptor::new("points", SemanticType::Integer).list(true))
            .with_field(
                FieldDescriptor::new("tags", SemanticType::Text)
                    .list(true)
                    .nullable(true),
            );
        let out = emit(&schema, &config());

        assert!(out.contains("import java.util.ArrayList;\nimport java.util.List;\n\n"));
        assert!(out.contains("private List<Integer> points = new ArrayList<>();"));
        assert!(out.contains("private List<String> tags = null;"));
        assert!(out.contains("public List<Integer> getPoints() {"));
    }

    #[test]
    fn qualified_override_is_imported_once() {
        let schema = EntitySchema::new("Audit", "")
            .with_field(FieldDescriptor::new("createdAt", SemanticType::DateTime))
            .with_field(FieldDescriptor::new("updatedAt", SemanticType::DateTime).nullable(true));
        let config = config().with_type(SemanticTypeKind::DateTime, "java.time.Instant");
        let out = emit(&schema, &config);

        assert_eq!(out.matches("import java.time.Instant;").count(), 1);
        assert!(out.contains("private Instant createdAt = Instant.EPOCH;"));
        assert!(out.contains("private Instant updatedAt = null;"));
    }

    #[test]
    fn setter_returns_receiver() {
        let schema = EntitySchema::new("Tag", "")
            .with_field(FieldDescriptor::new("label", SemanticType::Text));
        let out = emit(&schema, &config());

        assert!(out.contains(
            "    public Tag setLabel(String label) {\n        this.label = label;\n        return this;\n    }\n"
        ));
        assert!(out.contains("    public String getLabel() {\n        return this.label;\n    }\n"));
    }

    #[test]
    fn indent_and_header_come_from_config() {
        let schema = EntitySchema::new("Tag", "")
            .with_field(FieldDescriptor::new("label", SemanticType::Text));
        let config = config().with_indent("\t").with_header("// generated\n");
        let out = emit(&schema, &config);

        assert!(out.starts_with("// generated\n\n/**\n"));
        assert!(out.contains("\n\tprivate String label = \"\";\n"));
        assert!(out.contains("\n\t\treturn this;\n"));
    }
}
