use super::names::to_pascal_case;
use serde_json::Value;

/// Structural type inferred from a single example JSON value.
///
/// Built bottom-up in one pass and never mutated afterwards; arrays take
/// their element type from the first element only.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    String,
    Number,
    Boolean,
    Null,
    /// Element type of an empty array; nothing constrains it.
    Unknown,
    Array(Box<TypeNode>),
    /// Field name to child type, in example order.
    Object(Vec<(String, TypeNode)>),
}

/// Infer the structural type of an example value.
pub fn infer_type(value: &Value) -> TypeNode {
    match value {
        Value::Null => TypeNode::Null,
        Value::Bool(_) => TypeNode::Boolean,
        Value::Number(_) => TypeNode::Number,
        Value::String(_) => TypeNode::String,
        Value::Array(items) => TypeNode::Array(Box::new(
            items.first().map(infer_type).unwrap_or(TypeNode::Unknown),
        )),
        Value::Object(map) => TypeNode::Object(
            map.iter().map(|(k, v)| (k.clone(), infer_type(v))).collect(),
        ),
    }
}

/// One field of an emitted interface; the name is already quoted when the
/// JSON key is not a bare TypeScript identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TsField {
    pub name: String,
    pub ts_type: String,
}

/// An emitted response type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TsDeclaration {
    Interface { name: String, fields: Vec<TsField> },
    /// Non-object roots (arrays, primitives) become a type alias.
    Alias { name: String, ts_type: String },
}

impl TsDeclaration {
    pub fn name(&self) -> &str {
        match self {
            TsDeclaration::Interface { name, .. } | TsDeclaration::Alias { name, .. } => name,
        }
    }

    pub fn render(&self) -> String {
        match self {
            TsDeclaration::Interface { name, fields } => {
                let mut out = format!("export interface {name} {{\n");
                for field in fields {
                    out.push_str(&format!("  {}: {};\n", field.name, field.ts_type));
                }
                out.push('}');
                out
            }
            TsDeclaration::Alias { name, ts_type } => {
                format!("export type {name} = {ts_type};")
            }
        }
    }
}

fn quote_field(name: &str) -> String {
    let mut chars = name.chars();
    let bare = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if bare {
        name.to_string()
    } else {
        format!("{name:?}")
    }
}

/// Render a node as a TypeScript type expression, minting an interface
/// declaration for every object encountered. Nested interfaces are named
/// by the field path below the root, so no two declarations collide as
/// long as root names are unique.
fn type_expr(node: &TypeNode, name: &str, decls: &mut Vec<TsDeclaration>) -> String {
    match node {
        TypeNode::String => "string".to_string(),
        TypeNode::Number => "number".to_string(),
        TypeNode::Boolean => "boolean".to_string(),
        TypeNode::Null => "null".to_string(),
        TypeNode::Unknown => "unknown".to_string(),
        TypeNode::Array(element) => format!("{}[]", type_expr(element, name, decls)),
        TypeNode::Object(fields) => {
            let mut ts_fields = Vec::with_capacity(fields.len());
            let mut nested = Vec::new();
            for (field_name, field_node) in fields {
                let child_name = format!("{name}{}", to_pascal_case(field_name));
                ts_fields.push(TsField {
                    name: quote_field(field_name),
                    ts_type: type_expr(field_node, &child_name, &mut nested),
                });
            }
            decls.push(TsDeclaration::Interface {
                name: name.to_string(),
                fields: ts_fields,
            });
            decls.append(&mut nested);
            name.to_string()
        }
    }
}

/// All type declarations for one endpoint's response example. The root
/// declaration is always named `root_name`; an object example becomes an
/// interface, anything else a type alias (a root array names its element
/// interface `<root_name>Item`).
pub fn response_declarations(root_name: &str, example: &Value) -> Vec<TsDeclaration> {
    let node = infer_type(example);
    let mut decls = Vec::new();
    match &node {
        TypeNode::Object(_) => {
            type_expr(&node, root_name, &mut decls);
        }
        other => {
            let ts_type = type_expr(other, &format!("{root_name}Item"), &mut decls);
            decls.insert(
                0,
                TsDeclaration::Alias {
                    name: root_name.to_string(),
                    ts_type,
                },
            );
        }
    }
    decls
}
