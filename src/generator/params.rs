use crate::spec::{Endpoint, ParamDecl};
use crate::validator::ValidationIssue;

/// One field of a generated `…Param` interface.
#[derive(Debug, Clone)]
pub struct ParamField {
    /// Field name as emitted; optional fields carry a `?` suffix.
    pub name: String,
    pub required: bool,
    /// Emitted TypeScript type expression.
    pub ts_type: String,
    /// Single-line label rendered as the field's doc comment.
    pub display: String,
}

/// Resolve a declared parameter kind to a TypeScript type.
///
/// The wire protocol encodes boolean parameters as the integers 0/1, so
/// `boolean` maps to the literal union `0|1`, never to `boolean`.
fn resolve_kind(decl: &ParamDecl, location: &str, issues: &mut Vec<ValidationIssue>) -> String {
    // Enum literals override the declared kind entirely.
    if let Some(values) = decl.enum_values.as_ref().filter(|v| !v.is_empty()) {
        return format!("'{}'", values.join("'|'"));
    }
    match decl.kind.as_deref() {
        Some("integer") | Some("number") => "number".to_string(),
        Some("boolean") => "0|1".to_string(),
        Some("string") | None => "string".to_string(),
        Some("file") => "Buffer".to_string(),
        Some(other) => {
            issues.push(ValidationIssue::new(
                location,
                "UnknownParamKind",
                format!("parameter {} has unrecognized type '{}'", decl.name, other),
            ));
            "string".to_string()
        }
    }
}

/// Derive the `…Param` interface fields for one endpoint, preserving
/// declaration order.
pub fn derive_param_fields(endpoint: &Endpoint, issues: &mut Vec<ValidationIssue>) -> Vec<ParamField> {
    let location = format!("{} {}", endpoint.method.verb(), endpoint.uri);
    endpoint
        .params
        .iter()
        .map(|decl| {
            let ts_type = resolve_kind(decl, &location, issues);
            let name = if decl.required {
                decl.name.clone()
            } else {
                format!("{}?", decl.name)
            };
            let display = decl
                .display_name
                .as_deref()
                .or(decl.description.as_deref())
                .unwrap_or_default()
                .replace('\n', "");
            ParamField {
                name,
                required: decl.required,
                ts_type,
                display,
            }
        })
        .collect()
}
