use super::types::{ApiSpec, Endpoint, HttpMethod, NodeKey, ParamDecl, SpecNode};
use crate::generator::names::{derive_function_name, derive_interface_name, path_placeholders};
use crate::validator::{fail_if_issues, ValidationIssue};
use serde_json::Value;

/// Normalize a description to a single line.
///
/// RAML multi-line descriptions keep a leading `|` marker once the
/// document has been reflowed; strip it along with embedded newlines.
fn normalize_description(raw: Option<&Value>) -> String {
    let Some(text) = raw.and_then(|v| v.as_str()) else {
        return String::new();
    };
    let text = text.trim_start();
    let text = text.strip_prefix('|').map(str::trim_start).unwrap_or(text);
    text.replace('\n', "")
}

/// Interpret a declared example body.
///
/// Examples are usually written as a JSON string inside the YAML
/// document; structured YAML examples are accepted as-is. A string that
/// does not parse as JSON is a spec defect.
pub(crate) fn parse_example(
    value: &Value,
    location: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Value> {
    match value {
        Value::String(s) => {
            let text = s.trim_start().strip_prefix('|').unwrap_or(s).trim();
            match serde_json::from_str(text) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    issues.push(ValidationIssue::new(
                        location,
                        "InvalidExample",
                        format!("example body is not valid JSON: {e}"),
                    ));
                    None
                }
            }
        }
        other => Some(other.clone()),
    }
}

/// Dig the 200-response JSON example out of a `responses` block.
pub(crate) fn response_example(
    responses: Option<&Value>,
    location: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Value> {
    let example = responses?
        .get("200")?
        .get("body")?
        .get("application/json")?
        .get("example")?;
    parse_example(example, location, issues)
}

fn parse_param_decls(map: Option<&Value>, out: &mut Vec<ParamDecl>) {
    let Some(Value::Object(map)) = map else {
        return;
    };
    for (name, decl) in map {
        let enum_values = decl.get("enum").and_then(|v| v.as_array()).map(|values| {
            values
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()
        });
        out.push(ParamDecl {
            name: name.clone(),
            required: decl.get("required").and_then(|v| v.as_bool()).unwrap_or(false),
            kind: decl.get("type").and_then(|v| v.as_str()).map(String::from),
            enum_values,
            display_name: decl
                .get("displayName")
                .and_then(|v| v.as_str())
                .map(String::from),
            description: decl
                .get("description")
                .and_then(|v| v.as_str())
                .map(String::from),
        });
    }
}

/// Declared parameters of one operation: `queryParameters` first, then
/// url-encoded `formParameters`, each in declaration order.
fn extract_params(op: &Value) -> Vec<ParamDecl> {
    let mut params = Vec::new();
    parse_param_decls(op.get("queryParameters"), &mut params);
    let form = op
        .get("body")
        .and_then(|b| b.get("application/x-www-form-urlencoded"))
        .and_then(|b| b.get("formParameters"));
    parse_param_decls(form, &mut params);
    params
}

fn parse_operation(
    method: HttpMethod,
    op: &Value,
    uri: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Endpoint {
    let location = format!("{} {}", method.verb(), uri);
    let params = extract_params(op);

    // A multipart upload is still written as POST in the spec; the
    // file-typed parameter is the routing signal.
    let method = if method == HttpMethod::Post
        && params.iter().any(|p| p.kind.as_deref() == Some("file"))
    {
        HttpMethod::PostFile
    } else {
        method
    };

    let trait_refs = op
        .get("is")
        .and_then(|v| v.as_array())
        .map(|refs| {
            refs.iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let interface_name = derive_interface_name(method.verb(), uri);
    let function_name = derive_function_name(method.verb(), uri);

    Endpoint {
        method,
        uri: uri.to_string(),
        description: normalize_description(op.get("description")),
        interface_name,
        function_name,
        path_params: path_placeholders(uri),
        params,
        response_example: response_example(op.get("responses"), &location, issues),
        trait_refs,
    }
}

fn collect_operations(
    node: &SpecNode,
    uri: &str,
    out: &mut Vec<Endpoint>,
    issues: &mut Vec<ValidationIssue>,
) {
    let SpecNode::Map(children) = node else {
        return;
    };
    for (key, child) in children {
        if let (NodeKey::Verb(method), SpecNode::Leaf(op)) = (key, child) {
            out.push(parse_operation(*method, op, uri, issues));
        }
    }
}

/// Depth-first walk over the path tree. For each path key the nested
/// URIs are visited before the node's own operations, so
/// `/rooms/{room_id}/messages` precedes `/rooms/{room_id}` in the
/// output, matching document traversal order.
fn walk(node: &SpecNode, prefix: &str, out: &mut Vec<Endpoint>, issues: &mut Vec<ValidationIssue>) {
    let SpecNode::Map(children) = node else {
        return;
    };
    for (key, child) in children {
        if let NodeKey::Path(segment) = key {
            let uri = format!("{prefix}{segment}");
            walk(child, &uri, out, issues);
            collect_operations(child, &uri, out, issues);
        }
    }
}

/// Produce the complete ordered endpoint list for a parsed spec.
///
/// A path node with no operation children contributes nothing; the tree
/// may contain grouping or documentation-only nodes.
pub fn extract_endpoints(spec: &ApiSpec) -> anyhow::Result<Vec<Endpoint>> {
    let mut endpoints = Vec::new();
    let mut issues = Vec::new();
    walk(&spec.root, "", &mut endpoints, &mut issues);
    fail_if_issues(issues)?;
    tracing::debug!(count = endpoints.len(), "extracted endpoints");
    Ok(endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::parse_spec;

    fn endpoints(src: &str) -> Vec<Endpoint> {
        extract_endpoints(&parse_spec(src).unwrap()).unwrap()
    }

    #[test]
    fn test_nested_paths_visited_before_own_operations() {
        let eps = endpoints(
            r#"
"/rooms":
  GET:
    description: room list
  "/{room_id}":
    GET:
      description: one room
    "/messages":
      GET:
        description: messages
"#,
        );
        let uris: Vec<&str> = eps.iter().map(|e| e.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec!["/rooms/{room_id}/messages", "/rooms/{room_id}", "/rooms"]
        );
    }

    #[test]
    fn test_grouping_node_yields_no_endpoints() {
        let eps = endpoints("\"/docs\":\n  description: prose only\n");
        assert!(eps.is_empty());
    }

    #[test]
    fn test_file_param_routes_to_multipart_post() {
        let eps = endpoints(
            r#"
"/rooms":
  "/{room_id}":
    "/files":
      POST:
        body:
          application/x-www-form-urlencoded:
            formParameters:
              file:
                type: file
                required: true
              file_name:
                type: string
"#,
        );
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].method, HttpMethod::PostFile);
        assert_eq!(eps[0].params.len(), 2);
        assert_eq!(eps[0].params[0].name, "file");
    }

    #[test]
    fn test_string_example_parsed_as_json() {
        let eps = endpoints(
            r#"
"/me":
  GET:
    responses:
      200:
        body:
          application/json:
            example: |
              {"account_id": 123}
"#,
        );
        let example = eps[0].response_example.as_ref().unwrap();
        assert_eq!(example["account_id"], 123);
    }

    #[test]
    fn test_invalid_json_example_is_fatal() {
        let spec = parse_spec(
            r#"
"/me":
  GET:
    responses:
      200:
        body:
          application/json:
            example: "{not json"
"#,
        )
        .unwrap();
        assert!(extract_endpoints(&spec).is_err());
    }

    #[test]
    fn test_description_normalized_to_single_line() {
        let eps = endpoints(
            "\"/me\":\n  GET:\n    description: |\n      first line\n      second line\n",
        );
        assert_eq!(eps[0].description, "first linesecond line");
    }
}
