use super::traits::collect_traits;
use super::types::{ApiSpec, HttpMethod, NodeKey, SpecNode};
use serde_json::Value;

/// Convert a YAML document into a JSON value, stringifying mapping keys.
///
/// RAML writes response status codes as bare integers (`200:`), which
/// YAML parses as integer keys; JSON objects only have string keys.
fn yaml_to_json(yaml: serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => serde_yaml::to_string(&other)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                };
                obj.insert(key, yaml_to_json(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Classify a parsed value into the tagged spec tree.
///
/// Mapping keys beginning with `/` become `Path` children and are
/// descended into; the four verb keys become `Verb` children whose
/// operation body is kept as a raw leaf; everything else is an `Other`
/// leaf. Non-mapping values are leaves.
fn classify(value: &Value) -> SpecNode {
    match value {
        Value::Object(map) => {
            let mut children = Vec::with_capacity(map.len());
            for (key, child) in map {
                if key.starts_with('/') {
                    children.push((NodeKey::Path(key.clone()), classify(child)));
                } else if let Some(method) = HttpMethod::from_key(key) {
                    children.push((NodeKey::Verb(method), SpecNode::Leaf(child.clone())));
                } else {
                    children.push((NodeKey::Other(key.clone()), SpecNode::Leaf(child.clone())));
                }
            }
            SpecNode::Map(children)
        }
        other => SpecNode::Leaf(other.clone()),
    }
}

/// Parse a RAML-style API description from its text.
pub fn parse_spec(content: &str) -> anyhow::Result<ApiSpec> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    let doc = yaml_to_json(yaml);

    let title = doc
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let version = doc
        .get("version")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let traits = collect_traits(&doc);
    let root = classify(&doc);

    tracing::debug!(%title, %version, traits = traits.len(), "parsed spec document");

    Ok(ApiSpec {
        title,
        version,
        traits,
        root,
    })
}

/// Read and parse a spec file.
pub fn load_spec(file_path: &str) -> anyhow::Result<ApiSpec> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read spec {file_path}: {e}"))?;
    parse_spec(&content)
}
