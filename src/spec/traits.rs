use super::build::response_example;
use super::types::{Endpoint, TraitMap};
use crate::validator::{fail_if_issues, ValidationIssue};
use serde_json::Value;

/// Flatten the document's `traits` sequence into one name-to-body map.
///
/// RAML writes traits as a sequence of single-entry named mappings; a
/// duplicated name silently overwrites the earlier declaration
/// (last-wins).
pub fn collect_traits(doc: &Value) -> TraitMap {
    let mut map = TraitMap::new();
    let Some(entries) = doc.get("traits").and_then(|v| v.as_array()) else {
        return map;
    };
    for entry in entries {
        if let Value::Object(obj) = entry {
            for (name, body) in obj {
                map.insert(name.clone(), body.clone());
            }
        }
    }
    map
}

/// Fill in missing response examples from referenced traits.
///
/// Only endpoints with no declared response and at least one trait
/// reference are touched; the first referenced trait that declares a 200
/// JSON example wins. An endpoint whose traits declare no example stays
/// typeless.
pub fn resolve_traits(endpoints: &mut [Endpoint], traits: &TraitMap) -> anyhow::Result<()> {
    let mut issues = Vec::new();
    for endpoint in endpoints
        .iter_mut()
        .filter(|e| e.response_example.is_none() && !e.trait_refs.is_empty())
    {
        let location = format!("{} {}", endpoint.method.verb(), endpoint.uri);
        for trait_name in &endpoint.trait_refs {
            let Some(body) = traits.get(trait_name) else {
                continue;
            };
            if let Some(example) = response_example(body.get("responses"), &location, &mut issues) {
                endpoint.response_example = Some(example);
                break;
            }
        }
    }
    fail_if_issues(issues)
}
