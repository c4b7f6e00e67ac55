use crate::spec::Endpoint;
use crate::validator::ValidationIssue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[allow(clippy::unwrap_used)]
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^/{}]+)\}").unwrap());

/// Convert an underscore-joined string to PascalCase.
///
/// Each word is capitalized and the remainder lowercased, so the verb
/// segment of `GET_rooms_info` comes out as `Get`, not `GET`.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// camelCase form: PascalCase with the first character lowered.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// kebab-case form of a camelCase identifier, for CLI command names.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// Placeholder names appearing in a URI template, in order.
pub fn path_placeholders(uri: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(uri)
        .map(|c| c[1].to_string())
        .collect()
}

/// Canonical PascalCase identifier for one method+URI pair.
///
/// A trailing placeholder segment gets a literal `info` segment appended
/// BEFORE all placeholders are stripped; that ordering keeps
/// `GET /rooms` (`GetRooms`) and `GET /rooms/{room_id}` (`GetRoomsInfo`)
/// apart, which strip-only naming would collapse.
pub fn derive_interface_name(method: &str, uri: &str) -> String {
    let mut segments: Vec<&str> = uri.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last().map(|s| is_placeholder(s)).unwrap_or(false) {
        segments.push("info");
    }
    let literals: Vec<&str> = segments.into_iter().filter(|s| !is_placeholder(s)).collect();
    to_pascal_case(&format!("{}_{}", method, literals.join("_")))
}

/// camelCase method name for one method+URI pair.
pub fn derive_function_name(method: &str, uri: &str) -> String {
    to_camel_case(&derive_interface_name(method, uri))
}

/// Post-pass uniqueness check over the full endpoint set.
///
/// `derive_interface_name` is injective for every spec seen in practice;
/// a collision means the naming scheme broke down for this document and
/// the generated interfaces would silently shadow each other.
pub fn check_name_collisions(endpoints: &[Endpoint], issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, &Endpoint> = HashMap::new();
    for endpoint in endpoints {
        if let Some(previous) = seen.insert(endpoint.interface_name.as_str(), endpoint) {
            issues.push(ValidationIssue::new(
                format!("{} {}", endpoint.method.verb(), endpoint.uri),
                "NameCollision",
                format!(
                    "interface name {} already derived for {} {}",
                    endpoint.interface_name,
                    previous.method.verb(),
                    previous.uri
                ),
            ));
        }
    }
}
