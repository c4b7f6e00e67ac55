use serde_json::Value;
use std::collections::HashMap;

/// HTTP verb of an endpoint, plus the multipart upload variant.
///
/// `PostFile` is a plain POST on the wire; it is split out because the
/// generated client dispatches it through a multipart form helper instead
/// of the url-encoded body helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    PostFile,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parse a spec tree key. Keys are matched case-sensitively; anything
    /// other than the four upper-case verbs is not a verb key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// The wire verb, as used for name derivation.
    pub fn verb(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post | HttpMethod::PostFile => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Name of the private dispatch helper the generated method calls.
    pub fn helper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::PostFile => "postFile",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// Classification of a key inside a spec mapping node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKey {
    /// A nested URI segment; keys beginning with `/`.
    Path(String),
    /// An operation key (GET/POST/PUT/DELETE, case-sensitive).
    Verb(HttpMethod),
    /// Anything else: `description`, `displayName`, documentation blocks.
    Other(String),
}

/// Generic tagged tree produced by the loader.
///
/// Only the routing structure is classified; operation bodies under a
/// verb key stay as raw JSON values and are interpreted by the extractor.
#[derive(Debug, Clone)]
pub enum SpecNode {
    /// A mapping node with children in document order.
    Map(Vec<(NodeKey, SpecNode)>),
    /// A scalar, sequence, or an operation body.
    Leaf(Value),
}

/// A trait name to trait body mapping; bodies keep their raw shape.
pub type TraitMap = HashMap<String, Value>;

/// A parsed API description: document metadata, merged traits, and the
/// classified path tree.
#[derive(Debug, Clone)]
pub struct ApiSpec {
    pub title: String,
    pub version: String,
    pub traits: TraitMap,
    pub root: SpecNode,
}

/// One declared query or body parameter, as written in the spec.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    pub name: String,
    pub required: bool,
    /// Declared `type` (integer, boolean, string, file, ...), if any.
    pub kind: Option<String>,
    /// Literal values; when present they override the declared kind.
    pub enum_values: Option<Vec<String>>,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

/// Normalized representation of one method+URI pair, built once by the
/// extractor and immutable afterwards (trait resolution may fill in a
/// missing `response_example`).
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub uri: String,
    /// Free-text description, normalized to a single line.
    pub description: String,
    /// PascalCase identifier, unique per method+URI across the spec.
    pub interface_name: String,
    /// camelCase derivative of `interface_name`.
    pub function_name: String,
    /// Placeholder names extracted from `uri`, in order of appearance.
    pub path_params: Vec<String>,
    /// Declared parameters, in declaration order.
    pub params: Vec<ParamDecl>,
    /// Example 200-response body, if the endpoint declares one.
    pub response_example: Option<Value>,
    /// Trait names this endpoint includes; only used until resolution.
    pub trait_refs: Vec<String>,
}
