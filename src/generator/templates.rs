use askama::Template;

use super::client_config::ClientConfig;
use super::params::ParamField;
use crate::spec::Endpoint;

/// One generated client method, fully pre-rendered except for layout.
#[derive(Debug, Clone)]
pub struct MethodDef {
    pub doc: String,
    pub name: String,
    /// Complete argument list: path placeholders first, then the
    /// aggregated parameter object when the endpoint declares any.
    pub signature: String,
    /// Dispatch helper the body calls (get/post/postFile/put/delete).
    pub helper: &'static str,
    /// `<XResponse>` annotation, or empty for typeless endpoints.
    pub generic: String,
    /// URI template rewritten for interpolation (`{x}` → `${x}`).
    pub url: String,
    /// Trailing call arguments (`, params` or nothing).
    pub args: String,
}

/// One generated `…Param` interface.
#[derive(Debug, Clone)]
pub struct ParamInterfaceDef {
    pub doc: String,
    pub name: String,
    pub fields: Vec<ParamField>,
}

/// Template data for the emitted client source unit.
#[derive(Template)]
#[template(path = "client.ts.txt", escape = "none")]
pub struct ClientTemplateData {
    pub title: String,
    pub version: String,
    pub base_url: String,
    pub class_name: String,
    pub token_header: String,
    pub token_env: String,
    pub methods: Vec<MethodDef>,
    pub param_interfaces: Vec<ParamInterfaceDef>,
    /// Pre-rendered response type declarations, in endpoint order.
    pub response_types: Vec<String>,
}

/// Assemble the method definition for one endpoint.
///
/// The parameter object is optional iff the endpoint declares zero
/// required parameters, and omitted entirely when nothing is declared
/// (the dispatch helpers default it).
pub fn method_def(endpoint: &Endpoint, fields: &[ParamField]) -> MethodDef {
    let mut args: Vec<String> = endpoint
        .path_params
        .iter()
        .map(|p| format!("{p}: string | number"))
        .collect();
    let has_params = !fields.is_empty();
    if has_params {
        let marker = if fields.iter().any(|f| f.required) {
            ""
        } else {
            "?"
        };
        args.push(format!("params{marker}: {}Param", endpoint.interface_name));
    }
    let generic = if endpoint.response_example.is_some() {
        format!("<{}Response>", endpoint.interface_name)
    } else {
        String::new()
    };
    MethodDef {
        doc: endpoint.description.clone(),
        name: endpoint.function_name.clone(),
        signature: args.join(", "),
        helper: endpoint.method.helper(),
        generic,
        url: endpoint.uri.replace('{', "${"),
        args: if has_params {
            ", params".to_string()
        } else {
            String::new()
        },
    }
}

pub fn render_client(data: &ClientTemplateData) -> anyhow::Result<String> {
    Ok(data.render()?)
}

impl ClientTemplateData {
    pub fn new(
        title: String,
        version: String,
        config: &ClientConfig,
        methods: Vec<MethodDef>,
        param_interfaces: Vec<ParamInterfaceDef>,
        response_types: Vec<String>,
    ) -> Self {
        ClientTemplateData {
            title,
            version,
            base_url: config.base_url.clone(),
            class_name: config.class_name.clone(),
            token_header: config.token_header.clone(),
            token_env: config.token_env.clone(),
            methods,
            param_interfaces,
            response_types,
        }
    }
}
