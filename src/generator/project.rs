use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::client_config::ClientConfig;
use super::infer::response_declarations;
use super::names::check_name_collisions;
use super::params::derive_param_fields;
use super::templates::{method_def, render_client, ClientTemplateData, ParamInterfaceDef};
use crate::spec::{extract_endpoints, load_spec, resolve_traits, ApiSpec, Endpoint};
use crate::validator::fail_if_issues;

/// Extract, trait-resolve, and order the endpoint set for a parsed spec.
pub fn build_endpoints(spec: &ApiSpec) -> anyhow::Result<Vec<Endpoint>> {
    let mut endpoints = extract_endpoints(spec)?;
    resolve_traits(&mut endpoints, &spec.traits)?;
    Ok(endpoints)
}

/// Render the complete client source unit for a parsed spec.
///
/// All derivation and validation happens before rendering returns, so a
/// caller that writes the result to disk never writes a partial unit.
pub fn render_client_from_api(spec: &ApiSpec, config: &ClientConfig) -> anyhow::Result<String> {
    let endpoints = build_endpoints(spec)?;

    let mut issues = Vec::new();
    check_name_collisions(&endpoints, &mut issues);

    let mut methods = Vec::with_capacity(endpoints.len());
    let mut param_interfaces = Vec::new();
    let mut response_types = Vec::new();
    for endpoint in &endpoints {
        let fields = derive_param_fields(endpoint, &mut issues);
        methods.push(method_def(endpoint, &fields));
        if !fields.is_empty() {
            param_interfaces.push(ParamInterfaceDef {
                doc: endpoint.description.clone(),
                name: format!("{}Param", endpoint.interface_name),
                fields,
            });
        }
        if let Some(example) = &endpoint.response_example {
            let root = format!("{}Response", endpoint.interface_name);
            response_types.extend(
                response_declarations(&root, example)
                    .iter()
                    .map(|decl| decl.render()),
            );
        }
    }
    fail_if_issues(issues)?;

    render_client(&ClientTemplateData::new(
        spec.title.clone(),
        spec.version.clone(),
        config,
        methods,
        param_interfaces,
        response_types,
    ))
}

/// Generate the client file for a spec on disk.
///
/// The output defaults to `api.ts` beside the spec. An existing output
/// is left untouched unless `force` is set.
pub fn generate_client(
    spec_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    force: bool,
) -> anyhow::Result<PathBuf> {
    let spec_str = spec_path
        .to_str()
        .context("spec path is not valid UTF-8")?;
    let spec = load_spec(spec_str)?;
    let config = ClientConfig::load(config_path, spec_path)?;
    let rendered = render_client_from_api(&spec, &config)?;

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| spec_path.with_file_name("api.ts"));
    if out_path.exists() && !force {
        println!("⚠️  Skipping existing client file: {out_path:?} (use --force to overwrite)");
        return Ok(out_path);
    }
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&out_path, rendered)?;
    println!("✅ Generated client: {out_path:?}");
    Ok(out_path)
}
