//! Output configuration for the generated client.
//!
//! A `raml2ts.yaml` sitting alongside the API description can override
//! the wire constants baked into the emitted source.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Value of the emitted base-URL constant.
    pub base_url: String,
    /// Name of the emitted client class.
    pub class_name: String,
    /// Request header carrying the access credential.
    pub token_header: String,
    /// Environment variable the client falls back to for the credential.
    pub token_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "https://api.chatwork.com/v2".to_string(),
            class_name: "ChatworkApi".to_string(),
            token_header: "X-ChatWorkToken".to_string(),
            token_env: "CHATWORK_API_TOKEN".to_string(),
        }
    }
}

impl ClientConfig {
    pub const FILE_NAME: &'static str = "raml2ts.yaml";

    /// Load from an explicit path, else auto-detect next to the spec,
    /// else fall back to the defaults.
    pub fn load(explicit: Option<&Path>, spec_path: &Path) -> anyhow::Result<Self> {
        let path: Option<PathBuf> = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let candidate = spec_path
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(Self::FILE_NAME);
                candidate.exists().then_some(candidate)
            }
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read client config {}", path.display()))?;
        let config: ClientConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse client config {}", path.display()))?;
        println!("✅ Loaded client config from {}", path.display());
        Ok(config)
    }
}
