use serde::Deserialize;
use std::path::PathBuf;

fn default_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_limit() -> usize {
    100
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            default_limit: default_limit(),
        }
    }
}

fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/hubscout/config.toml"))
}

/// Loads `~/.config/hubscout/config.toml` when present, then applies
/// `HF_ENDPOINT` / `HF_TOKEN` environment overrides.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    let mut settings = if path.exists() {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)?
    } else {
        Settings::default()
    };

    if let Ok(endpoint) = std::env::var("HF_ENDPOINT") {
        if !endpoint.is_empty() {
            settings.endpoint = endpoint;
        }
    }
    if let Ok(token) = std::env::var("HF_TOKEN") {
        if !token.is_empty() {
            settings.token = Some(token);
        }
    }
    settings.endpoint = settings.endpoint.trim_end_matches('/').to_string();
    Ok(settings)
}
