use crate::domain::models::{ModelConfig, ModelInfo};
use crate::services::settings::Settings;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::Duration;

const REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(thiserror::Error, Debug)]
pub enum HubError {
    #[error("model not found: {0}")]
    ModelNotFound(String),
}

fn client() -> anyhow::Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
        .build()?)
}

fn get(settings: &Settings, url: &str) -> anyhow::Result<reqwest::blocking::Response> {
    let mut req = client()?.get(url);
    if let Some(token) = &settings.token {
        req = req.bearer_auth(token);
    }
    Ok(req.send()?)
}

/// Builds the catalog search URL. A free-text query searches the whole
/// pytorch catalog; the category filter only applies when browsing
/// without a query.
fn search_url(
    endpoint: &str,
    query: Option<&str>,
    category: Option<&str>,
    limit: usize,
) -> String {
    let filter = match (query, category) {
        (None, Some(c)) => format!("{c},pytorch"),
        _ => "pytorch".to_string(),
    };
    let mut url = format!(
        "{}/api/models?filter={}&sort=downloads&direction=-1&limit={}",
        endpoint,
        urlencoding::encode(&filter),
        limit
    );
    if let Some(q) = query {
        url.push_str("&search=");
        url.push_str(&urlencoding::encode(q));
    }
    url
}

/// Searches the hub for pytorch models, most downloaded first. Either a
/// free-text query or a category (pipeline tag) narrows the results;
/// the caller decides what an empty result set means.
pub fn search_models(
    settings: &Settings,
    query: Option<&str>,
    category: Option<&str>,
    limit: usize,
) -> anyhow::Result<Vec<ModelInfo>> {
    let url = search_url(&settings.endpoint, query, category, limit);
    let resp = get(settings, &url)?.error_for_status()?;
    Ok(resp.json()?)
}

/// Fetches one model's full metadata, including its current revision.
pub fn model_info(settings: &Settings, model_id: &str) -> anyhow::Result<ModelInfo> {
    let url = format!("{}/api/models/{}", settings.endpoint, model_id);
    let resp = get(settings, &url)?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(HubError::ModelNotFound(model_id.to_string()).into());
    }
    Ok(resp.error_for_status()?.json()?)
}

fn config_cache_path(model_id: &str, revision: &str) -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    let mut hasher = Sha256::new();
    hasher.update(format!("{model_id}@{revision}").as_bytes());
    let id = hex::encode(hasher.finalize());
    Ok(PathBuf::from(home)
        .join(".cache")
        .join("hubscout")
        .join("configs")
        .join(format!("{}.json", id)))
}

/// Downloads a model's `config.json`, pinned to its listed revision
/// when known. Downloads are cached by model id and revision; a cache
/// hit skips the network entirely.
pub fn fetch_config(settings: &Settings, model: &ModelInfo) -> anyhow::Result<ModelConfig> {
    let revision = model.sha.as_deref().unwrap_or("main");
    let cache = config_cache_path(&model.id, revision)?;
    if cache.exists() {
        let raw = std::fs::read_to_string(cache)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let url = format!(
        "{}/{}/resolve/{}/config.json",
        settings.endpoint, model.id, revision
    );
    let resp = get(settings, &url)?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(HubError::ModelNotFound(model.id.clone()).into());
    }
    let body = resp.error_for_status()?.text()?;
    if let Some(parent) = cache.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&cache, &body)?;
    Ok(serde_json::from_str(&body)?)
}
