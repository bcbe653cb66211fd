use crate::domain::languages::is_english_eligible;
use crate::domain::models::{Candidate, Ledger, ModelInfo};
use crate::domain::tasks::to_supported_task;
use crate::hub;
use crate::services::settings::Settings;
use tracing::{info, warn};

/// Drops models that fail the English check or are already recorded in
/// the ledger. Pure over its inputs; skips are logged.
pub fn filter_eligible<'a>(models: &'a [ModelInfo], ledger: &Ledger) -> Vec<&'a ModelInfo> {
    let mut out = Vec::new();
    for model in models {
        if !is_english_eligible(&model.tags) {
            warn!("skip non-English model: {}", model.id);
            continue;
        }
        if ledger.contains_key(&model.id) {
            info!("skip processed model: {}", model.id);
            continue;
        }
        out.push(model);
    }
    out
}

/// The full listing flow: search the hub, filter, download each
/// remaining model's config and classify it. Models with unsupported
/// architectures are logged and skipped; network and parse failures
/// propagate.
pub fn scan_models(
    settings: &Settings,
    query: Option<&str>,
    category: Option<&str>,
    limit: usize,
    ledger: &Ledger,
) -> anyhow::Result<Vec<Candidate>> {
    let models = hub::search_models(settings, query, category, limit)?;
    if models.is_empty() {
        match query {
            Some(q) => warn!("no model found: {}", q),
            None => warn!(
                "no model matches category: {}",
                category.unwrap_or("pytorch")
            ),
        }
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for model in filter_eligible(&models, ledger) {
        let config = hub::fetch_config(settings, model)?;
        let (task, architecture) = to_supported_task(&config)?;
        let Some(task) = task else {
            info!("unsupported model architecture: {}", architecture);
            continue;
        };
        candidates.push(Candidate {
            info: model.clone(),
            config,
            task: task.to_string(),
        });
    }
    Ok(candidates)
}
