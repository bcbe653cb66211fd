use crate::domain::models::{Ledger, StatusRecord};
use std::path::{Path, PathBuf};

pub fn ledger_path(output_dir: &str) -> PathBuf {
    Path::new(output_dir).join("processed_models.json")
}

pub fn load_ledger(output_dir: &str) -> anyhow::Result<Ledger> {
    let p = ledger_path(output_dir);
    if !p.exists() {
        return Ok(Ledger::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Serializes the whole ledger to disk. Keys are sorted (BTreeMap),
/// output is pretty-printed with non-ASCII preserved. The write is
/// wholesale, not atomic; this tool assumes one invocation at a time.
pub fn save_ledger(output_dir: &str, ledger: &Ledger) -> anyhow::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    std::fs::write(
        ledger_path(output_dir),
        serde_json::to_string_pretty(ledger)?,
    )?;
    Ok(())
}

/// Builds a status record and overwrites any prior entry for the model.
pub fn record(
    ledger: &mut Ledger,
    model_id: &str,
    sha: &str,
    application: &str,
    success: bool,
    reason: Option<String>,
    size: u64,
) -> StatusRecord {
    let status = StatusRecord {
        result: if success { "success" } else { "failed" }.to_string(),
        application: application.to_string(),
        sha1: sha.to_string(),
        size,
        reason,
    };
    ledger.insert(model_id.to_string(), status.clone());
    status
}
