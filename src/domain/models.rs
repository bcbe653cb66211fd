use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Model metadata as returned by the hub's `/api/models` endpoints.
///
/// The listing endpoint omits `sha`; the single-model endpoint fills it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
}

/// The subset of a model's `config.json` we care about. Everything else
/// is ignored on deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ModelConfig {
    #[serde(default)]
    pub architectures: Vec<String>,
    #[serde(default)]
    pub model_type: Option<String>,
}

/// A hub model that passed every filter; lives for one scan call.
#[derive(Debug, Serialize, Clone)]
pub struct Candidate {
    pub info: ModelInfo,
    pub config: ModelConfig,
    pub task: String,
}

/// One processed-models ledger entry. `reason` is only serialized for
/// entries that carry one, matching the historical file schema.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub result: String,
    pub application: String,
    pub sha1: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The processed-models ledger. BTreeMap keeps serialization key-sorted.
pub type Ledger = BTreeMap<String, StatusRecord>;

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub architecture: String,
    pub task: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarkReport {
    pub model_id: String,
    pub status: StatusRecord,
}
