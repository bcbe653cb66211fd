//! Static table of supported architecture head suffixes and the
//! downstream task each one maps to.
//!
//! Matching is suffix-based and first-match-wins in declaration order,
//! so more specific suffixes must come before broader ones.

use crate::domain::models::ModelConfig;

pub const ARCHITECTURE_TASKS: &[(&str, &str)] = &[
    ("ForQuestionAnswering", "question-answering"),
    ("ForTokenClassification", "token-classification"),
    ("ForSequenceClassification", "text-classification"),
    ("ForMultipleChoice", "text-classification"),
    ("ForMaskedLM", "fill-mask"),
];

#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    #[error("config declares no architectures")]
    NoArchitectures,
}

/// Maps a config's first declared architecture to a supported task.
///
/// Returns the raw architecture string either way so callers can log
/// what they skipped.
pub fn to_supported_task(
    config: &ModelConfig,
) -> Result<(Option<&'static str>, String), ClassifyError> {
    let architecture = config
        .architectures
        .first()
        .ok_or(ClassifyError::NoArchitectures)?
        .clone();
    let task = ARCHITECTURE_TASKS
        .iter()
        .find(|(suffix, _)| architecture.ends_with(suffix))
        .map(|(_, task)| *task);
    Ok((task, architecture))
}
