use pdftools_core::{ObjectUrl, RunId};
use serde::{Deserialize, Serialize};

/// What a document processor resolves with: an explicit error message or a
/// reference to the produced bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessOutput {
    Error {
        error: String,
    },
    Pdf {
        #[serde(rename = "pdfDataURL")]
        pdf_data_url: ObjectUrl,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Output materialized as a fresh PDF object.
    Ready { url: ObjectUrl, byte_len: u64 },
    /// The engine reported an error.
    EngineError(String),
    /// The call failed before the engine could answer.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Line { run_id: RunId, line: String },
    Completed { run_id: RunId, outcome: RunOutcome },
}
