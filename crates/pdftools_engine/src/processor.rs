use std::sync::mpsc;

use pdftools_core::{OperationRequest, RunId};

use crate::{EngineError, EngineEvent, ProcessOutput};

/// Receives engine console output, one line per call, in emission order.
pub trait LineSink: Send + Sync {
    fn line(&self, text: &str);
}

/// Forwards lines to the engine event channel, tagged with their run.
pub struct ChannelLineSink {
    run_id: RunId,
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelLineSink {
    pub fn new(run_id: RunId, tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { run_id, tx }
    }
}

impl LineSink for ChannelLineSink {
    fn line(&self, text: &str) {
        let _ = self.tx.send(EngineEvent::Line {
            run_id: self.run_id,
            line: text.to_string(),
        });
    }
}

/// The external processing entry point.
///
/// Implementations read inputs through the object store, report progress
/// through `lines` when one is given, and resolve exactly once.
#[async_trait::async_trait]
pub trait DocumentProcessor: Send + Sync {
    async fn process(
        &self,
        request: &OperationRequest,
        lines: Option<&dyn LineSink>,
    ) -> Result<ProcessOutput, EngineError>;
}
