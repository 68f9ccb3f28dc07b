use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info, engine_warn};
use pdftools_core::{OperationRequest, RunId};

use crate::materialize::materialize;
use crate::processor::{ChannelLineSink, DocumentProcessor, LineSink};
use crate::{EngineError, EngineEvent, ObjectStore, ProcessOutput, RunOutcome};

enum EngineCommand {
    Process {
        run_id: RunId,
        request: OperationRequest,
    },
}

/// Owns the worker thread that runs documents through a processor.
///
/// Events for every run arrive on one channel, in the order they were sent.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(
        processor: Arc<dyn DocumentProcessor>,
        store: ObjectStore,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("pdftools-engine")
            .build()?;

        thread::Builder::new()
            .name("pdftools-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let processor = processor.clone();
                    let store = store.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(processor.as_ref(), &store, command, event_tx).await;
                    });
                }
                engine_info!("engine command channel closed");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn dispatch(&self, run_id: RunId, request: OperationRequest) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Process { run_id, request })
            .map_err(|_| EngineError::WorkerStopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.receiver().try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.receiver().recv_timeout(timeout).ok()
    }

    fn receiver(&self) -> std::sync::MutexGuard<'_, mpsc::Receiver<EngineEvent>> {
        self.event_rx.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn handle_command(
    processor: &dyn DocumentProcessor,
    store: &ObjectStore,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Process { run_id, request } => {
            engine_info!("run {} started ({})", run_id, request.operation());
            let sink = ChannelLineSink::new(run_id, event_tx.clone());
            let lines = request.wants_lines().then_some(&sink as &dyn LineSink);
            let outcome = match processor.process(&request, lines).await {
                Ok(ProcessOutput::Error { error }) => RunOutcome::EngineError(error),
                Ok(ProcessOutput::Pdf { pdf_data_url }) => match materialize(store, &pdf_data_url) {
                    Ok(materialized) => RunOutcome::Ready {
                        url: materialized.url,
                        byte_len: materialized.byte_len,
                    },
                    Err(err) => {
                        engine_error!("run {} output unusable: {}", run_id, err);
                        RunOutcome::Failed(err.to_string())
                    }
                },
                Err(err) => {
                    engine_warn!("run {} failed: {}", run_id, err);
                    RunOutcome::Failed(err.to_string())
                }
            };
            let _ = event_tx.send(EngineEvent::Completed { run_id, outcome });
        }
    }
}
