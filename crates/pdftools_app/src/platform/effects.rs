use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use engine_logging::{engine_debug, engine_info, engine_warn};
use pdftools_core::{Effect, Msg, RunFailure};
use pdftools_engine::{EngineEvent, EngineHandle, ObjectStore, RunOutcome};

/// Executes effects against the engine and the object store, and feeds
/// engine events back as messages.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    store: ObjectStore,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle, store: ObjectStore, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self {
            engine,
            store,
            msg_tx,
        };
        runner.spawn_event_loop();
        runner
    }

    /// Returns the alerts to show, in order.
    pub(crate) fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut alerts = Vec::new();
        for effect in effects {
            match effect {
                Effect::Dispatch { run_id, request } => {
                    engine_info!("Dispatch run_id={} operation={}", run_id, request.operation());
                    if let Err(err) = self.engine.dispatch(run_id, request) {
                        engine_warn!("Dispatch of run {} failed: {}", run_id, err);
                        let _ = self.msg_tx.send(Msg::RunFailed {
                            run_id,
                            failure: RunFailure::Exception(err.to_string()),
                        });
                    }
                }
                Effect::Release(url) => {
                    if !self.store.revoke(&url) {
                        engine_debug!("Release of unknown reference {}", url);
                    }
                }
                Effect::Alert(message) => alerts.push(message),
            }
        }
        alerts
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            if msg_tx.send(event_to_msg(event)).is_err() {
                break;
            }
        });
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Line { run_id, line } => Msg::EngineLine { run_id, line },
        EngineEvent::Completed { run_id, outcome } => match outcome {
            RunOutcome::Ready { url, byte_len } => Msg::RunSucceeded {
                run_id,
                output: url,
                byte_len,
                finished_at_ms: Utc::now().timestamp_millis(),
            },
            RunOutcome::EngineError(message) => Msg::RunFailed {
                run_id,
                failure: RunFailure::Engine(message),
            },
            RunOutcome::Failed(message) => Msg::RunFailed {
                run_id,
                failure: RunFailure::Exception(message),
            },
        },
    }
}
