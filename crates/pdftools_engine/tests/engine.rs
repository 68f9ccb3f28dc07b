use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pdftools_core::{JobInput, ObjectUrl, OperationRequest, PdfSetting};
use pdftools_engine::{
    DocumentProcessor, EngineError, EngineEvent, EngineHandle, LineSink, ObjectStore,
    ProcessOutput, RunOutcome, PDF_MEDIA_TYPE,
};
use pretty_assertions::assert_eq;

enum Script {
    Produce(&'static [u8]),
    Report(&'static str),
    Break,
}

struct FakeProcessor {
    store: ObjectStore,
    lines: &'static [&'static str],
    script: Script,
}

#[async_trait]
impl DocumentProcessor for FakeProcessor {
    async fn process(
        &self,
        _request: &OperationRequest,
        lines: Option<&dyn LineSink>,
    ) -> Result<ProcessOutput, EngineError> {
        if let Some(sink) = lines {
            for line in self.lines {
                sink.line(line);
            }
        }
        match self.script {
            Script::Produce(bytes) => Ok(ProcessOutput::Pdf {
                pdf_data_url: self.store.create(bytes.to_vec(), "application/octet-stream"),
            }),
            Script::Report(error) => Ok(ProcessOutput::Error {
                error: error.to_string(),
            }),
            Script::Break => Err(EngineError::WorkerStopped),
        }
    }
}

const LINES: &[&str] = &["Processing pages 1 through 2.", "Page 1", "Page 2"];

fn engine(script: Script) -> (EngineHandle, ObjectStore) {
    let store = ObjectStore::new();
    let processor = FakeProcessor {
        store: store.clone(),
        lines: LINES,
        script,
    };
    let handle = EngineHandle::new(Arc::new(processor), store.clone()).unwrap();
    (handle, store)
}

fn request(show_lines: bool) -> OperationRequest {
    OperationRequest {
        input: JobInput::Compress {
            ps_data_url: ObjectUrl::from_id(99),
        },
        pdf_setting: Some(PdfSetting::Ebook),
        custom_command: None,
        advanced_settings: None,
        show_terminal_output: show_lines,
        show_progress_bar: false,
    }
}

/// Collects events until the run completes.
fn drain(handle: &EngineHandle) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Some(event) = handle.recv_timeout(Duration::from_secs(5)) {
        let done = matches!(event, EngineEvent::Completed { .. });
        events.push(event);
        if done {
            break;
        }
    }
    events
}

#[test]
fn lines_precede_completion_and_output_is_materialized() {
    let (handle, store) = engine(Script::Produce(b"%PDF-done"));
    handle.dispatch(7, request(true)).unwrap();

    let events = drain(&handle);
    assert_eq!(events.len(), 4);
    for (event, expected) in events.iter().zip(LINES) {
        assert_eq!(
            event,
            &EngineEvent::Line {
                run_id: 7,
                line: expected.to_string()
            }
        );
    }
    let EngineEvent::Completed { run_id, outcome } = &events[3] else {
        panic!("expected completion, got {:?}", events[3]);
    };
    assert_eq!(*run_id, 7);
    let RunOutcome::Ready { url, byte_len } = outcome else {
        panic!("expected ready outcome, got {outcome:?}");
    };
    assert_eq!(*byte_len, 9);
    assert_eq!(store.fetch(url).unwrap().media_type, PDF_MEDIA_TYPE);
    // Only the materialized copy survives.
    assert_eq!(store.live_count(), 1);
}

#[test]
fn no_lines_without_output_or_progress() {
    let (handle, _store) = engine(Script::Produce(b"x"));
    handle.dispatch(1, request(false)).unwrap();

    let events = drain(&handle);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        EngineEvent::Completed {
            run_id: 1,
            outcome: RunOutcome::Ready { .. }
        }
    ));
}

#[test]
fn engine_reported_error_is_passed_through() {
    let (handle, store) = engine(Script::Report("Unrecoverable error"));
    handle.dispatch(3, request(false)).unwrap();

    let events = drain(&handle);
    assert_eq!(
        events,
        vec![EngineEvent::Completed {
            run_id: 3,
            outcome: RunOutcome::EngineError("Unrecoverable error".to_string()),
        }]
    );
    assert_eq!(store.live_count(), 0);
}

#[test]
fn call_failure_becomes_failed_outcome() {
    let (handle, _store) = engine(Script::Break);
    handle.dispatch(4, request(false)).unwrap();

    let events = drain(&handle);
    assert_eq!(
        events,
        vec![EngineEvent::Completed {
            run_id: 4,
            outcome: RunOutcome::Failed("engine worker stopped".to_string()),
        }]
    );
}

#[test]
fn nothing_pending_means_no_events() {
    let (handle, _store) = engine(Script::Produce(b"x"));
    assert_eq!(handle.try_recv(), None);
}
