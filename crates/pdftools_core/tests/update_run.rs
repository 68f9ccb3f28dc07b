use pdftools_core::{
    update, AppState, DownloadLink, Effect, Msg, ObjectUrl, Operation, ProgressInfo, RunFailure,
    RunId, StagedFile, UiState,
};
use pretty_assertions::assert_eq;

const FINISHED_AT: i64 = 1_700_000_000_123;

fn loading(operation: Operation, files: Vec<StagedFile>, extra: Vec<Msg>) -> (AppState, RunId) {
    let mut msgs = vec![Msg::OperationSelected(operation), Msg::FilesChosen(files)];
    msgs.extend(extra);
    msgs.push(Msg::Submit);
    let mut state = AppState::new();
    let mut run_id = None;
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            if let Effect::Dispatch { run_id: id, .. } = effect {
                run_id = Some(id);
            }
        }
    }
    (state, run_id.expect("dispatched"))
}

fn report() -> StagedFile {
    StagedFile::new("report.pdf", ObjectUrl::from_id(1), 4096)
}

fn line(run_id: RunId, text: &str) -> Msg {
    Msg::EngineLine {
        run_id,
        line: text.to_string(),
    }
}

fn succeeded(run_id: RunId, output: u64) -> Msg {
    Msg::RunSucceeded {
        run_id,
        output: ObjectUrl::from_id(output),
        byte_len: 512,
        finished_at_ms: FINISHED_AT,
    }
}

#[test]
fn progress_lines_update_counters() {
    let (state, run_id) = loading(
        Operation::Compress,
        vec![report()],
        vec![Msg::ProgressBarToggled(true)],
    );
    let (state, _) = update(state, line(run_id, "Processing pages 1 through 42"));
    let (state, _) = update(state, line(run_id, "Page 7"));

    assert_eq!(
        state.progress(),
        ProgressInfo {
            total: 42,
            current: 7,
            current_page: 7
        }
    );
    assert_eq!(state.view().progress, Some(state.progress()));
    // Echo is off, so nothing accumulates.
    assert_eq!(state.terminal(), "");
}

#[test]
fn terminal_echo_keeps_every_line() {
    let (state, run_id) = loading(
        Operation::Compress,
        vec![report()],
        vec![Msg::TerminalOutputToggled(true)],
    );
    let (state, _) = update(state, line(run_id, "GPL Ghostscript 10.02.1"));
    let (state, _) = update(state, line(run_id, "Page 1"));

    assert_eq!(state.terminal(), "GPL Ghostscript 10.02.1\nPage 1\n");
    // Progress is off, so counters stay at zero.
    assert_eq!(state.progress(), ProgressInfo::default());
}

#[test]
fn success_produces_named_download() {
    let (state, run_id) = loading(
        Operation::Split,
        vec![report()],
        vec![
            Msg::SplitStartChanged("2".into()),
            Msg::SplitEndChanged("9".into()),
            Msg::TerminalOutputToggled(true),
        ],
    );
    let (state, _) = update(state, line(run_id, "Page 2"));
    let (state, effects) = update(state, succeeded(run_id, 50));

    assert!(effects.is_empty());
    assert_eq!(state.ui_state(), UiState::ToBeDownloaded);
    assert_eq!(
        state.downloads(),
        &[DownloadLink {
            url: ObjectUrl::from_id(50),
            filename: "report-split-2-9.pdf".to_string(),
            operation: Operation::Split,
            byte_len: 512,
        }]
    );
    assert_eq!(state.terminal(), "");
    assert_eq!(state.progress(), ProgressInfo::default());
    assert_eq!(state.active_run(), None);
}

#[test]
fn merge_download_uses_timestamp() {
    let files = vec![
        StagedFile::new("a.pdf", ObjectUrl::from_id(1), 1),
        StagedFile::new("b.pdf", ObjectUrl::from_id(2), 1),
    ];
    let (state, run_id) = loading(Operation::Merge, files, Vec::new());
    let (state, _) = update(state, succeeded(run_id, 3));

    assert_eq!(
        state.downloads()[0].filename,
        format!("merged-{FINISHED_AT}.pdf")
    );
}

#[test]
fn engine_error_clears_output_and_shows_message() {
    let (state, run_id) = loading(
        Operation::Compress,
        vec![report()],
        vec![
            Msg::TerminalOutputToggled(true),
            Msg::ProgressBarToggled(true),
        ],
    );
    let (state, _) = update(state, line(run_id, "Processing pages 1 through 3"));
    let (state, _) = update(state, line(run_id, "Page 1"));
    let (state, effects) = update(
        state,
        Msg::RunFailed {
            run_id,
            failure: RunFailure::Engine("Unrecoverable error, exit code 1".into()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.ui_state(), UiState::Error);
    assert_eq!(state.terminal(), "");
    assert_eq!(state.progress(), ProgressInfo::default());
    assert_eq!(state.error_message(), "Unrecoverable error, exit code 1");
}

#[test]
fn exception_without_message_uses_fallback() {
    let (state, run_id) = loading(Operation::Compress, vec![report()], Vec::new());
    let (state, _) = update(
        state,
        Msg::RunFailed {
            run_id,
            failure: RunFailure::Exception(String::new()),
        },
    );

    assert_eq!(
        state.error_message(),
        "An unexpected error occurred during processing"
    );
}

#[test]
fn lines_after_failure_do_not_leak_into_next_run() {
    let (state, first) = loading(
        Operation::Compress,
        vec![report()],
        vec![Msg::ProgressBarToggled(true)],
    );
    let (state, _) = update(
        state,
        Msg::RunFailed {
            run_id: first,
            failure: RunFailure::Engine("boom".into()),
        },
    );
    let (state, _) = update(state, Msg::ProcessAgain);
    let (state, effects) = update(state, Msg::Submit);
    let second = match effects.as_slice() {
        [Effect::Dispatch { run_id, .. }] => *run_id,
        other => panic!("unexpected effects {other:?}"),
    };
    assert_ne!(first, second);

    // Late output of the failed run arrives after the new run started.
    let (state, _) = update(state, line(first, "Processing pages 1 through 99"));
    let (state, _) = update(state, line(first, "Page 98"));
    assert_eq!(state.progress(), ProgressInfo::default());

    let (state, effects) = update(state, succeeded(first, 77));
    assert_eq!(effects, vec![Effect::Release(ObjectUrl::from_id(77))]);
    assert_eq!(state.ui_state(), UiState::Loading);
    assert_eq!(state.active_run(), Some(second));
}

#[test]
fn process_again_keeps_files_and_releases_download() {
    let (state, run_id) = loading(Operation::Compress, vec![report()], Vec::new());
    let (state, _) = update(state, succeeded(run_id, 20));
    let (state, effects) = update(state, Msg::ProcessAgain);

    assert_eq!(effects, vec![Effect::Release(ObjectUrl::from_id(20))]);
    assert_eq!(state.ui_state(), UiState::Selected);
    assert!(state.downloads().is_empty());
    assert_eq!(state.roster().len(), 1);
    assert_eq!(state.roster().files()[0].url, ObjectUrl::from_id(1));
}

#[test]
fn reset_releases_files_and_download() {
    let (state, run_id) = loading(
        Operation::Compress,
        vec![report()],
        vec![Msg::AdvancedSettingsToggled(true)],
    );
    let (state, _) = update(state, succeeded(run_id, 20));
    let (state, effects) = update(state, Msg::Reset);

    assert_eq!(
        effects,
        vec![
            Effect::Release(ObjectUrl::from_id(1)),
            Effect::Release(ObjectUrl::from_id(20)),
        ]
    );
    assert_eq!(state.ui_state(), UiState::Init);
    assert!(state.roster().is_empty());
    assert!(!state.form().use_advanced_settings);
}

#[test]
fn reset_is_ignored_while_loading() {
    let (state, run_id) = loading(Operation::Compress, vec![report()], Vec::new());
    let (state, effects) = update(state, Msg::Reset);

    assert!(effects.is_empty());
    assert_eq!(state.ui_state(), UiState::Loading);
    assert_eq!(state.active_run(), Some(run_id));
}
