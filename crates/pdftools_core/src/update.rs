use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::filename::{output_filename, FALLBACK_INPUT_NAME};
use crate::form::ValidationError;
use crate::object_url::ObjectUrl;
use crate::operation::parse_resolution;
use crate::request::OperationRequest;
use crate::state::{DownloadLink, PendingRunSeed, RunFailure, UiState};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // While a run is in flight only engine traffic, the language switch and
    // render ticks are accepted. Offered files are handed straight back.
    if state.ui_state() == UiState::Loading && !accepted_while_loading(&msg) {
        let effects = match msg {
            Msg::FilesChosen(files) => files
                .into_iter()
                .map(|file| Effect::Release(file.release()))
                .collect(),
            _ => Vec::new(),
        };
        return (state, effects);
    }

    let effects = match msg {
        Msg::OperationSelected(operation) => {
            if state.form().operation == operation {
                return (state, Vec::new());
            }
            let released = full_reset(&mut state);
            state.form_mut().operation = operation;
            engine_debug!("operation switched to {}", operation);
            release_all(released)
        }
        Msg::FilesChosen(files) => {
            if files.is_empty() {
                return (state, Vec::new());
            }
            match state.ui_state() {
                UiState::Init | UiState::Selected => {
                    let multiple = state.form().operation.allows_multiple_files();
                    let released = state.roster_mut().accept(files, multiple);
                    state.set_ui(UiState::Selected);
                    release_all(released)
                }
                // No file input is offered once a run finished.
                UiState::Loading | UiState::ToBeDownloaded | UiState::Error => files
                    .into_iter()
                    .map(|file| Effect::Release(file.release()))
                    .collect(),
            }
        }
        Msg::RemoveFile(index) => {
            if !accepts_file_edits(&state) {
                return (state, Vec::new());
            }
            match state.roster_mut().remove(index) {
                Some(url) => {
                    if state.roster().is_empty() {
                        state.set_ui(UiState::Init);
                    }
                    vec![Effect::Release(url)]
                }
                None => Vec::new(),
            }
        }
        Msg::ClearFiles => {
            if !accepts_file_edits(&state) {
                return (state, Vec::new());
            }
            let released = state.roster_mut().clear();
            state.set_ui(UiState::Init);
            release_all(released)
        }
        Msg::PdfSettingChanged(setting) => {
            state.form_mut().pdf_setting = setting;
            Vec::new()
        }
        Msg::CustomCommandToggled(enabled) => {
            state.form_mut().use_custom_command = enabled;
            Vec::new()
        }
        Msg::CustomCommandChanged(command) => {
            state.form_mut().custom_command = command;
            Vec::new()
        }
        Msg::AdvancedSettingsToggled(enabled) => {
            state.form_mut().use_advanced_settings = enabled;
            Vec::new()
        }
        Msg::CompatibilityLevelChanged(level) => {
            state.form_mut().advanced_settings.compatibility_level = level;
            Vec::new()
        }
        Msg::DownsampleToggled(enabled) => {
            state
                .form_mut()
                .advanced_settings
                .color_image_settings
                .downsample = enabled;
            Vec::new()
        }
        Msg::ResolutionChanged(text) => {
            state
                .form_mut()
                .advanced_settings
                .color_image_settings
                .resolution = parse_resolution(&text);
            Vec::new()
        }
        Msg::SplitStartChanged(text) => {
            state.form_mut().split_range.start_page = text;
            Vec::new()
        }
        Msg::SplitEndChanged(text) => {
            state.form_mut().split_range.end_page = text;
            Vec::new()
        }
        Msg::TerminalOutputToggled(enabled) => {
            state.form_mut().show_terminal_output = enabled;
            Vec::new()
        }
        Msg::ProgressBarToggled(enabled) => {
            state.form_mut().show_progress_bar = enabled;
            Vec::new()
        }
        Msg::LanguageChanged(locale) => {
            state.set_locale(locale);
            Vec::new()
        }
        Msg::Submit => submit(&mut state),
        Msg::EngineLine { run_id, line } => {
            let Some(run) = state.pending_for(run_id) else {
                engine_debug!("dropping line from inactive run {}", run_id);
                return (state, Vec::new());
            };
            let (echo, track) = (run.show_terminal_output, run.show_progress_bar);
            state.append_line(&line, echo, track);
            Vec::new()
        }
        Msg::RunSucceeded {
            run_id,
            output,
            byte_len,
            finished_at_ms,
        } => {
            if state.pending_for(run_id).is_none() {
                engine_warn!("result of inactive run {} released", run_id);
                return (state, vec![Effect::Release(output)]);
            }
            let Some(run) = state.take_pending() else {
                return (state, vec![Effect::Release(output)]);
            };
            let filename = output_filename(
                &run.primary_filename,
                run.operation.as_str(),
                run.split_range,
                finished_at_ms,
            );
            engine_info!("run {} produced {} ({} bytes)", run_id, filename, byte_len);
            let released = state.replace_downloads(vec![DownloadLink {
                url: output,
                filename,
                operation: run.operation,
                byte_len,
            }]);
            state.clear_run_output();
            state.set_ui(UiState::ToBeDownloaded);
            release_all(released)
        }
        Msg::RunFailed { run_id, failure } => {
            if state.pending_for(run_id).is_none() {
                engine_warn!("failure of inactive run {} ignored", run_id);
                return (state, Vec::new());
            }
            state.take_pending();
            let message = match failure {
                RunFailure::Engine(message) => message,
                RunFailure::Exception(message) if message.trim().is_empty() => {
                    state.translator().t("unexpectedError")
                }
                RunFailure::Exception(message) => message,
            };
            engine_warn!("run {} failed: {}", run_id, message);
            state.set_error(message);
            state.clear_run_output();
            state.set_ui(UiState::Error);
            Vec::new()
        }
        Msg::ProcessAgain => match state.ui_state() {
            UiState::ToBeDownloaded | UiState::Error => {
                let released = state.replace_downloads(Vec::new());
                state.clear_error();
                state.clear_run_output();
                let next = if state.roster().is_empty() {
                    UiState::Init
                } else {
                    UiState::Selected
                };
                state.set_ui(next);
                release_all(released)
            }
            UiState::Init | UiState::Selected | UiState::Loading => Vec::new(),
        },
        Msg::Reset => release_all(full_reset(&mut state)),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn accepted_while_loading(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::EngineLine { .. }
            | Msg::RunSucceeded { .. }
            | Msg::RunFailed { .. }
            | Msg::LanguageChanged(_)
            | Msg::Tick
            | Msg::NoOp
    )
}

fn accepts_file_edits(state: &AppState) -> bool {
    matches!(state.ui_state(), UiState::Init | UiState::Selected)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.ui_state() != UiState::Selected {
        return Vec::new();
    }

    let validated = match state.form().validate(state.roster().len()) {
        Ok(validated) => validated,
        Err(ValidationError::NoFiles) => return Vec::new(),
        Err(err) => {
            engine_info!("submission rejected: {}", err);
            return err
                .alert_key()
                .map(|key| vec![Effect::Alert(state.translator().t(key))])
                .unwrap_or_default();
        }
    };

    let Some(request) = OperationRequest::build(&validated, state.roster().files()) else {
        engine_warn!("could not assemble a request for {}", validated.operation);
        return Vec::new();
    };

    let primary_filename = state
        .roster()
        .first()
        .map(|file| file.filename.clone())
        .unwrap_or_else(|| FALLBACK_INPUT_NAME.to_string());
    let run_id = state.begin_run(PendingRunSeed {
        operation: validated.operation,
        primary_filename,
        split_range: validated.split_range,
        show_terminal_output: validated.show_terminal_output,
        show_progress_bar: validated.show_progress_bar,
    });
    engine_info!(
        "dispatching run {} operation={} files={}",
        run_id,
        validated.operation,
        state.roster().len()
    );

    vec![Effect::Dispatch { run_id, request }]
}

/// Releases files and downloads and restores the per-run form fields.
fn full_reset(state: &mut AppState) -> Vec<ObjectUrl> {
    let mut released = state.roster_mut().clear();
    released.extend(state.replace_downloads(Vec::new()));
    state.form_mut().reset_transient();
    state.clear_error();
    state.clear_run_output();
    state.set_ui(UiState::Init);
    released
}

fn release_all(urls: Vec<ObjectUrl>) -> Vec<Effect> {
    urls.into_iter().map(Effect::Release).collect()
}
