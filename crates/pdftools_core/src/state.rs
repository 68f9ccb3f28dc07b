use std::fmt;

use crate::form::OperationForm;
use crate::i18n::{Locale, Translator};
use crate::object_url::ObjectUrl;
use crate::operation::{Operation, PageRange};
use crate::progress::{GhostscriptLineAdapter, LineAdapter, ProgressInfo};
use crate::staging::FileRoster;
use crate::view_model::{AppViewModel, FileRowView};

pub type RunId = u64;

/// Parses engine lines for the progress bar.
static PROGRESS_ADAPTER: GhostscriptLineAdapter = GhostscriptLineAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Init,
    Selected,
    Loading,
    ToBeDownloaded,
    Error,
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UiState::Init => "init",
            UiState::Selected => "selected",
            UiState::Loading => "loading",
            UiState::ToBeDownloaded => "toBeDownloaded",
            UiState::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: ObjectUrl,
    pub filename: String,
    pub operation: Operation,
    pub byte_len: u64,
}

/// How a run ended when it did not produce output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunFailure {
    /// The engine resolved with an explicit error message.
    Engine(String),
    /// The call itself failed; an empty message gets the generic fallback.
    Exception(String),
}

/// What the in-flight run needs once its result comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingRun {
    pub(crate) run_id: RunId,
    pub(crate) operation: Operation,
    pub(crate) primary_filename: String,
    pub(crate) split_range: Option<PageRange>,
    pub(crate) show_terminal_output: bool,
    pub(crate) show_progress_bar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    ui: UiState,
    form: OperationForm,
    roster: FileRoster,
    downloads: Vec<DownloadLink>,
    error_message: String,
    terminal: String,
    progress: ProgressInfo,
    translator: Translator,
    last_run_id: RunId,
    pending: Option<PendingRun>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            translator: Translator::new(locale),
            ..Self::default()
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.ui
    }

    pub fn form(&self) -> &OperationForm {
        &self.form
    }

    pub fn roster(&self) -> &FileRoster {
        &self.roster
    }

    pub fn downloads(&self) -> &[DownloadLink] {
        &self.downloads
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    pub fn progress(&self) -> ProgressInfo {
        self.progress
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Run currently awaiting a result, if any.
    pub fn active_run(&self) -> Option<RunId> {
        self.pending.as_ref().map(|run| run.run_id)
    }

    pub fn view(&self) -> AppViewModel {
        let files = self
            .roster
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileRowView {
                index,
                filename: file.filename.clone(),
                byte_len: file.byte_len,
            })
            .collect();
        let progress = (self.form.show_progress_bar && self.progress.has_started())
            .then_some(self.progress);

        AppViewModel {
            ui_state: self.ui,
            operation: self.form.operation,
            locale: self.locale(),
            file_count: self.roster.len(),
            files,
            pdf_setting: self.form.pdf_setting,
            use_custom_command: self.form.use_custom_command,
            custom_command: self.form.custom_command.clone(),
            use_advanced_settings: self.form.use_advanced_settings,
            advanced_settings: self.form.advanced_settings,
            split_range: self.form.split_range.clone(),
            show_terminal_output: self.form.show_terminal_output,
            show_progress_bar: self.form.show_progress_bar,
            terminal: self.terminal.clone(),
            progress,
            downloads: self.downloads.clone(),
            error_message: self.error_message.clone(),
            can_submit: self.ui == UiState::Selected,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_ui(&mut self, ui: UiState) {
        if self.ui != ui {
            engine_logging::engine_debug!("ui state {} -> {}", self.ui, ui);
            self.ui = ui;
        }
        self.mark_dirty();
    }

    pub(crate) fn form_mut(&mut self) -> &mut OperationForm {
        self.mark_dirty();
        &mut self.form
    }

    pub(crate) fn roster_mut(&mut self) -> &mut FileRoster {
        self.mark_dirty();
        &mut self.roster
    }

    pub(crate) fn set_locale(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
        self.mark_dirty();
    }

    pub(crate) fn clear_run_output(&mut self) {
        self.terminal.clear();
        self.progress = ProgressInfo::default();
        self.mark_dirty();
    }

    pub(crate) fn begin_run(&mut self, pending: PendingRunSeed) -> RunId {
        self.last_run_id += 1;
        let run_id = self.last_run_id;
        self.pending = Some(PendingRun {
            run_id,
            operation: pending.operation,
            primary_filename: pending.primary_filename,
            split_range: pending.split_range,
            show_terminal_output: pending.show_terminal_output,
            show_progress_bar: pending.show_progress_bar,
        });
        engine_logging::engine_debug!(
            "run {} tracks progress with {}",
            run_id,
            PROGRESS_ADAPTER.version()
        );
        self.clear_run_output();
        self.set_ui(UiState::Loading);
        run_id
    }

    /// The pending run, only if `run_id` is the one in flight.
    pub(crate) fn pending_for(&self, run_id: RunId) -> Option<&PendingRun> {
        self.pending.as_ref().filter(|run| run.run_id == run_id)
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingRun> {
        self.pending.take()
    }

    pub(crate) fn append_line(&mut self, line: &str, echo: bool, track_progress: bool) {
        if echo {
            self.terminal.push_str(line);
            self.terminal.push('\n');
            self.mark_dirty();
        }
        if track_progress {
            if let Some(event) = PROGRESS_ADAPTER.parse(line) {
                self.progress.apply(event);
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.mark_dirty();
    }

    pub(crate) fn clear_error(&mut self) {
        self.error_message.clear();
        self.mark_dirty();
    }

    /// Replaces the download list, handing back the references it held.
    pub(crate) fn replace_downloads(&mut self, next: Vec<DownloadLink>) -> Vec<ObjectUrl> {
        self.mark_dirty();
        std::mem::replace(&mut self.downloads, next)
            .into_iter()
            .map(|link| link.url)
            .collect()
    }
}

/// Inputs to [`AppState::begin_run`].
#[derive(Debug, Clone)]
pub(crate) struct PendingRunSeed {
    pub(crate) operation: Operation,
    pub(crate) primary_filename: String,
    pub(crate) split_range: Option<PageRange>,
    pub(crate) show_terminal_output: bool,
    pub(crate) show_progress_bar: bool,
}
