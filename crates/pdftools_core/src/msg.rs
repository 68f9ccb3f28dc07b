use crate::i18n::Locale;
use crate::object_url::ObjectUrl;
use crate::operation::{CompatibilityLevel, Operation, PdfSetting};
use crate::staging::StagedFile;
use crate::state::{RunFailure, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched the operation tab.
    OperationSelected(Operation),
    /// User picked files; each already owns an object reference.
    FilesChosen(Vec<StagedFile>),
    /// User removed the file at this roster index.
    RemoveFile(usize),
    /// User clicked Clear All.
    ClearFiles,
    PdfSettingChanged(PdfSetting),
    CustomCommandToggled(bool),
    CustomCommandChanged(String),
    AdvancedSettingsToggled(bool),
    CompatibilityLevelChanged(CompatibilityLevel),
    DownsampleToggled(bool),
    /// Raw text of the DPI field.
    ResolutionChanged(String),
    SplitStartChanged(String),
    SplitEndChanged(String),
    TerminalOutputToggled(bool),
    ProgressBarToggled(bool),
    LanguageChanged(Locale),
    /// User submitted the form.
    Submit,
    /// One line of engine console output.
    EngineLine { run_id: RunId, line: String },
    /// The engine produced a materialized PDF.
    RunSucceeded {
        run_id: RunId,
        output: ObjectUrl,
        byte_len: u64,
        finished_at_ms: i64,
    },
    /// The engine reported an error or the call failed.
    RunFailed { run_id: RunId, failure: RunFailure },
    /// Keep the files, drop the previous result.
    ProcessAgain,
    /// Drop files and results.
    Reset,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
