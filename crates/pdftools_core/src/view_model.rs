use crate::i18n::Locale;
use crate::operation::{AdvancedSettings, Operation, PdfSetting, SplitRange};
use crate::progress::ProgressInfo;
use crate::state::{DownloadLink, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub ui_state: UiState,
    pub operation: Operation,
    pub locale: Locale,
    pub file_count: usize,
    pub files: Vec<FileRowView>,
    pub pdf_setting: PdfSetting,
    pub use_custom_command: bool,
    pub custom_command: String,
    pub use_advanced_settings: bool,
    pub advanced_settings: AdvancedSettings,
    pub split_range: SplitRange,
    pub show_terminal_output: bool,
    pub show_progress_bar: bool,
    /// Echoed engine output, one line per `\n`.
    pub terminal: String,
    /// Present only when the progress bar is enabled and a page was seen.
    pub progress: Option<ProgressInfo>,
    pub downloads: Vec<DownloadLink>,
    pub error_message: String,
    pub can_submit: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub index: usize,
    pub filename: String,
    pub byte_len: u64,
}
