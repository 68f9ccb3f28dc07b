use thiserror::Error;

use crate::operation::{AdvancedSettings, Operation, PageRange, PdfSetting, SplitRange};

pub const DEVICE_TOKEN: &str = "-sDEVICE=";
pub const OUTPUT_FILE_TOKEN: &str = "-sOutputFile=";

/// Reasons a submission is refused before anything is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no files staged")]
    NoFiles,
    #[error("merge needs at least 2 files, got {count}")]
    NotEnoughFilesToMerge { count: usize },
    #[error("split page range is missing")]
    MissingPageRange,
    #[error("split page range is invalid: {start:?} to {end:?}")]
    InvalidPageRange { start: String, end: String },
    #[error("custom command is empty")]
    EmptyCustomCommand,
    #[error("custom command must contain -sDEVICE= and -sOutputFile=")]
    CustomCommandMissingParameters,
}

impl ValidationError {
    /// Translation key of the alert shown to the user, if any.
    ///
    /// `NoFiles` is refused silently.
    pub fn alert_key(&self) -> Option<&'static str> {
        match self {
            ValidationError::NoFiles => None,
            ValidationError::NotEnoughFilesToMerge { .. } => Some("selectAtLeastTwoFiles"),
            ValidationError::MissingPageRange => Some("specifyPageRange"),
            ValidationError::InvalidPageRange { .. } => Some("validPageNumbers"),
            ValidationError::EmptyCustomCommand => Some("enterCustomCommand"),
            ValidationError::CustomCommandMissingParameters => Some("customCommandRequired"),
        }
    }
}

/// Options chosen for the active operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationForm {
    pub operation: Operation,
    pub pdf_setting: PdfSetting,
    pub use_custom_command: bool,
    pub custom_command: String,
    pub use_advanced_settings: bool,
    pub advanced_settings: AdvancedSettings,
    pub split_range: SplitRange,
    pub show_terminal_output: bool,
    pub show_progress_bar: bool,
}

/// Settings half of a request; which of preset or command is active is
/// decided by the form's custom-command flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quality {
    Preset(PdfSetting),
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub operation: Operation,
    pub quality: Quality,
    pub advanced_settings: Option<AdvancedSettings>,
    pub split_range: Option<PageRange>,
    pub show_terminal_output: bool,
    pub show_progress_bar: bool,
}

impl OperationForm {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }

    /// Whether the engine's line callback is needed at all.
    pub fn wants_lines(&self) -> bool {
        self.show_terminal_output || self.show_progress_bar
    }

    /// Clears the fields a full reset discards. Presets, custom command and
    /// display toggles survive.
    pub fn reset_transient(&mut self) {
        self.split_range = SplitRange::default();
        self.use_advanced_settings = false;
        self.advanced_settings = AdvancedSettings::default();
    }

    pub fn validate(&self, file_count: usize) -> Result<ValidatedForm, ValidationError> {
        if file_count == 0 {
            return Err(ValidationError::NoFiles);
        }
        if self.operation == Operation::Merge && file_count < 2 {
            return Err(ValidationError::NotEnoughFilesToMerge { count: file_count });
        }

        let split_range = match self.operation {
            Operation::Split => Some(validate_split_range(&self.split_range)?),
            Operation::Compress | Operation::Merge => None,
        };

        let quality = if self.use_custom_command {
            Quality::Custom(validate_custom_command(&self.custom_command)?)
        } else {
            Quality::Preset(self.pdf_setting)
        };

        Ok(ValidatedForm {
            operation: self.operation,
            quality,
            advanced_settings: self.use_advanced_settings.then_some(self.advanced_settings),
            split_range,
            show_terminal_output: self.show_terminal_output,
            show_progress_bar: self.show_progress_bar,
        })
    }
}

/// Only truly empty fields count as missing; whitespace is an invalid number.
pub fn validate_split_range(range: &SplitRange) -> Result<PageRange, ValidationError> {
    if range.start_page.is_empty() || range.end_page.is_empty() {
        return Err(ValidationError::MissingPageRange);
    }
    let start = range.start_page.trim();
    let end = range.end_page.trim();

    let invalid = || ValidationError::InvalidPageRange {
        start: start.to_string(),
        end: end.to_string(),
    };
    let start_page = start.parse::<u32>().map_err(|_| invalid())?;
    let end_page = end.parse::<u32>().map_err(|_| invalid())?;
    if start_page < 1 || end_page < start_page {
        return Err(invalid());
    }

    Ok(PageRange {
        start_page,
        end_page,
    })
}

/// Textual containment check only; returns the trimmed command.
pub fn validate_custom_command(command: &str) -> Result<String, ValidationError> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ValidationError::EmptyCustomCommand);
    }
    if !command.contains(DEVICE_TOKEN) || !command.contains(OUTPUT_FILE_TOKEN) {
        return Err(ValidationError::CustomCommandMissingParameters);
    }
    Ok(command.to_string())
}
