use serde::{Deserialize, Serialize};

use crate::form::{Quality, ValidatedForm};
use crate::object_url::ObjectUrl;
use crate::operation::{AdvancedSettings, Operation, PageRange, PdfSetting};
use crate::staging::StagedFile;

/// The single request handed to the document processor for one run.
///
/// Serializes to the engine's JSON shape: `operation` plus either `files`
/// (merge) or `psDataURL` (compress, split), and `splitRange` for split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    #[serde(flatten)]
    pub input: JobInput,
    pub pdf_setting: Option<PdfSetting>,
    pub custom_command: Option<String>,
    pub advanced_settings: Option<AdvancedSettings>,
    pub show_terminal_output: bool,
    pub show_progress_bar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum JobInput {
    Compress {
        #[serde(rename = "psDataURL")]
        ps_data_url: ObjectUrl,
    },
    Merge {
        files: Vec<ObjectUrl>,
    },
    Split {
        #[serde(rename = "psDataURL")]
        ps_data_url: ObjectUrl,
        #[serde(rename = "splitRange")]
        split_range: PageRange,
    },
}

impl JobInput {
    pub fn operation(&self) -> Operation {
        match self {
            JobInput::Compress { .. } => Operation::Compress,
            JobInput::Merge { .. } => Operation::Merge,
            JobInput::Split { .. } => Operation::Split,
        }
    }

    /// Input references in the order the engine consumes them.
    pub fn inputs(&self) -> Vec<&ObjectUrl> {
        match self {
            JobInput::Compress { ps_data_url } | JobInput::Split { ps_data_url, .. } => {
                vec![ps_data_url]
            }
            JobInput::Merge { files } => files.iter().collect(),
        }
    }
}

impl OperationRequest {
    /// Assembles the request for a validated form. Returns `None` when the
    /// file list does not match the operation.
    pub fn build(form: &ValidatedForm, files: &[StagedFile]) -> Option<Self> {
        let first = files.first()?.url.clone();
        let input = match form.operation {
            Operation::Compress => JobInput::Compress { ps_data_url: first },
            Operation::Merge => JobInput::Merge {
                files: files.iter().map(|file| file.url.clone()).collect(),
            },
            Operation::Split => JobInput::Split {
                ps_data_url: first,
                split_range: form.split_range?,
            },
        };

        let (pdf_setting, custom_command) = match &form.quality {
            Quality::Preset(setting) => (Some(*setting), None),
            Quality::Custom(command) => (None, Some(command.clone())),
        };

        Some(Self {
            input,
            pdf_setting,
            custom_command,
            advanced_settings: form.advanced_settings,
            show_terminal_output: form.show_terminal_output,
            show_progress_bar: form.show_progress_bar,
        })
    }

    pub fn operation(&self) -> Operation {
        self.input.operation()
    }

    pub fn wants_lines(&self) -> bool {
        self.show_terminal_output || self.show_progress_bar
    }
}
