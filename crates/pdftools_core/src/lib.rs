//! PDF tools core: pure state machine, form validation and view-model helpers.
mod effect;
mod filename;
mod form;
pub mod i18n;
mod msg;
mod object_url;
mod operation;
pub mod progress;
mod request;
mod staging;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filename::{basename, output_filename, FALLBACK_INPUT_NAME};
pub use form::{
    validate_custom_command, validate_split_range, OperationForm, Quality, ValidatedForm,
    ValidationError, DEVICE_TOKEN, OUTPUT_FILE_TOKEN,
};
pub use i18n::{Locale, Translator};
pub use msg::Msg;
pub use object_url::ObjectUrl;
pub use operation::{
    parse_resolution, AdvancedSettings, ColorImageSettings, CompatibilityLevel, Operation,
    PageRange, PdfSetting, SplitRange, DEFAULT_COLOR_IMAGE_RESOLUTION,
};
pub use progress::{GhostscriptLineAdapter, LineAdapter, ProgressEvent, ProgressInfo};
pub use request::{JobInput, OperationRequest};
pub use staging::{FileRoster, StagedFile};
pub use state::{AppState, DownloadLink, RunFailure, RunId, UiState};
pub use update::update;
pub use view_model::{AppViewModel, FileRowView};
