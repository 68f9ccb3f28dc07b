//! PDF tools engine: object store, document processing and effect execution.
mod command;
mod engine;
mod error;
mod ghostscript;
mod materialize;
mod object_store;
mod persist;
mod processor;
mod types;

pub use command::{build_ghostscript_args, BASE_ARGS};
pub use engine::EngineHandle;
pub use error::{EngineError, ObjectError};
pub use ghostscript::{GhostscriptProcessor, GhostscriptSettings};
pub use materialize::{materialize, Materialized, PDF_MEDIA_TYPE};
pub use object_store::{ObjectStore, StoredObject};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use processor::{ChannelLineSink, DocumentProcessor, LineSink};
pub use types::{EngineEvent, ProcessOutput, RunOutcome};
