use std::io;
use std::path::PathBuf;

use pdftools_core::ObjectUrl;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("unknown object reference {0}")]
    NotFound(ObjectUrl),
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Call-level failures of a processing run. Engine-reported errors are not
/// represented here; they come back as [`crate::ProcessOutput::Error`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Object(#[from] ObjectError),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("engine worker stopped")]
    WorkerStopped,
}
