use engine_logging::engine_debug;
use pdftools_core::ObjectUrl;

use crate::{EngineError, ObjectStore};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub url: ObjectUrl,
    pub byte_len: u64,
}

/// Turns the engine's output reference into a downloadable PDF object.
///
/// The engine's reference is revoked once its bytes have been read; the
/// returned reference is owned by the caller.
pub fn materialize(store: &ObjectStore, output: &ObjectUrl) -> Result<Materialized, EngineError> {
    let object = store.fetch(output)?;
    store.revoke(output);
    let byte_len = object.bytes.len() as u64;
    let url = store.create(object.bytes, PDF_MEDIA_TYPE);
    engine_debug!("materialized {} as {} ({} bytes)", output, url, byte_len);
    Ok(Materialized { url, byte_len })
}
