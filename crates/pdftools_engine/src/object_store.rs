use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use engine_logging::engine_trace;
use pdftools_core::{ObjectUrl, StagedFile};

use crate::materialize::PDF_MEDIA_TYPE;
use crate::ObjectError;

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Bytes,
    pub media_type: String,
}

#[derive(Debug, Default)]
struct StoreInner {
    last_id: u64,
    objects: HashMap<ObjectUrl, StoredObject>,
}

/// In-memory table of revocable object references.
///
/// Cloning shares the table. A revoked reference is never reissued.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, bytes: impl Into<Bytes>, media_type: &str) -> ObjectUrl {
        let mut inner = self.lock();
        inner.last_id += 1;
        let url = ObjectUrl::from_id(inner.last_id);
        let object = StoredObject {
            bytes: bytes.into(),
            media_type: media_type.to_string(),
        };
        engine_trace!("object {} created ({} bytes)", url, object.bytes.len());
        inner.objects.insert(url.clone(), object);
        url
    }

    pub fn fetch(&self, url: &ObjectUrl) -> Result<StoredObject, ObjectError> {
        self.lock()
            .objects
            .get(url)
            .cloned()
            .ok_or_else(|| ObjectError::NotFound(url.clone()))
    }

    /// Returns whether the reference was live.
    pub fn revoke(&self, url: &ObjectUrl) -> bool {
        let removed = self.lock().objects.remove(url).is_some();
        if removed {
            engine_trace!("object {} revoked", url);
        }
        removed
    }

    pub fn contains(&self, url: &ObjectUrl) -> bool {
        self.lock().objects.contains_key(url)
    }

    pub fn live_count(&self) -> usize {
        self.lock().objects.len()
    }

    /// Reads a file from disk into a new object and describes it for staging.
    /// No type sniffing: anything not named `*.pdf` is stored as opaque bytes.
    pub fn stage_path(&self, path: &Path) -> Result<StagedFile, ObjectError> {
        let bytes = std::fs::read(path).map_err(|source| ObjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let media_type = if is_pdf { PDF_MEDIA_TYPE } else { OCTET_STREAM };
        let byte_len = bytes.len() as u64;
        let url = self.create(bytes, media_type);
        Ok(StagedFile::new(filename, url, byte_len))
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
