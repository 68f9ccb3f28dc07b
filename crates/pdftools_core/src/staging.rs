use crate::object_url::ObjectUrl;

/// A user-selected file and the object reference that owns its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub filename: String,
    pub url: ObjectUrl,
    pub byte_len: u64,
}

impl StagedFile {
    pub fn new(filename: impl Into<String>, url: ObjectUrl, byte_len: u64) -> Self {
        Self {
            filename: filename.into(),
            url,
            byte_len,
        }
    }

    /// Gives up the file; the returned reference must be revoked.
    pub fn release(self) -> ObjectUrl {
        self.url
    }
}

/// Ordered set of staged files. Every mutation hands back the references it
/// dropped so the caller can revoke them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileRoster {
    files: Vec<StagedFile>,
}

impl FileRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends when `multiple` is set, otherwise keeps only the first
    /// incoming file and drops everything else.
    pub fn accept(&mut self, incoming: Vec<StagedFile>, multiple: bool) -> Vec<ObjectUrl> {
        if multiple {
            self.files.extend(incoming);
            return Vec::new();
        }

        let mut released = self.clear();
        let mut incoming = incoming.into_iter();
        if let Some(first) = incoming.next() {
            self.files.push(first);
        }
        released.extend(incoming.map(StagedFile::release));
        released
    }

    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<ObjectUrl> {
        if index >= self.files.len() {
            return None;
        }
        Some(self.files.remove(index).release())
    }

    pub fn clear(&mut self) -> Vec<ObjectUrl> {
        self.files.drain(..).map(StagedFile::release).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn first(&self) -> Option<&StagedFile> {
        self.files.first()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }
}
