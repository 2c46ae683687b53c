use std::fs;
use std::io::ErrorKind;

use crate::error::Result;

/// Persistence seam for the changelog document.
pub trait Store {
    /// Returns the stored text, or `None` when no document exists yet.
    fn read(&self, name: &str) -> Result<Option<String>>;

    /// Replaces the document's contents.
    fn write(&self, name: &str, text: &str) -> Result<()>;
}

/// Store backed by the filesystem. Names are used as paths, so a bare name
/// resolves against the working directory.
pub struct FileStore;

impl Store for FileStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(name) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, name: &str, text: &str) -> Result<()> {
        fs::write(name, text)?;
        Ok(())
    }
}
