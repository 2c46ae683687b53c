//! Mock collaborators for exercising the merge pipeline without a git
//! repository or a real file.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{ChangelogError, Result};
use crate::source::LogSource;
use crate::store::Store;

/// Mock log source returning canned output and recording requested ranges.
pub struct MockLogSource {
    output: String,
    should_fail: bool,
    requests: RefCell<Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            should_fail: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_output(mut self, output: &str) -> Self {
        self.output = output.to_string();
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Ranges requested so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for MockLogSource {
    fn fetch(&self, range: &str) -> Result<String> {
        self.requests.borrow_mut().push(range.to_string());
        if self.should_fail {
            return Err(ChangelogError::Git("Mock log source failure".to_string()));
        }
        Ok(self.output.clone())
    }
}

/// In-memory store.
pub struct MemoryStore {
    files: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_file(self, name: &str, text: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
        self
    }

    /// Current contents of `name`, or `None` when never seeded nor written.
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.files.borrow().get(name).cloned())
    }

    fn write(&self, name: &str, text: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
        Ok(())
    }
}
