use changelog::{ChangelogError, LOG_TEMPLATE, LogSource};
use git::GitLog;

/// Adapts `git log` to the changelog crate's log source seam.
pub struct GitLogSource {
    log: GitLog,
}

impl GitLogSource {
    pub fn discover() -> git::Result<Self> {
        Ok(Self {
            log: GitLog::discover()?,
        })
    }
}

impl LogSource for GitLogSource {
    fn fetch(&self, range: &str) -> changelog::Result<String> {
        self.log
            .read(range, LOG_TEMPLATE)
            .map_err(|e| ChangelogError::Git(e.user_message()))
    }
}
