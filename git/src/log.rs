use std::path::PathBuf;
use std::process::Command;

use git2::Repository;

use crate::error::{GitError, Result};

/// Read-only access to the commit log of the repository enclosing the
/// working directory.
pub struct GitLog {
    workdir: PathBuf,
}

impl GitLog {
    /// Locates the enclosing repository. Fails when run outside a git work
    /// tree, which for this tool is a user-reportable setup error.
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")
            .map_err(|e| GitError::RepositoryError(format!("Failed to find repository: {}", e)))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                GitError::RepositoryError("Repository has no working directory".to_string())
            })?
            .to_path_buf();

        Ok(Self { workdir })
    }

    /// Runs `git log` over `range` with the given `--format` template and
    /// returns its stdout. An empty range means the entire history.
    ///
    /// Uses std::process::Command because git2 doesn't provide the log
    /// formatting language.
    pub fn read(&self, range: &str, template: &str) -> Result<String> {
        let template_arg = format!("--format={}", template);
        let mut command = Command::new("git");
        command.current_dir(&self.workdir);
        command.args(["log", template_arg.as_str()]);
        if !range.is_empty() {
            command.arg(range);
        }

        let output = command
            .output()
            .map_err(|e| GitError::IoError(e).with_context("Failed to execute git log"))?;

        if !output.status.success() {
            return Err(GitError::CommandError(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
