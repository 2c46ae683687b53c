use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Command execution error: {0}")]
    CommandError(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        GitError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            GitError::RepositoryError(msg) => format!("Git repository error: {}", msg),
            GitError::CommandError(msg) => format!("Git command failed: {}", msg.trim()),
            GitError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, GitError>;
