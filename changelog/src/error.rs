use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("{file} does not start with \"# Changes\"")]
    HeaderMismatch { file: String },

    #[error("Version {version} is already in {file}")]
    AlreadyRecorded {
        version: String,
        file: String,
        /// Rendered block of commits made since the last recorded release,
        /// when any exist. Not part of the display message.
        outstanding: Option<String>,
    },

    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ChangelogError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            ChangelogError::ReadError(e) => format!("Could not access the changelog file: {}", e),
            ChangelogError::HeaderMismatch { file } => {
                format!("{} does not start with \"# Changes\"", file)
            }
            ChangelogError::AlreadyRecorded { version, file, .. } => {
                format!("Version {} is already in {}", version, file)
            }
            ChangelogError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, ChangelogError>;
