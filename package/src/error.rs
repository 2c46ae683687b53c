use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Failed to parse version: {0}")]
    ParseError(#[from] semver::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    ParseFileError(String),

    #[error("Version not found in file")]
    VersionNotFound,

    #[error("No ecosystem detected")]
    NoEcosystemDetected,

    #[error("{0}: {1}")]
    WithContext(String, Box<PackageError>),
}

impl PackageError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        PackageError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            PackageError::ParseError(e) => format!("Invalid version format: {}", e),
            PackageError::NoEcosystemDetected => {
                "Could not detect project type. Supported project types: JavaScript, Rust"
                    .to_string()
            }
            PackageError::VersionNotFound => "Could not find version in project files".to_string(),
            PackageError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, PackageError>;
