// Re-export semver for users of this library
pub use semver::Version as SemverVersion;

use std::path::Path;

mod ecosystems;
pub mod error;

pub use ecosystems::{Ecosystem, EcosystemType};
pub use error::{PackageError, Result};

/// Metadata a release run needs from the package being released: the
/// version the package manager just bumped to and the package author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: SemverVersion,
    pub author: Option<String>,
}

/// Central entry point for package metadata access
pub struct Package;

impl Package {
    /// Detect the ecosystem type from a directory
    pub fn detect_ecosystem(dir_path: &Path) -> Result<EcosystemType> {
        ecosystems::detect_ecosystem(dir_path).map_err(|e| {
            e.with_context(format!(
                "Failed to detect ecosystem in '{}'",
                dir_path.display()
            ))
        })
    }

    /// Read the version and author of the project at the given path
    pub fn read_from_project(dir_path: &Path) -> Result<Metadata> {
        let ecosystem_type = Self::detect_ecosystem(dir_path)?;
        let ecosystem = ecosystems::create_ecosystem(ecosystem_type);
        ecosystem.read_metadata(dir_path).map_err(|e| {
            e.with_context(format!(
                "Failed to read metadata from {} project",
                ecosystem_type
            ))
        })
    }
}
