use crate::Metadata;
use crate::error::{PackageError, Result};
use semver::Version as SemverVersion;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the type of ecosystem (language/framework)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcosystemType {
    JavaScript, // package.json
    Rust,       // Cargo.toml
}

impl fmt::Display for EcosystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::JavaScript => "JavaScript",
            Self::Rust => "Rust",
        };
        write!(f, "{name}")
    }
}

/// Trait for ecosystem-specific metadata access
pub trait Ecosystem {
    /// Read the current version and package author from a project
    ///
    /// # Errors
    /// Returns error if the manifest cannot be read or its version parsed
    fn read_metadata(&self, dir_path: &Path) -> Result<Metadata>;
}

/// Create an ecosystem implementation based on the type
pub fn create_ecosystem(ecosystem_type: EcosystemType) -> Box<dyn Ecosystem> {
    match ecosystem_type {
        EcosystemType::JavaScript => Box::new(JavaScriptEcosystem),
        EcosystemType::Rust => Box::new(RustEcosystem),
    }
}

/// Detect the ecosystem type from a directory
pub fn detect_ecosystem(dir_path: &Path) -> Result<EcosystemType> {
    if !dir_path.is_dir() {
        return Err(PackageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Directory not found",
        )));
    }

    let ecosystem_markers = [
        ("package.json", EcosystemType::JavaScript),
        ("Cargo.toml", EcosystemType::Rust),
    ];

    for (marker, ecosystem) in ecosystem_markers {
        if dir_path.join(marker).exists() {
            return Ok(ecosystem);
        }
    }

    Err(PackageError::NoEcosystemDetected)
}

//=============== JavaScript Ecosystem Implementation ===============//

/// JavaScript ecosystem (package.json)
struct JavaScriptEcosystem;

#[derive(Deserialize, Debug)]
struct PackageJson {
    version: String,
    #[serde(default)]
    author: Option<AuthorField>,
}

/// npm allows the author to be a plain string or a contact object.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum AuthorField {
    Text(String),
    Contact {
        name: String,
        #[serde(default)]
        email: Option<String>,
    },
}

impl AuthorField {
    fn normalize(self) -> String {
        match self {
            AuthorField::Text(text) => text,
            AuthorField::Contact { name, email } => match email {
                Some(email) => format!("{name} <{email}>"),
                None => name,
            },
        }
    }
}

impl Ecosystem for JavaScriptEcosystem {
    fn read_metadata(&self, dir_path: &Path) -> Result<Metadata> {
        let package_json_path = dir_path.join("package.json");
        let content = fs::read_to_string(package_json_path)?;

        let package_json: PackageJson = serde_json::from_str(&content).map_err(|e| {
            PackageError::ParseFileError(format!("Failed to parse package.json: {e}"))
        })?;

        Ok(Metadata {
            version: SemverVersion::parse(&package_json.version)?,
            author: package_json.author.map(AuthorField::normalize),
        })
    }
}

//=============== Rust Ecosystem Implementation ===============//

/// Rust ecosystem (Cargo.toml)
struct RustEcosystem;

impl Ecosystem for RustEcosystem {
    fn read_metadata(&self, dir_path: &Path) -> Result<Metadata> {
        let cargo_toml_path = dir_path.join("Cargo.toml");
        let content = fs::read_to_string(cargo_toml_path)?;

        let cargo_toml: toml::Table = toml::from_str(&content).map_err(|e| {
            PackageError::ParseFileError(format!("Failed to parse Cargo.toml: {e}"))
        })?;

        let package = cargo_toml
            .get("package")
            .and_then(|p| p.as_table())
            .ok_or(PackageError::VersionNotFound)?;

        let version = package
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or(PackageError::VersionNotFound)?;

        let author = package
            .get("authors")
            .and_then(|a| a.as_array())
            .and_then(|a| a.first())
            .and_then(|a| a.as_str())
            .map(str::to_string);

        Ok(Metadata {
            version: SemverVersion::parse(version)?,
            author,
        })
    }
}
