#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use package::{EcosystemType, Package};

    fn create_test_rust_project(dir: &Path) -> std::io::Result<()> {
        let cargo_toml = r#"[package]
name = "test_project"
version = "0.1.0"
edition = "2021"
authors = ["Jane Doe <jane@example.com>"]

[dependencies]
"#;

        fs::write(dir.join("Cargo.toml"), cargo_toml)?;
        fs::create_dir_all(dir.join("src"))?;
        fs::write(dir.join("src").join("lib.rs"), "// Test file")?;
        Ok(())
    }

    fn create_test_js_project(dir: &Path) -> std::io::Result<()> {
        let package_json = r#"{
  "name": "test_project",
  "version": "1.0.0",
  "description": "Test project",
  "author": "Studio",
  "main": "index.js"
}"#;

        fs::write(dir.join("package.json"), package_json)?;
        fs::write(dir.join("index.js"), "// Test file")?;
        Ok(())
    }

    #[test]
    fn test_rust_package_metadata() {
        let temp_dir = TempDir::new().unwrap();
        create_test_rust_project(temp_dir.path()).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(metadata.version.to_string(), "0.1.0");
        assert_eq!(
            metadata.author.as_deref(),
            Some("Jane Doe <jane@example.com>")
        );
    }

    #[test]
    fn test_rust_package_without_authors() {
        let temp_dir = TempDir::new().unwrap();
        let cargo_toml = "[package]\nname = \"bare\"\nversion = \"0.2.0\"\n";
        fs::write(temp_dir.path().join("Cargo.toml"), cargo_toml).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(metadata.version.to_string(), "0.2.0");
        assert_eq!(metadata.author, None);
    }

    #[test]
    fn test_js_package_metadata() {
        let temp_dir = TempDir::new().unwrap();
        create_test_js_project(temp_dir.path()).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(metadata.version.to_string(), "1.0.0");
        assert_eq!(metadata.author.as_deref(), Some("Studio"));
    }

    #[test]
    fn test_js_author_object_is_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let package_json = r#"{
  "version": "1.2.3",
  "author": { "name": "Jane Doe", "email": "jane@example.com", "url": "https://example.com" }
}"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(
            metadata.author.as_deref(),
            Some("Jane Doe <jane@example.com>")
        );
    }

    #[test]
    fn test_js_author_object_without_email() {
        let temp_dir = TempDir::new().unwrap();
        let package_json = r#"{ "version": "1.2.3", "author": { "name": "Jane Doe" } }"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_js_missing_author_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let package_json = r#"{ "version": "3.0.0" }"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let metadata = Package::read_from_project(temp_dir.path()).unwrap();

        assert_eq!(metadata.author, None);
    }

    #[test]
    fn test_detection_prefers_package_json() {
        let temp_dir = TempDir::new().unwrap();
        create_test_rust_project(temp_dir.path()).unwrap();
        create_test_js_project(temp_dir.path()).unwrap();

        let ecosystem = Package::detect_ecosystem(temp_dir.path()).unwrap();

        assert_eq!(ecosystem, EcosystemType::JavaScript);
    }

    #[test]
    fn test_empty_directory_has_no_ecosystem() {
        let temp_dir = TempDir::new().unwrap();

        let err = Package::read_from_project(temp_dir.path()).unwrap_err();

        assert!(err.user_message().contains("Could not detect project type"));
    }
}
