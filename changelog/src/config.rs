/// Configuration for locating the changelog document.
///
/// Passed explicitly to [`crate::Merger`]; nothing is read from the
/// environment. `file_name` may be a bare name resolved against the working
/// directory or a full path.
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub file_name: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file_name: "CHANGES.md".to_string(),
        }
    }
}
