use crate::config::ChangelogConfig;
use crate::document;
use crate::error::{ChangelogError, Result};
use crate::formatter::format_entries;
use crate::line_ending::LineEnding;
use crate::parser::parse;
use crate::source::LogSource;
use crate::store::Store;

/// Merges the commits of one release into the persisted changes document.
///
/// One instance describes one release run: the version being cut, the
/// package's own author (whose bylines are suppressed) and the document
/// configuration. The store and log source are injected per call.
pub struct Merger<'a> {
    version: &'a str,
    author: &'a str,
    config: ChangelogConfig,
}

impl<'a> Merger<'a> {
    pub fn new(version: &'a str, author: &'a str, config: ChangelogConfig) -> Self {
        Self {
            version,
            author,
            config,
        }
    }

    /// Reads the document from `store`, merges the release's commits in and
    /// writes the result back. Returns the pre-merge text for the caller's
    /// own reporting, `None` when the document did not exist yet.
    ///
    /// Validation failures (bad header, version already recorded) and log
    /// failures propagate before anything is written.
    pub fn run(&self, store: &dyn Store, log: &dyn LogSource) -> Result<Option<String>> {
        let previous = store.read(&self.config.file_name)?;
        let merged = self.merge(previous.as_deref(), log)?;
        store.write(&self.config.file_name, &merged)?;
        Ok(previous)
    }

    /// Builds the merged document text without touching any store.
    pub fn merge(&self, text: Option<&str>, log: &dyn LogSource) -> Result<String> {
        let text = text.unwrap_or("");
        let ending = LineEnding::detect(text);

        if !text.is_empty() && text.lines().next() != Some(document::HEADER) {
            return Err(ChangelogError::HeaderMismatch {
                file: self.config.file_name.clone(),
            });
        }

        let recorded = document::first_version(text);

        if document::contains_version(text, self.version) {
            return Err(self.already_recorded(recorded, log)?);
        }

        let entries = parse(&log.fetch(&range_since(recorded))?);
        let section = format_entries(&entries, self.author);
        Ok(splice(text, self.version, &section, ending))
    }

    /// Builds the duplicate-version error, attaching the rendered block of
    /// commits made since the most recent recorded release, when any exist.
    fn already_recorded(
        &self,
        recorded: Option<&str>,
        log: &dyn LogSource,
    ) -> Result<ChangelogError> {
        let outstanding = match recorded {
            Some(version) => {
                let entries = parse(&log.fetch(&range_since(Some(version)))?);
                if entries.is_empty() {
                    None
                } else {
                    Some(format_entries(&entries, self.author))
                }
            }
            None => None,
        };

        Ok(ChangelogError::AlreadyRecorded {
            version: self.version.to_string(),
            file: self.config.file_name.clone(),
            outstanding,
        })
    }
}

/// Revision range covering everything after `version`, or the entire
/// history when no version has been recorded yet.
fn range_since(version: Option<&str>) -> String {
    match version {
        Some(version) => format!("v{version}..HEAD"),
        None => String::new(),
    }
}

/// Assembles header, new section and the old document's tail. Only the
/// generated prefix goes through line-ending translation; the tail keeps
/// its original bytes.
fn splice(text: &str, version: &str, section: &str, ending: LineEnding) -> String {
    let mut generated = String::with_capacity(section.len() + 32);
    generated.push_str(document::HEADER);
    generated.push_str("\n\n## ");
    generated.push_str(version);
    generated.push_str("\n\n");
    generated.push_str(section);

    match document::section_start(text) {
        Some(tail) => {
            generated.push('\n');
            let mut merged = ending.apply(&generated);
            merged.push_str(&text[tail..]);
            merged
        }
        None => ending.apply(&generated),
    }
}
