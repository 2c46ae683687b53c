use std::path::Path;

use changelog::{ChangelogConfig, ChangelogError, FileStore, Merger};
use package::Package;

use crate::error::{CliError, Result};
use crate::source::GitLogSource;
use crate::ui;

/// Records the release's commits in the changelog: read the package's
/// version and author, collect the commits since the last recorded release
/// and splice them in as the newest section.
pub fn execute(file: Option<String>) -> Result<()> {
    let config = match file {
        Some(file_name) => ChangelogConfig { file_name },
        None => ChangelogConfig::default(),
    };

    let metadata = Package::read_from_project(Path::new("."))?;
    let version = metadata.version.to_string();
    let author = metadata.author.unwrap_or_default();

    let source = GitLogSource::discover()
        .map_err(|e| CliError::Git(e).with_context("Failed to locate git repository"))?;

    let merger = Merger::new(&version, &author, config.clone());
    match merger.run(&FileStore, &source) {
        Ok(previous) => {
            if previous.is_none() {
                ui::info_message(&format!("Created {}", config.file_name));
            }
            ui::success_message(&format!(
                "{} now records version {}",
                config.file_name, version
            ));
            Ok(())
        }
        Err(err) => {
            // Outstanding commits go to stdout before the error line.
            if let ChangelogError::AlreadyRecorded {
                outstanding: Some(block),
                ..
            } = &err
            {
                println!("# Changes for next release:");
                println!();
                print!("{block}");
            }
            Err(err.into())
        }
    }
}
