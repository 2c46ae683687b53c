use clap::Parser;

#[derive(Parser)]
#[command(name = "changes")]
#[command(
    author,
    version,
    about = "Records the commits of a release in CHANGES.md"
)]
pub struct Cli {
    /// Changelog file to update instead of CHANGES.md
    #[clap(short, long)]
    pub file: Option<String>,
}
