pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod formatter;
pub mod line_ending;
pub mod parser;
pub mod source;
pub mod store;
pub mod testing;
pub mod types;

pub use crate::core::Merger;
pub use config::ChangelogConfig;
pub use error::{ChangelogError, Result};
pub use line_ending::LineEnding;
pub use source::{LOG_TEMPLATE, LogSource};
pub use store::{FileStore, Store};
pub use types::CommitEntry;
