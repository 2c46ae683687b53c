pub mod error;
pub mod log;

pub use error::{GitError, Result};
pub use log::GitLog;
