use crate::error::Result;

/// Log output template every source implementation uses. Each commit comes
/// out as one marker-delimited block: the subject line with its author, a
/// blank line, then the raw body.
pub const LOG_TEMPLATE: &str = "» %s (%an)%n%n%b";

/// Provider of raw commit-log text.
///
/// `range` is either empty, meaning the entire history, or a revision range
/// such as `v1.2.3..HEAD`.
pub trait LogSource {
    fn fetch(&self, range: &str) -> Result<String>;
}
