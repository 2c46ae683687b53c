//! Positional scans over an existing changes document.
//!
//! The document is never parsed into a section model. Merging only needs to
//! know where the first version section starts; everything from there on is
//! an opaque tail carried through byte-for-byte.

/// Header line every changes document starts with.
pub const HEADER: &str = "# Changes";

const SECTION_PREFIX: &str = "## ";

/// Version recorded by the first (most recent) section header, if any.
pub fn first_version(text: &str) -> Option<&str> {
    text.lines()
        .find_map(|line| line.strip_prefix(SECTION_PREFIX))
        .map(str::trim)
}

/// Whether a section header line for exactly `version` exists anywhere in
/// the document.
pub fn contains_version(text: &str, version: &str) -> bool {
    let header = format!("{SECTION_PREFIX}{version}");
    text.lines().any(|line| line.trim_end() == header)
}

/// Byte offset where the first section header line starts, i.e. where the
/// opaque tail begins. `None` for a document without sections.
pub fn section_start(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(SECTION_PREFIX) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
