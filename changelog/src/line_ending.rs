/// Line terminator convention of a changes document.
///
/// New text is composed with `\n` internally and translated once, right
/// before the merged document is assembled. The preserved tail of an
/// existing document is never rewritten, so an already-CRLF tail cannot be
/// corrupted by the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Convention used by existing document text. Absent or single-line
    /// documents default to `\n`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Translates text composed with `\n` into this convention.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace('\n', "\r\n"),
        }
    }
}
