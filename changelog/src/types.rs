/// One commit read out of the requested log range.
///
/// `author` is `None` when the subject line carried no parenthesized byline.
/// `body` holds the commit body lines without their line terminators; an
/// empty vector means the commit had no body worth rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    pub title: String,
    pub author: Option<String>,
    pub body: Vec<String>,
}
