use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::CommitEntry;

/// Delimiter the log source is told to prefix onto every commit subject
/// line. Splitting happens on this token alone so the template's cosmetic
/// spacing does not matter.
pub const ENTRY_MARKER: &str = "»";

/// Matches a trailing ` (author)` byline. Greedy, so only the last
/// parenthesized group is taken and titles keep their own parentheses.
static AUTHOR_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*) \(([^)]+)\)$").expect("Failed to compile author suffix pattern")
});

/// Splits raw commit-log text into entries, one per marker-delimited block.
///
/// Text before the first marker is ignored, so input without any marker
/// (empty output, or output that is not in the template shape at all)
/// yields no entries.
pub fn parse(log: &str) -> Vec<CommitEntry> {
    let mut entries = Vec::new();
    let mut subject: Option<&str> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in log.lines() {
        if let Some(rest) = line.strip_prefix(ENTRY_MARKER) {
            if let Some(previous) = subject.take() {
                entries.push(build_entry(previous, &body));
            }
            subject = Some(rest.trim());
            body.clear();
        } else if subject.is_some() {
            body.push(line);
        }
    }

    if let Some(subject) = subject {
        entries.push(build_entry(subject, &body));
    }

    entries
}

fn build_entry(subject: &str, raw_body: &[&str]) -> CommitEntry {
    let (title, author) = split_author(subject);
    CommitEntry {
        title,
        author,
        body: trim_body(raw_body),
    }
}

fn split_author(subject: &str) -> (String, Option<String>) {
    match AUTHOR_SUFFIX_PATTERN.captures(subject) {
        Some(captures) => (captures[1].to_string(), Some(captures[2].to_string())),
        None => (subject.to_string(), None),
    }
}

/// Strips the log template's framing from the lines between a subject and
/// the next marker: one leading and one trailing blank line. A remainder of
/// only blank lines is no body at all.
fn trim_body(lines: &[&str]) -> Vec<String> {
    if lines.iter().all(|line| line.trim().is_empty()) {
        return Vec::new();
    }

    let mut lines = lines;
    if lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines = &lines[1..];
    }
    if lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines = &lines[..lines.len() - 1];
    }

    lines.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_commit() {
        let entries = parse("» Inception (That Dude)\n\n\n");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Inception");
        assert_eq!(entries[0].author.as_deref(), Some("That Dude"));
        assert!(entries[0].body.is_empty());
    }

    #[test]
    fn test_parse_splits_on_marker_lines() {
        let log = "» First change (Ann)\n\n\n» Second change (Bob)\n\nSome detail.\n\n";
        let entries = parse(log);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First change");
        assert_eq!(entries[1].title, "Second change");
        assert_eq!(entries[1].body, vec!["Some detail.".to_string()]);
    }

    #[test]
    fn test_parse_without_marker_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("foo").is_empty());
        assert!(parse("plain text\nwith lines\n").is_empty());
    }

    #[test]
    fn test_parse_ignores_text_before_first_marker() {
        let entries = parse("noise line\n» Real entry (Ann)\n\n\n");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Real entry");
    }

    #[test]
    fn test_parse_subject_without_byline() {
        let entries = parse("» Just a title\n\n\n");

        assert_eq!(entries[0].title, "Just a title");
        assert_eq!(entries[0].author, None);
    }

    #[test]
    fn test_parse_takes_last_parenthesized_group_as_author() {
        let entries = parse("» Add feature (x) (y)\n\n\n");

        assert_eq!(entries[0].title, "Add feature (x)");
        assert_eq!(entries[0].author.as_deref(), Some("y"));
    }

    #[test]
    fn test_parse_trims_body_framing() {
        let log = "» Change (Ann)\n\nFirst paragraph.\n\nSecond paragraph.\n\n";
        let entries = parse(log);

        assert_eq!(
            entries[0].body,
            vec![
                "First paragraph.".to_string(),
                "".to_string(),
                "Second paragraph.".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_all_blank_remainder_is_no_body() {
        let entries = parse("» Change (Ann)\n\n\n\n");

        assert!(entries[0].body.is_empty());
    }

    #[test]
    fn test_parse_handles_crlf_input() {
        let entries = parse("» Change (Ann)\r\n\r\nDetail.\r\n\r\n");

        assert_eq!(entries[0].title, "Change");
        assert_eq!(entries[0].body, vec!["Detail.".to_string()]);
    }
}
