use crate::types::CommitEntry;

/// Indentation plus quote prefix applied to every body line.
const BODY_PREFIX: &str = "    > ";

/// Renders all entries in the order the log produced them. No separators
/// are added between entries beyond each entry's own trailing blank line.
pub fn format_entries(entries: &[CommitEntry], default_author: &str) -> String {
    let default_name = author_name(default_author);
    let mut formatted = String::new();
    for entry in entries {
        format_entry_into(&mut formatted, entry, default_name);
    }
    formatted
}

/// Renders one entry as a Markdown bullet, with its body quoted underneath
/// when present.
pub fn format_entry(entry: &CommitEntry, default_author: &str) -> String {
    let mut formatted = String::new();
    format_entry_into(&mut formatted, entry, author_name(default_author));
    formatted
}

fn format_entry_into(target: &mut String, entry: &CommitEntry, default_name: &str) {
    target.push_str("- ");
    target.push_str(&entry.title);
    if let Some(author) = noteworthy_author(entry, default_name) {
        target.push_str(" (");
        target.push_str(author);
        target.push(')');
    }
    target.push('\n');

    if !entry.body.is_empty() {
        target.push('\n');
        for line in &entry.body {
            target.push_str(BODY_PREFIX);
            target.push_str(line);
            target.push('\n');
        }
        target.push('\n');
    }
}

/// The byline is noise when the commit comes from the package's own author.
fn noteworthy_author<'a>(entry: &'a CommitEntry, default_name: &str) -> Option<&'a str> {
    entry
        .author
        .as_deref()
        .filter(|author| *author != default_name)
}

/// Reduces an author field such as `Jane Doe <jane@example.com>` to the
/// bare name used for byline comparison.
fn author_name(author: &str) -> &str {
    match author.split_once(" <") {
        Some((name, _)) => name.trim(),
        None => author.trim(),
    }
}
