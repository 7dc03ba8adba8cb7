//! Markdown marker cleanup for section lines.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-](?:\s+|$)").expect("bullet pattern is valid"));

/// Remove every `**` marker, paired or not.
pub fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}

/// Unwrap `**bold**` spans.
pub fn strip_bold(text: &str) -> String {
    BOLD.replace_all(text, "${1}").into_owned()
}

/// Unwrap `*italic*` spans. Run after [`strip_bold`].
pub fn strip_italic(text: &str) -> String {
    ITALIC.replace_all(text, "${1}").into_owned()
}

/// Drop a leading `* ` or `- ` list bullet.
pub fn strip_bullet(text: &str) -> &str {
    match BULLET.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Clean a body line: bullet, then bold, then italic markers.
pub fn clean_content_line(line: &str) -> String {
    let unbulleted = strip_bullet(line);
    strip_italic(&strip_bold(unbulleted)).trim().to_string()
}
