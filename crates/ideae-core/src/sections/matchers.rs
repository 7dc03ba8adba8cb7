//! Header line matchers.
//!
//! Each rule recognizes one way a generated idea list announces a new idea.
//! Rules are independent and tried in a configurable precedence order; the
//! first one that matches a line wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::markdown::strip_bold_markers;

/// `1. Title`, `2) "Title"`, `3: **Title**`
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\d+)[.):]\s*\)?\s*\*{0,2}["']?(.+?)["']?\*{0,2}\s*$"#)
        .expect("numbered item pattern is valid")
});

/// `**Title**`, `**1. Title**:`
static BOLD_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*(\d+[.)]?\s*)?(.+?)\*\*:?\s*$").expect("bold header pattern is valid")
});

/// `# Title` through `### Title`
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,3}\s*([^#].*)$").expect("heading pattern is valid"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digits pattern is valid"));

/// A way of recognizing a section header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderRule {
    /// Leading integer followed by `.`, `)` or `:`.
    Numbered,
    /// Line wholly wrapped in `**...**`, optionally numbered inside the bold.
    BoldHeader,
    /// One to three `#` characters.
    Heading,
}

/// What a matching rule extracted from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Explicit numeral, if the line carried one that parses as an integer.
    pub number: Option<u32>,
    /// Cleaned title; `None` when nothing is left after cleaning.
    pub title: Option<String>,
}

impl HeaderRule {
    /// Default precedence: numbered items, then bold headers, then headings.
    pub const DEFAULT_PRECEDENCE: [HeaderRule; 3] =
        [HeaderRule::Numbered, HeaderRule::BoldHeader, HeaderRule::Heading];

    /// Try this rule against a trimmed, non-blank line.
    pub fn match_line(self, line: &str) -> Option<HeaderMatch> {
        match self {
            HeaderRule::Numbered => match_numbered(line),
            HeaderRule::BoldHeader => match_bold_header(line),
            HeaderRule::Heading => match_heading(line),
        }
    }
}

/// Run `rules` in order against `line`, returning the first match.
pub fn classify(line: &str, rules: &[HeaderRule]) -> Option<HeaderMatch> {
    rules.iter().find_map(|rule| rule.match_line(line))
}

fn match_numbered(line: &str) -> Option<HeaderMatch> {
    let caps = NUMBERED.captures(line)?;
    let number = caps[1].parse().ok();
    let title = strip_bold_markers(&caps[2]);
    let title = title.trim_start_matches(['"', '\'']).trim_end_matches(['"', '\'']);
    Some(HeaderMatch {
        number,
        title: non_empty(title),
    })
}

fn match_bold_header(line: &str) -> Option<HeaderMatch> {
    let caps = BOLD_HEADER.captures(line)?;
    let number = caps
        .get(1)
        .and_then(|prefix| DIGITS.find(prefix.as_str()))
        .and_then(|digits| digits.as_str().parse().ok());
    Some(HeaderMatch {
        number,
        title: non_empty(&strip_bold_markers(&caps[2])),
    })
}

fn match_heading(line: &str) -> Option<HeaderMatch> {
    let caps = HEADING.captures(line)?;
    Some(HeaderMatch {
        number: None,
        title: non_empty(&strip_bold_markers(&caps[1])),
    })
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(number: Option<u32>, title: &str) -> Option<HeaderMatch> {
        Some(HeaderMatch {
            number,
            title: Some(title.to_string()),
        })
    }

    #[test]
    fn test_numbered_punctuation_variants() {
        let rule = HeaderRule::Numbered;
        assert_eq!(rule.match_line("1. Build a treehouse"), titled(Some(1), "Build a treehouse"));
        assert_eq!(rule.match_line("2) Paint it blue"), titled(Some(2), "Paint it blue"));
        assert_eq!(rule.match_line("3: Add a rope ladder"), titled(Some(3), "Add a rope ladder"));
    }

    #[test]
    fn test_numbered_strips_bold_and_quotes() {
        let rule = HeaderRule::Numbered;
        assert_eq!(rule.match_line("1. **The Clockmaker**"), titled(Some(1), "The Clockmaker"));
        assert_eq!(rule.match_line("4. \"Moonlit Harbor\""), titled(Some(4), "Moonlit Harbor"));
        assert_eq!(
            rule.match_line("2. **Echo**: a story told backwards"),
            titled(Some(2), "Echo: a story told backwards")
        );
    }

    #[test]
    fn test_numbered_requires_punctuation() {
        assert_eq!(HeaderRule::Numbered.match_line("2024 was a strange year"), None);
        assert_eq!(HeaderRule::Numbered.match_line("1."), None);
    }

    #[test]
    fn test_numbered_overflow_has_no_number() {
        let matched = HeaderRule::Numbered
            .match_line("99999999999999999999. Too big")
            .unwrap();
        assert_eq!(matched.number, None);
        assert_eq!(matched.title.as_deref(), Some("Too big"));
    }

    #[test]
    fn test_bold_header() {
        let rule = HeaderRule::BoldHeader;
        assert_eq!(rule.match_line("**Idea One**"), titled(None, "Idea One"));
        assert_eq!(rule.match_line("**Idea Two**:"), titled(None, "Idea Two"));
        assert_eq!(rule.match_line("**7. Lucky Seven**"), titled(Some(7), "Lucky Seven"));
        assert_eq!(rule.match_line("**bold** and more"), None);
    }

    #[test]
    fn test_heading_levels() {
        let rule = HeaderRule::Heading;
        assert_eq!(rule.match_line("# Top"), titled(None, "Top"));
        assert_eq!(rule.match_line("### **Third**"), titled(None, "Third"));
        assert_eq!(rule.match_line("#### Too deep"), None);
    }

    #[test]
    fn test_classify_precedence() {
        let default = classify("1. **Both**", &HeaderRule::DEFAULT_PRECEDENCE);
        assert_eq!(default, titled(Some(1), "Both"));
        let reversed = [HeaderRule::Heading, HeaderRule::BoldHeader, HeaderRule::Numbered];
        assert_eq!(classify("**Bold**", &reversed), titled(None, "Bold"));

        assert_eq!(classify("plain text", &HeaderRule::DEFAULT_PRECEDENCE), None);
        assert_eq!(classify("# Heading", &[HeaderRule::Numbered]), None);
    }
}
