//! Structuring of generated suggestion text into idea sections.
//!
//! Generated suggestions arrive as loosely formatted prose: numbered lists,
//! bold headers, markdown headings, bullets. [`Sectionizer::parse`] folds the
//! lines of such a block into an ordered list of [`Section`]s for card layout.
//! Parsing never fails; text with no recognizable structure comes back as a
//! single section holding the input verbatim.

mod markdown;
mod matchers;
mod preview;

pub use markdown::{clean_content_line, strip_bold, strip_bold_markers, strip_bullet, strip_italic};
pub use matchers::{HeaderMatch, HeaderRule, classify};
pub use preview::{DEFAULT_PREVIEW_LIMIT, SectionPreview};

use crate::config::SectionizerConfig;
use serde::{Deserialize, Serialize};

/// One idea extracted from a generated suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display ordinal.
    pub number: u32,
    /// Heading text, if the idea had one.
    pub title: Option<String>,
    /// Cleaned body lines.
    pub content: Vec<String>,
}

impl Section {
    fn titled(number: u32, title: Option<String>) -> Self {
        Self {
            number,
            title,
            content: Vec::new(),
        }
    }

    /// Whether the section carries anything worth showing.
    fn has_body(&self) -> bool {
        self.title.is_some() || !self.content.is_empty()
    }

    /// Plain-text form used when copying a single idea card.
    pub fn copy_text(&self) -> String {
        let body = self.content.join("\n");
        match &self.title {
            Some(title) => format!("{title}\n{body}"),
            None => body,
        }
    }
}

/// Line-by-line accumulator for the sectionizing fold.
#[derive(Default)]
struct Scan {
    sections: Vec<Section>,
    current: Option<Section>,
}

impl Scan {
    fn step(mut self, line: &str, rules: &[HeaderRule]) -> Self {
        if let Some(header) = classify(line, rules) {
            self.flush();
            let number = header.number.unwrap_or_else(|| self.next_number());
            self.current = Some(Section::titled(number, header.title));
            return self;
        }

        match self.current.as_mut() {
            Some(section) => {
                let cleaned = clean_content_line(line);
                if !cleaned.is_empty() {
                    section.content.push(cleaned);
                }
            }
            // Body text before any header opens an untitled first section.
            None => {
                self.current = Some(Section {
                    number: 1,
                    title: None,
                    content: vec![strip_bold(line)],
                });
            }
        }
        self
    }

    fn next_number(&self) -> u32 {
        u32::try_from(self.sections.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    fn flush(&mut self) {
        if let Some(section) = self.current.take().filter(Section::has_body) {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

/// Splits generated text into sections using an ordered set of header rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sectionizer {
    rules: Vec<HeaderRule>,
}

impl Default for Sectionizer {
    fn default() -> Self {
        Self {
            rules: HeaderRule::DEFAULT_PRECEDENCE.to_vec(),
        }
    }
}

impl Sectionizer {
    /// Create a sectionizer with the default rule precedence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sectionizer trying `rules` in the given order.
    pub fn with_rules(rules: impl Into<Vec<HeaderRule>>) -> Self {
        Self { rules: rules.into() }
    }

    pub fn from_config(config: &SectionizerConfig) -> Self {
        Self::with_rules(config.precedence.clone())
    }

    /// Rules in the order they are tried.
    pub fn rules(&self) -> &[HeaderRule] {
        &self.rules
    }

    /// Parse `raw` into sections. Always returns at least one section.
    pub fn parse(&self, raw: &str) -> Vec<Section> {
        let sections = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(Scan::default(), |scan, line| scan.step(line, &self.rules))
            .finish();

        if sections.is_empty() {
            log::debug!("No structure found in {} bytes of text, using fallback section", raw.len());
            return vec![Section {
                number: 1,
                title: None,
                content: vec![raw.to_string()],
            }];
        }

        log::debug!("Parsed {} sections", sections.len());
        sections
    }
}

/// Parse `raw` with the default rule precedence.
pub fn parse(raw: &str) -> Vec<Section> {
    Sectionizer::default().parse(raw)
}
