//! Collapsed/expanded card preview over a parsed suggestion.

use super::Section;

/// Number of idea cards shown before "show more".
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

/// View over parsed sections that knows how many cards to show.
#[derive(Debug, Clone, Copy)]
pub struct SectionPreview<'a> {
    sections: &'a [Section],
    limit: usize,
}

impl<'a> SectionPreview<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self::with_limit(sections, DEFAULT_PREVIEW_LIMIT)
    }

    pub fn with_limit(sections: &'a [Section], limit: usize) -> Self {
        Self { sections, limit }
    }

    /// Sections to render in the given expansion state.
    pub fn visible(&self, expanded: bool) -> &'a [Section] {
        if expanded {
            self.sections
        } else {
            &self.sections[..self.sections.len().min(self.limit)]
        }
    }

    /// Sections hidden while collapsed.
    pub fn hidden_count(&self) -> usize {
        self.sections.len().saturating_sub(self.limit)
    }

    /// Whether a show more/less toggle is needed at all.
    pub fn is_expandable(&self) -> bool {
        self.hidden_count() > 0
    }

    /// Label of the expand/collapse toggle, if one is needed.
    pub fn toggle_label(&self, expanded: bool) -> Option<String> {
        if !self.is_expandable() {
            return None;
        }
        Some(if expanded {
            "Show Less".to_string()
        } else {
            format!("Show {} More Ideas", self.hidden_count())
        })
    }

    /// Header label such as "3 Creative Ideas".
    pub fn count_label(&self) -> String {
        match self.sections.len() {
            1 => "1 Creative Idea".to_string(),
            n => format!("{n} Creative Ideas"),
        }
    }
}
