//! Payloads exchanged with the generation and idea-storage endpoints.
//!
//! Only the shapes are modelled here; transport lives with the host.

use crate::sections::{Section, Sectionizer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Payload validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error("Idea title is empty")]
    EmptyTitle,
}

/// Prompt category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Writing,
    Design,
    ProblemSolving,
    GiftIdeas,
    ProjectNames,
    ContentIdeas,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Writing,
            Category::Design,
            Category::ProblemSolving,
            Category::GiftIdeas,
            Category::ProjectNames,
            Category::ContentIdeas,
        ]
    }

    /// Wire identifier, e.g. `gift-ideas`.
    pub fn id(self) -> &'static str {
        match self {
            Category::Writing => "writing",
            Category::Design => "design",
            Category::ProblemSolving => "problem-solving",
            Category::GiftIdeas => "gift-ideas",
            Category::ProjectNames => "project-names",
            Category::ContentIdeas => "content-ideas",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Writing => "Writing Prompts",
            Category::Design => "Design Inspiration",
            Category::ProblemSolving => "Problem Solving",
            Category::GiftIdeas => "Gift Ideas",
            Category::ProjectNames => "Project Names",
            Category::ContentIdeas => "Content Ideas",
        }
    }

    /// Example prompt shown in the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Writing => {
                "E.g., \"I need a story about a time traveler who can only go 5 minutes into the past...\""
            }
            Category::Design => "E.g., \"I'm designing a logo for a sustainable coffee brand...\"",
            Category::ProblemSolving => {
                "E.g., \"How can I make team meetings more engaging for remote workers...\""
            }
            Category::GiftIdeas => {
                "E.g., \"A gift for my dad who loves gardening and old movies...\""
            }
            Category::ProjectNames => {
                "E.g., \"A productivity app that helps writers stay focused...\""
            }
            Category::ContentIdeas => {
                "E.g., \"Content ideas for a YouTube channel about minimalist living...\""
            }
        }
    }
}

impl FromStr for Category {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|category| category.id() == s)
            .ok_or_else(|| ApiError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Body of `POST /creative/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub category: Category,
    pub prompt: String,
}

impl GenerateRequest {
    /// Build a request, trimming the prompt. Blank prompts are rejected.
    pub fn new(category: Category, prompt: &str) -> Result<Self, ApiError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ApiError::EmptyPrompt);
        }
        Ok(Self {
            category,
            prompt: prompt.to_string(),
        })
    }
}

/// A generated suggestion as returned by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub id: String,
    pub category: Category,
    pub prompt: String,
    pub suggestion: String,
    pub created_at: String,
}

impl GenerationResult {
    /// Sections of the suggestion text using the default rules.
    pub fn sections(&self) -> Vec<Section> {
        self.sections_with(&Sectionizer::default())
    }

    pub fn sections_with(&self, sectionizer: &Sectionizer) -> Vec<Section> {
        sectionizer.parse(&self.suggestion)
    }

    /// Body of `POST /favorites` for this result.
    pub fn to_favorite(&self) -> FavoriteCreate {
        FavoriteCreate {
            category: self.category,
            prompt: self.prompt.clone(),
            suggestion: self.suggestion.clone(),
        }
    }
}

/// Body of `POST /favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCreate {
    pub category: Category,
    pub prompt: String,
    pub suggestion: String,
}

/// Kind of a personal idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdeaKind {
    #[default]
    Note,
    Idea,
    Photo,
    Video,
    Link,
}

/// Body of `POST /ideas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub idea_type: IdeaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl IdeaCreate {
    /// A plain note.
    pub fn note(title: &str, content: Option<&str>) -> Result<Self, ApiError> {
        Ok(Self {
            title: required_title(title)?,
            content: content.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string),
            idea_type: IdeaKind::Note,
            media_url: None,
            tags: Vec::new(),
        })
    }

    /// A sketch saved as a photo idea; `image_data` is an exported data URL.
    pub fn sketch(title: &str, image_data: String) -> Result<Self, ApiError> {
        Ok(Self {
            title: required_title(title)?,
            content: None,
            idea_type: IdeaKind::Photo,
            media_url: Some(image_data),
            tags: Vec::new(),
        })
    }

    /// Add tags, skipping blanks and duplicates.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
        self
    }
}

fn required_title(title: &str) -> Result<String, ApiError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// How an idea's `media_url` should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Link,
}

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

impl MediaKind {
    pub fn classify(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("data:image") || IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
            MediaKind::Image
        } else if lower.contains("youtube") || lower.contains("vimeo") || lower.contains(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Link
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_wire_ids() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));
            assert_eq!(category.id().parse::<Category>().unwrap(), *category);
        }
        assert_eq!(
            "poetry".parse::<Category>(),
            Err(ApiError::UnknownCategory("poetry".to_string()))
        );
    }

    #[test]
    fn test_generate_request_trims_prompt() {
        let request = GenerateRequest::new(Category::Writing, "  a lighthouse keeper \n").unwrap();
        assert_eq!(request.prompt, "a lighthouse keeper");
        assert_eq!(GenerateRequest::new(Category::Design, "   "), Err(ApiError::EmptyPrompt));
    }

    #[test]
    fn test_generation_result_sections() {
        let result: GenerationResult = serde_json::from_str(
            r#"{
                "id": "abc",
                "category": "gift-ideas",
                "prompt": "for a gardener",
                "suggestion": "1. Seed library\n2. Kneeling pad",
                "created_at": "2025-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(result.category, Category::GiftIdeas);
        let titles: Vec<_> = result
            .sections()
            .into_iter()
            .filter_map(|section| section.title)
            .collect();
        assert_eq!(titles, vec!["Seed library", "Kneeling pad"]);

        let favorite = result.to_favorite();
        assert_eq!(favorite.suggestion, result.suggestion);
    }

    #[test]
    fn test_sketch_idea_payload() {
        let idea = IdeaCreate::sketch(" Doodle ", "data:image/png;base64,AAAA".to_string())
            .unwrap()
            .with_tags(["art", " ", "art", "sketch"]);

        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Doodle",
                "idea_type": "photo",
                "media_url": "data:image/png;base64,AAAA",
                "tags": ["art", "sketch"],
            })
        );
    }

    #[test]
    fn test_note_requires_title() {
        assert_eq!(IdeaCreate::note("  ", None), Err(ApiError::EmptyTitle));
        let note = IdeaCreate::note("Plot twist", Some("  ")).unwrap();
        assert_eq!(note.content, None);
    }

    #[test]
    fn test_media_classification() {
        assert_eq!(MediaKind::classify("data:image/png;base64,AAAA"), MediaKind::Image);
        assert_eq!(MediaKind::classify("https://x.test/cat.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::classify("https://www.youtube.com/watch?v=1"), MediaKind::Video);
        assert_eq!(MediaKind::classify("https://example.com/post"), MediaKind::Link);
    }
}
