//! Content search results, library items and generated suggestions.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Book,
    Movie,
    Podcast,
    Music,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Book => "book",
            ContentType::Movie => "movie",
            ContentType::Podcast => "podcast",
            ContentType::Music => "music",
        }
    }

    /// Capitalized name used in suggestion reasons ("Book for your ...").
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Book => "Book",
            ContentType::Movie => "Movie",
            ContentType::Podcast => "Podcast",
            ContentType::Music => "Music",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One result returned by the external search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResult {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub source: String,
    /// Genres, subjects or categories reported by the search API.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub year: Option<String>,
    /// ISBN, TMDB id or iTunes track id.
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Results of the four parallel searches, one batch per content type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateBatches {
    pub books: Vec<CandidateResult>,
    pub podcasts: Vec<CandidateResult>,
    pub movies: Vec<CandidateResult>,
    pub music: Vec<CandidateResult>,
}

impl CandidateBatches {
    /// Flatten in ranking order: books, podcasts, movies, music.
    pub fn into_ordered(self) -> Vec<CandidateResult> {
        let mut all = self.books;
        all.extend(self.podcasts);
        all.extend(self.movies);
        all.extend(self.music);
        all
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
            && self.podcasts.is_empty()
            && self.movies.is_empty()
            && self.music.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    Genre,
    Topic,
    Skill,
    Creator,
}

/// A broad tag (`Genre`) or a specific book/movie/etc. (`Item`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterestKind {
    Genre,
    Item,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Read,
    Reading,
    WantToRead,
    Listened,
    Watched,
}

/// Typed per-item details; every field is optional because each content type
/// fills a different subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDetails {
    pub content_type: Option<ContentType>,
    pub author: Option<String>,
    pub genres: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub isbn: Option<String>,
    pub year: Option<String>,
}

/// An entry of the user's interests library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    #[serde(default)]
    pub id: String,
    pub category: InterestCategory,
    pub name: String,
    /// 0-1 engagement score.
    #[serde(default)]
    pub score: f64,
    pub interest_type: InterestKind,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub details: ItemDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionMetadata {
    pub genres: Vec<String>,
    pub year: Option<String>,
    pub external_id: Option<String>,
}

/// A ranked suggestion ready to be persisted or shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub reason: String,
    pub rationale_text: String,
    pub benefit_text: String,
    pub dominant_mood: String,
    pub source: String,
    pub metadata: SuggestionMetadata,
    pub is_saved: bool,
    pub is_dismissed: bool,
}
