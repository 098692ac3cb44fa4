use serde::{Deserialize, Serialize};

use crate::insights::keywords::{extract_journal_keywords, rank_by_frequency};
use crate::models::{ContentType, InterestKind, LibraryItem};

const MAX_GENRES: usize = 6;
const MAX_AUTHORS: usize = 4;
const MAX_TYPES: usize = 3;

/// What the user's saved library says about their taste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryProfile {
    pub top_genres: Vec<String>,
    pub top_authors: Vec<String>,
    pub theme_keywords: Vec<String>,
    pub item_titles: Vec<String>,
    pub preferred_types: Vec<ContentType>,
}

impl LibraryProfile {
    pub fn is_empty(&self) -> bool {
        self.item_titles.is_empty()
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(name: &str) -> String {
    name.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

/// Build a taste profile from library items. Genre and topic interests are
/// ignored; only saved items count.
pub fn extract_library_profile(items: &[LibraryItem]) -> LibraryProfile {
    let saved: Vec<&LibraryItem> = items
        .iter()
        .filter(|item| item.interest_type == InterestKind::Item)
        .collect();

    let genres = saved
        .iter()
        .flat_map(|item| item.details.genres.iter().map(|genre| genre.to_lowercase()));
    let authors = saved
        .iter()
        .filter_map(|item| item.details.author.as_deref())
        .filter(|author| !author.is_empty())
        .map(str::to_lowercase);
    let types = saved
        .iter()
        .map(|item| item.details.content_type.unwrap_or_default());
    let descriptions: Vec<&str> = saved
        .iter()
        .filter_map(|item| item.details.description.as_deref())
        .filter(|description| !description.is_empty())
        .collect();

    LibraryProfile {
        top_genres: rank_by_frequency(genres)
            .into_iter()
            .take(MAX_GENRES)
            .map(|(genre, _)| capitalize_first(&genre))
            .collect(),
        top_authors: rank_by_frequency(authors)
            .into_iter()
            .take(MAX_AUTHORS)
            .map(|(author, _)| title_case(&author))
            .collect(),
        theme_keywords: extract_journal_keywords(&descriptions),
        item_titles: saved.iter().map(|item| item.name.clone()).collect(),
        preferred_types: rank_by_frequency(types)
            .into_iter()
            .take(MAX_TYPES)
            .map(|(content_type, _)| content_type)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterestCategory, ItemDetails};

    fn item(name: &str, kind: InterestKind, details: ItemDetails) -> LibraryItem {
        LibraryItem {
            id: name.to_lowercase(),
            category: InterestCategory::Topic,
            name: name.into(),
            score: 1.0,
            interest_type: kind,
            status: None,
            details,
        }
    }

    fn book(name: &str, author: &str, genres: &[&str], description: &str) -> LibraryItem {
        item(
            name,
            InterestKind::Item,
            ItemDetails {
                author: Some(author.into()),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                description: Some(description.into()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn profiles_saved_items_only() {
        let items = vec![
            book(
                "Meditations",
                "marcus aurelius",
                &["philosophy", "Classics"],
                "Stoic notes on virtue",
            ),
            book("Letters", "Seneca", &["Philosophy"], "Letters on stoic virtue"),
            item("Sci-Fi", InterestKind::Genre, ItemDetails::default()),
            item(
                "Arrival",
                InterestKind::Item,
                ItemDetails {
                    content_type: Some(ContentType::Movie),
                    genres: vec!["science fiction".into()],
                    ..Default::default()
                },
            ),
        ];

        let profile = extract_library_profile(&items);
        assert_eq!(profile.item_titles, vec!["Meditations", "Letters", "Arrival"]);
        assert_eq!(profile.top_genres, vec!["Philosophy", "Classics", "Science fiction"]);
        assert_eq!(profile.top_authors, vec!["Marcus Aurelius", "Seneca"]);
        assert_eq!(profile.preferred_types, vec![ContentType::Book, ContentType::Movie]);
        assert_eq!(&profile.theme_keywords[..2], &["stoic", "virtue"]);
    }

    #[test]
    fn empty_library() {
        let profile = extract_library_profile(&[]);
        assert!(profile.is_empty());
        assert!(profile.top_genres.is_empty());
        assert!(profile.preferred_types.is_empty());
    }
}
