use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::insights::LibraryProfile;
use crate::suggestions::ranking::SuggestionRequest;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Search terms per mood, used for book/podcast/movie lookups.
pub fn mood_search_terms(mood: &str) -> &'static [&'static str] {
    match mood {
        "happy" => &["adventure", "comedy", "inspiration", "travel", "creativity"],
        "sad" => &["comfort", "healing", "hope", "uplifting", "self-care"],
        "angry" => &["meditation", "calm", "mindfulness", "stoicism", "nature"],
        "fearful" => &["courage", "anxiety relief", "mindfulness", "breathing", "positivity"],
        "anxious" => &["relaxation", "guided meditation", "stress relief", "grounding", "sleep"],
        "surprised" => &["thriller", "wonder", "exploration", "discovery", "innovation"],
        "disgusted" => &["comedy", "light-hearted", "feel-good", "wholesome", "beauty"],
        "joyful" => &["adventure", "exploration", "epic", "celebration", "music"],
        "calm" => &["philosophy", "nature", "poetry", "classical", "ambient"],
        "focused" => &["productivity", "deep work", "engineering", "systems", "strategy"],
        "tired" => &["light comedy", "short stories", "ambient music", "sleep", "rest"],
        _ => &["mystery", "documentary", "biography", "learning", "science"],
    }
}

/// Music search terms per mood.
pub fn mood_music_terms(mood: &str) -> &'static [&'static str] {
    match mood {
        "happy" => &["upbeat pop", "feel good playlist", "dance hits", "party music"],
        "sad" => &["acoustic ballads", "lo-fi chill", "piano ambient", "soft indie"],
        "angry" => &[
            "calming instrumental",
            "nature sounds",
            "classical calm",
            "ambient meditation",
        ],
        "anxious" => &["meditation music", "rain sounds", "sleeping music", "binaural beats"],
        "calm" => &["classical piano", "jazz lounge", "bossa nova", "ambient nature"],
        "focused" => &["focus music", "study beats", "lo-fi hip hop", "deep concentration"],
        "tired" => &["sleep music", "lullabies", "ambient relaxation", "soft piano"],
        "joyful" => &[
            "celebration hits",
            "uplifting anthems",
            "summer vibes",
            "euphoric electronic",
        ],
        _ => &["chill mix", "indie folk", "coffeehouse playlist", "alternative rock"],
    }
}

/// One query per content source, for the caller's search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    pub books: String,
    pub podcasts: String,
    pub movies: String,
    pub music: String,
    /// Every assembled query, in priority order.
    pub queries: Vec<String>,
}

fn pick<'a, R: Rng + ?Sized>(terms: &[&'a str], rng: &mut R) -> &'a str {
    terms.choose(rng).copied().unwrap_or_default()
}

/// Assemble search queries from the mood, library genres, interests and
/// journal keywords.
///
/// Query order: top genre with a mood term, a plain mood term, a mood term
/// with an interest, the first two journal keywords. Padded with another mood
/// term when fewer than two were built. Books use the first query, podcasts
/// the second and movies the third, falling back to the last available.
pub fn build_search_plan<R: Rng + ?Sized>(
    request: &SuggestionRequest,
    profile: Option<&LibraryProfile>,
    rng: &mut R,
) -> SearchPlan {
    let mood = request.mood_label();
    let terms = mood_search_terms(&mood);
    let music_terms = mood_music_terms(&mood);

    let mut queries = Vec::new();

    if let Some(genre) = profile.and_then(|p| p.top_genres.choose(rng)) {
        queries.push(format!("{} {}", genre, pick(terms, rng)));
    }

    queries.push(pick(terms, rng).to_string());

    if let Some(interest) = request.interests.choose(rng) {
        queries.push(format!("{} {}", pick(terms, rng), interest));
    }

    if !request.journal_keywords.is_empty() {
        let keywords: Vec<&str> = request
            .journal_keywords
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        queries.push(keywords.join(" "));
    }

    if queries.len() < 2 {
        queries.push(pick(terms, rng).to_string());
    }

    let at = |index: usize| queries[index.min(queries.len() - 1)].clone();
    let plan = SearchPlan {
        books: at(0),
        podcasts: at(1),
        movies: at(2),
        music: pick(music_terms, rng).to_string(),
        queries: queries.clone(),
    };

    log_debug!("search plan for {}: {:?}", mood, plan.queries);
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mood_only_pads_to_two_queries() {
        let request = SuggestionRequest {
            mood: Some("sad".into()),
            ..Default::default()
        };
        let plan = build_search_plan(&request, None, &mut StdRng::seed_from_u64(5));

        assert_eq!(plan.queries.len(), 2);
        assert_eq!(plan.books, plan.queries[0]);
        assert_eq!(plan.podcasts, plan.queries[1]);
        assert_eq!(plan.movies, plan.queries[1]);
        for query in &plan.queries {
            assert!(mood_search_terms("sad").iter().any(|t| *t == query.as_str()));
        }
        assert!(mood_music_terms("sad").iter().any(|t| *t == plan.music));
    }

    #[test]
    fn all_signals_are_mixed_in_order() {
        let request = SuggestionRequest {
            mood: Some("calm".into()),
            journal_keywords: vec!["garden".into(), "morning".into(), "coffee".into()],
            interests: vec!["Stoicism".into()],
            library_items: Vec::new(),
        };
        let profile = LibraryProfile {
            top_genres: vec!["Philosophy".into()],
            ..Default::default()
        };
        let plan = build_search_plan(&request, Some(&profile), &mut StdRng::seed_from_u64(11));

        assert_eq!(plan.queries.len(), 4);
        assert!(plan.books.starts_with("Philosophy "));
        assert!(plan.movies.ends_with(" Stoicism"));
        assert_eq!(plan.queries[3], "garden morning");
    }

    #[test]
    fn unknown_mood_uses_neutral_terms() {
        assert_eq!(mood_search_terms("bewildered"), mood_search_terms("neutral"));
        assert_eq!(mood_music_terms("surprised"), mood_music_terms("neutral"));
        let mut rng = StdRng::seed_from_u64(2);
        let plan = build_search_plan(&SuggestionRequest::default(), None, &mut rng);
        assert!(mood_music_terms("neutral").iter().any(|t| *t == plan.music));
    }
}
