use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{
    CandidateBatches, CandidateResult, ContentSuggestion, LibraryItem, SuggestionMetadata,
};
use crate::suggestions::need_state::{need_state_for_mood, NeedState};
use crate::suggestions::templates::{benefit_text, rationale_templates};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// What the heuristic path knows about the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionRequest {
    /// Latest mood label; `None` is treated as neutral.
    pub mood: Option<String>,
    pub journal_keywords: Vec<String>,
    pub interests: Vec<String>,
    pub library_items: Vec<LibraryItem>,
}

impl SuggestionRequest {
    /// Lowercased mood, defaulting to "neutral".
    pub fn mood_label(&self) -> String {
        self.mood
            .as_deref()
            .map(str::trim)
            .filter(|mood| !mood.is_empty())
            .unwrap_or("neutral")
            .to_lowercase()
    }
}

/// Build the rationale for one candidate: a random template for the need
/// state, plus a note when one of the user's interests shows up in the title
/// or genres.
pub fn fallback_rationale<R: Rng + ?Sized>(
    need: NeedState,
    interests: &[String],
    candidate: &CandidateResult,
    rng: &mut R,
) -> String {
    let mut rationale = rationale_templates(need)
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string();

    let title = candidate.title.to_lowercase();
    let matched = interests.iter().find(|interest| {
        let needle = interest.to_lowercase();
        title.contains(&needle)
            || candidate
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(&needle))
    });
    if let Some(interest) = matched {
        rationale.push_str(&format!(" This connects with your interest in \"{interest}\"."));
    }

    rationale
}

/// Turn fetched candidates into suggestions: dedupe by title, drop anything
/// already in the library, attach rationale and benefit text.
///
/// Never fails; no candidates means no suggestions.
pub fn rank_fallback_suggestions<R: Rng + ?Sized>(
    request: &SuggestionRequest,
    candidates: CandidateBatches,
    rng: &mut R,
) -> Vec<ContentSuggestion> {
    let mood = request.mood_label();
    let need = need_state_for_mood(&mood);

    if candidates.is_empty() {
        log_info!("no candidates fetched for mood {}, nothing to rank", mood);
        return Vec::new();
    }

    let all = candidates.into_ordered();
    let fetched = all.len();

    let mut seen = HashSet::new();
    let unique: Vec<CandidateResult> = all
        .into_iter()
        .filter(|candidate| seen.insert(candidate.title.to_lowercase()))
        .collect();

    let library_titles: HashSet<String> = request
        .library_items
        .iter()
        .map(|item| item.name.to_lowercase())
        .collect();

    let suggestions: Vec<ContentSuggestion> = unique
        .into_iter()
        .filter(|candidate| !library_titles.contains(&candidate.title.to_lowercase()))
        .map(|candidate| {
            let rationale_text = fallback_rationale(need, &request.interests, &candidate, rng);
            ContentSuggestion {
                id: Uuid::new_v4().to_string(),
                content_type: candidate.content_type,
                reason: format!(
                    "{} for your \"{}\" state",
                    candidate.content_type.display_name(),
                    mood
                ),
                rationale_text,
                benefit_text: benefit_text(candidate.content_type, need).to_string(),
                dominant_mood: mood.clone(),
                metadata: SuggestionMetadata {
                    genres: candidate.genres,
                    year: candidate.year,
                    external_id: candidate.external_id,
                },
                title: candidate.title,
                author: candidate.author,
                description: candidate.description,
                url: candidate.url,
                image_url: candidate.image_url,
                source: candidate.source,
                is_saved: false,
                is_dismissed: false,
            }
        })
        .collect();

    log_info!(
        "fallback ranking for mood {} ({}): kept {} of {} candidates",
        mood,
        need,
        suggestions.len(),
        fetched
    );
    suggestions
}
