//! Heuristic content suggestions used when no remote ranker is available.

pub mod need_state;
pub mod ranking;
pub mod search_plan;
pub mod templates;

pub use need_state::{need_state_for_mood, NeedState};
pub use ranking::{fallback_rationale, rank_fallback_suggestions, SuggestionRequest};
pub use search_plan::{build_search_plan, mood_music_terms, mood_search_terms, SearchPlan};
pub use templates::{benefit_text, rationale_templates};
