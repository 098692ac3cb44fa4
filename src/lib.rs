//! On-device emotion inference for a mood journaling app.
//!
//! * [`vision`] scores a picture with colour/brightness heuristics.
//! * [`text`] blends emotion keyword hits with AFINN polarity.
//! * [`streak`] counts consecutive check-in days.
//! * [`discovery`] picks the day's wellbeing activities for the current mood.
//! * [`suggestions`] and [`insights`] turn the mood log, journal and library
//!   into ranked content suggestions when no remote ranker is available.
//!
//! [`EmotionEngine`] bundles the two classifiers with their settings.

pub mod discovery;
pub mod engine;
pub mod error;
pub mod insights;
pub mod models;
pub mod settings;
pub mod streak;
pub mod suggestions;
pub mod text;
pub mod utils;
pub mod vision;

pub use discovery::{daily_discovery_tasks, recommended_activities, Activity, DiscoveryTask};
pub use engine::EmotionEngine;
pub use error::{MoodError, Result};
pub use insights::{
    compute_mood_summary, compute_weekly_summary, extract_journal_keywords,
    extract_library_profile, generate_fallback_insight, AiInsight, LibraryProfile, MoodSummary,
    MoodTrend, WeeklySummary,
};
pub use models::{
    format_emotion_label, mood_by_name, mood_options, CandidateBatches, CandidateResult,
    ContentSuggestion, ContentType, EmotionLabel, EmotionPrediction, EmotionTag, JournalEntry,
    LibraryItem, MoodEntry, MoodOption, TextEmotionResult,
};
pub use settings::{AnalyzerSettings, SettingsStore};
pub use streak::{compute_streak, compute_streak_now, StreakResult};
pub use suggestions::{
    build_search_plan, need_state_for_mood, rank_fallback_suggestions, NeedState, SearchPlan,
    SuggestionRequest,
};
pub use utils::init_logging;
pub use vision::MediaInput;
