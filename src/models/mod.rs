pub mod content;
pub mod emotion;
pub mod journal;
pub mod mood;

pub use content::{
    CandidateBatches, CandidateResult, ContentSuggestion, ContentType, InterestCategory,
    InterestKind, ItemDetails, ItemStatus, LibraryItem, SuggestionMetadata,
};
pub use emotion::{
    format_emotion_label, EmotionLabel, EmotionScores, EmotionPrediction, TextEmotionResult,
};
pub use journal::JournalEntry;
pub use mood::{mood_by_name, mood_options, EmotionTag, MoodEntry, MoodOption};
