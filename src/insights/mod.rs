//! Local summaries of the mood log, journal and library that feed the
//! suggestion path and the weekly insights screen.

pub mod insight;
pub mod keywords;
pub mod profile;
pub mod summary;
pub mod weekly;

pub use insight::{generate_fallback_insight, AiInsight, ONBOARDING_INSIGHT};
pub use keywords::extract_journal_keywords;
pub use profile::{extract_library_profile, LibraryProfile};
pub use summary::{compute_mood_summary, MoodSummary, MoodTrend};
pub use weekly::{compute_weekly_summary, format_word_count, SpectrumBucket, WeeklySummary};
