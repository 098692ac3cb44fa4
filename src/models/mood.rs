//! Mood check-in models consumed from the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodOption {
    pub name: String,
    pub icon: String,
    pub description: String,
    /// 0-10, used for charting and trend averages.
    pub score: f64,
}

impl MoodOption {
    fn builtin(name: &str, icon: &str, description: &str, score: f64) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            score,
        }
    }
}

/// Emotion detected alongside a check-in (camera or journal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionTag {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub mood: MoodOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionTag>,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Lowercased label used for summaries: detected emotion first, then the
    /// chosen mood, then "neutral".
    pub fn summary_label(&self) -> String {
        let label = self
            .emotion
            .as_ref()
            .map(|e| e.label.as_str())
            .filter(|label| !label.is_empty())
            .or_else(|| Some(self.mood.name.as_str()).filter(|name| !name.is_empty()))
            .unwrap_or("neutral");
        label.to_lowercase()
    }
}

/// The built-in mood choices offered at check-in.
pub fn mood_options() -> Vec<MoodOption> {
    vec![
        MoodOption::builtin(
            "Joyful",
            "sentiment_very_satisfied",
            "Feeling ecstatic and full of positive energy!",
            10.0,
        ),
        MoodOption::builtin(
            "Happy",
            "sentiment_satisfied",
            "A sense of contentment and well-being.",
            8.0,
        ),
        MoodOption::builtin(
            "Calm",
            "self_improvement",
            "Feeling peaceful, relaxed, and at ease.",
            7.0,
        ),
        MoodOption::builtin("Focused", "psychology", "In the zone and making progress.", 8.0),
        MoodOption::builtin("Neutral", "sentiment_neutral", "Just going with the flow today.", 5.0),
        MoodOption::builtin(
            "Tired",
            "battery_alert",
            "Feeling a bit drained and low on energy.",
            3.0,
        ),
        MoodOption::builtin("Sad", "sentiment_sad", "Feeling down and in need of comfort.", 2.0),
        MoodOption::builtin(
            "Anxious",
            "sentiment_agitated",
            "Feeling worried, nervous, or uneasy.",
            2.0,
        ),
        MoodOption::builtin(
            "Angry",
            "sentiment_angry",
            "Feeling frustrated, irritated, or upset.",
            1.0,
        ),
    ]
}

pub fn mood_by_name(name: &str) -> Option<MoodOption> {
    mood_options()
        .into_iter()
        .find(|mood| mood.name.eq_ignore_ascii_case(name))
}
