use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::MoodEntry;

/// Aggregate view of a mood log, newest entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummary {
    pub dominant: String,
    pub latest_mood: String,
    /// Share of entries per label, each in `(0, 1]`.
    pub distribution: HashMap<String, f64>,
    pub average_score: f64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Upward,
    Downward,
    #[default]
    Stable,
}

impl MoodTrend {
    pub fn from_average(average_score: f64) -> Self {
        if average_score >= 7.0 {
            MoodTrend::Upward
        } else if average_score <= 4.0 {
            MoodTrend::Downward
        } else {
            MoodTrend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTrend::Upward => "upward",
            MoodTrend::Downward => "downward",
            MoodTrend::Stable => "stable",
        }
    }
}

/// Summarize a mood log. `entries[0]` is taken as the latest check-in.
///
/// The dominant label is the first one (in order of appearance) to reach the
/// highest count.
pub fn compute_mood_summary(entries: &[MoodEntry]) -> Option<MoodSummary> {
    let latest = entries.first()?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total_score = 0.0;
    for entry in entries {
        let label = entry.summary_label();
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
        total_score += entry.mood.score;
    }

    let total = entries.len();
    let mut dominant = "neutral";
    let mut max_count = 0;
    for (label, count) in &counts {
        if *count > max_count {
            max_count = *count;
            dominant = label.as_str();
        }
    }

    Some(MoodSummary {
        dominant: dominant.to_string(),
        latest_mood: latest.summary_label(),
        distribution: counts
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64 / total as f64))
            .collect(),
        average_score: total_score / total as f64,
        entry_count: total,
    })
}
