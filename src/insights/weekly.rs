//! Seven-day summary behind the insights screen: score and trend against the
//! previous week, journaling streak, words written, mood spectrum and topics.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::insights::keywords::rank_by_frequency;
use crate::models::{EmotionLabel, JournalEntry, MoodEntry};
use crate::streak::local_date;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

const SPECTRUM_SIZE: usize = 4;
const TOPIC_COUNT: usize = 2;
const TOPIC_MIN_LEN: usize = 4;
/// How far back the journaling streak looks.
const STREAK_HORIZON_DAYS: u64 = 365;

const TOPIC_STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "to", "of", "in", "is", "it", "for", "on", "with", "that", "this",
    "was", "are", "as", "at", "be", "by", "from", "or", "but", "i", "you", "we", "they", "my",
    "your", "our", "me", "us", "them", "so", "if", "not", "have", "has", "had", "do", "did",
    "done",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumBucket {
    pub name: String,
    /// Share of the top buckets, in whole percent.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub dominant_mood: String,
    pub journaling_streak: u32,
    pub top_topics: Vec<String>,
    /// Average check-in score over the last seven days, 0 with no check-ins.
    pub weekly_score: f64,
    /// Change against the seven days before, in percent. 0 when that week
    /// has no score.
    pub trend_pct: f64,
    pub words_written: usize,
    pub spectrum: Vec<SpectrumBucket>,
}

/// Inclusive range of local calendar days.
#[derive(Debug, Clone, Copy)]
struct DayRange {
    first: NaiveDate,
    last: NaiveDate,
}

impl DayRange {
    fn contains(&self, day: NaiveDate) -> bool {
        (self.first..=self.last).contains(&day)
    }
}

fn days_before(day: NaiveDate, n: u64) -> NaiveDate {
    day.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}

fn average_score(entries: &[&MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|e| e.mood.score).sum::<f64>() / entries.len() as f64
}

/// Spectrum bucket for a check-in: the detected emotion's mood, "Neutral"
/// for an unknown emotion, the chosen mood when nothing was detected.
fn spectrum_name(entry: &MoodEntry) -> String {
    match entry.emotion.as_ref().filter(|tag| !tag.label.is_empty()) {
        Some(tag) => tag
            .label
            .parse::<EmotionLabel>()
            .map(|label| label.mood_name())
            .unwrap_or("Neutral")
            .to_string(),
        None => entry.mood.name.clone(),
    }
}

fn mood_spectrum(entries: &[&MoodEntry]) -> Vec<SpectrumBucket> {
    let mut ranked = rank_by_frequency(entries.iter().map(|e| spectrum_name(e)));
    ranked.truncate(SPECTRUM_SIZE);
    let total: usize = ranked.iter().map(|(_, count)| count).sum();
    ranked
        .into_iter()
        .map(|(name, count)| SpectrumBucket {
            name,
            value: (count as f64 / total as f64 * 100.0).round() as u32,
        })
        .collect()
}

/// Consecutive written days ending today, or ending yesterday when today's
/// page is still missing.
fn journaling_streak(journal: &[JournalEntry], today: NaiveDate) -> u32 {
    let by_date: HashMap<NaiveDate, &JournalEntry> =
        journal.iter().map(|entry| (entry.date, entry)).collect();

    let mut streak = 0;
    for offset in 0..STREAK_HORIZON_DAYS {
        let day = days_before(today, offset);
        let entry = by_date.get(&day);
        if offset == 0 && entry.is_none() {
            continue;
        }
        match entry {
            Some(entry) if entry.is_written() => streak += 1,
            _ => break,
        }
    }
    streak
}

fn top_topics<'a>(pages: impl Iterator<Item = &'a JournalEntry>) -> Vec<String> {
    let text = pages
        .map(|page| page.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_whitespace() { c } else { ' ' })
        .collect();
    let words = cleaned
        .split_whitespace()
        .filter(|word| word.len() >= TOPIC_MIN_LEN && !TOPIC_STOP_WORDS.contains(word));

    rank_by_frequency(words)
        .into_iter()
        .take(TOPIC_COUNT)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Summarise the seven local days ending at `now` (today included) against
/// the seven days before them.
pub fn compute_weekly_summary<Tz: TimeZone>(
    moods: &[MoodEntry],
    journal: &[JournalEntry],
    now: &DateTime<Tz>,
) -> WeeklySummary {
    let tz = now.timezone();
    let now_utc = now.with_timezone(&Utc);
    let today = now.date_naive();
    let this_week = DayRange {
        first: days_before(today, 6),
        last: today,
    };
    let last_week = DayRange {
        first: days_before(today, 13),
        last: days_before(today, 7),
    };

    let recent: Vec<&MoodEntry> = moods
        .iter()
        .filter(|e| e.timestamp <= now_utc && this_week.contains(local_date(&e.timestamp, &tz)))
        .collect();
    let previous: Vec<&MoodEntry> = moods
        .iter()
        .filter(|e| last_week.contains(local_date(&e.timestamp, &tz)))
        .collect();

    let weekly_score = average_score(&recent);
    let previous_score = average_score(&previous);
    let trend_pct = if previous_score > 0.0 {
        (weekly_score - previous_score) / previous_score * 100.0
    } else {
        0.0
    };

    let spectrum = mood_spectrum(&recent);
    let dominant_mood = spectrum
        .first()
        .map(|bucket| bucket.name.clone())
        .unwrap_or_else(|| "Neutral".to_string());

    let week_pages = || journal.iter().filter(|page| this_week.contains(page.date));
    let words_written: usize = week_pages().map(|page| page.word_count).sum();

    let summary = WeeklySummary {
        dominant_mood,
        journaling_streak: journaling_streak(journal, today),
        top_topics: top_topics(week_pages()),
        weekly_score,
        trend_pct,
        words_written,
        spectrum,
    };
    log_debug!(
        "weekly summary: {} check-ins, score {:.1} ({:+.0}%), streak {}",
        recent.len(),
        summary.weekly_score,
        summary.trend_pct,
        summary.journaling_streak
    );
    summary
}

/// Compact word count for the stats tile, e.g. `950` or `1.2k`.
pub fn format_word_count(words: usize) -> String {
    if words >= 1000 {
        format!("{:.1}k", words as f64 / 1000.0)
    } else {
        words.to_string()
    }
}
