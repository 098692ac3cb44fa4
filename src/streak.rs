//! Check-in streaks over the mood log.
//!
//! Timestamps are bucketed into calendar days of the caller's time zone and
//! compared as `NaiveDate`s, so "today", "yesterday" and every entry use the
//! same day boundaries.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::MoodEntry;

pub const NO_CHECK_INS_LABEL: &str = "No check-ins yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub streak: u32,
    pub last_check_in_label: String,
}

/// Calendar date of `timestamp` as seen in `tz`.
pub fn local_date<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    timestamp.with_timezone(tz).date_naive()
}

/// Short month/day/year rendering used in check-in labels, e.g. `3/7/2026`.
pub fn format_check_in_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Count consecutive check-in days ending at the most recent one.
///
/// A streak is alive only if the latest check-in is today or yesterday
/// relative to `now`; otherwise it is reported as zero.
pub fn compute_streak<Tz: TimeZone>(entries: &[MoodEntry], now: &DateTime<Tz>) -> StreakResult {
    let tz = now.timezone();
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|entry| local_date(&entry.timestamp, &tz))
        .collect();

    let Some(&most_recent) = days.iter().next_back() else {
        return StreakResult {
            streak: 0,
            last_check_in_label: NO_CHECK_INS_LABEL.to_string(),
        };
    };

    let today = now.date_naive();
    let yesterday = today.pred_opt();

    if most_recent != today && Some(most_recent) != yesterday {
        return StreakResult {
            streak: 0,
            last_check_in_label: format!("Last check-in: {}", format_check_in_date(most_recent)),
        };
    }

    let mut streak = 0;
    let mut expected = Some(most_recent);
    for day in days.iter().rev() {
        if Some(*day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
    }

    let last_check_in_label = if most_recent == today {
        "Today".to_string()
    } else {
        "Yesterday".to_string()
    };

    StreakResult {
        streak,
        last_check_in_label,
    }
}

/// [`compute_streak`] against the system clock and local time zone.
pub fn compute_streak_now(entries: &[MoodEntry]) -> StreakResult {
    compute_streak(entries, &Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood_by_name;
    use chrono::{Duration, FixedOffset};

    fn tz() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn now() -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    fn entry_at(timestamp: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            mood: mood_by_name("Calm").unwrap(),
            emotion: None,
            timestamp,
        }
    }

    fn days_ago(days: i64) -> MoodEntry {
        entry_at((now() - Duration::days(days)).with_timezone(&Utc))
    }

    #[test]
    fn empty_log_has_no_streak() {
        let result = compute_streak(&[], &now());
        assert_eq!(result.streak, 0);
        assert_eq!(result.last_check_in_label, "No check-ins yet");
    }

    #[test]
    fn gap_stops_the_count() {
        let entries = vec![days_ago(0), days_ago(1), days_ago(3)];
        let result = compute_streak(&entries, &now());
        assert_eq!(result.streak, 2);
        assert_eq!(result.last_check_in_label, "Today");
    }

    #[test]
    fn same_day_entries_count_once() {
        let base = now().with_timezone(&Utc);
        let entries = vec![
            entry_at(base),
            entry_at(base - Duration::hours(2)),
            entry_at(base - Duration::hours(8)),
        ];
        assert_eq!(compute_streak(&entries, &now()).streak, 1);
    }

    #[test]
    fn stale_check_in_resets_streak() {
        let result = compute_streak(&[days_ago(3)], &now());
        assert_eq!(result.streak, 0);
        assert_eq!(result.last_check_in_label, "Last check-in: 3/7/2026");
    }

    #[test]
    fn streak_ending_yesterday_is_still_alive() {
        let entries = vec![days_ago(1), days_ago(2), days_ago(3), days_ago(5)];
        let result = compute_streak(&entries, &now());
        assert_eq!(result.streak, 3);
        assert_eq!(result.last_check_in_label, "Yesterday");
    }

    #[test]
    fn days_follow_the_callers_time_zone() {
        // 03:00 UTC on the 10th is still the evening of the 9th at UTC-5.
        let late_evening = Utc.with_ymd_and_hms(2026, 3, 10, 3, 0, 0).unwrap();
        assert_eq!(local_date(&late_evening, &tz()), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());

        let result = compute_streak(&[entry_at(late_evening)], &now());
        assert_eq!(result.last_check_in_label, "Yesterday");
        assert_eq!(result.streak, 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut entries = vec![days_ago(2), days_ago(0), days_ago(1)];
        let forward = compute_streak(&entries, &now());
        entries.reverse();
        assert_eq!(compute_streak(&entries, &now()), forward);
        assert_eq!(forward.streak, 3);
    }
}
