use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::discovery::activities::{Activity, ActivityType, EnergyLevel, ACTIVITIES};
use crate::models::{EmotionLabel, MoodEntry};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Tasks shown on the discovery screen each day.
pub const TARGET_COUNT: usize = 8;

const RECOMMENDATION_COUNT: usize = 2;

const NEGATIVE_MOODS: &[&str] = &[
    "Sad",
    "Anxious",
    "Stressed",
    "Angry",
    "Tired",
    "Fearful",
    "Disgusted",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    MoodBased,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryTask {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub category: TaskCategory,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration: String,
    pub is_completed: bool,
    pub mood_context: String,
    pub benefit: String,
}

/// Mood name a check-in is matched against activity targets with: the
/// detected emotion's mood when it parses, else the chosen mood.
pub fn discovery_mood(entry: &MoodEntry) -> &str {
    entry
        .emotion
        .as_ref()
        .and_then(|tag| tag.label.parse::<EmotionLabel>().ok())
        .map(|label| label.mood_name())
        .unwrap_or(entry.mood.name.as_str())
}

/// 32-bit string hash (`h * 31 + unit`, wrapping) over UTF-16 code units.
pub fn day_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

fn day_order(activities: &mut [&'static Activity], day: &str) {
    activities.sort_by_cached_key(|activity| day_hash(&format!("{}{}", activity.id, day)));
}

/// Two activities for the home screen.
///
/// Without a check-in the first calm-or-medium-energy activities are used.
/// Otherwise activities aimed at the mood are picked at random; when fewer
/// than two exist the pool is topped up with mindfulness/physical activities
/// for negative moods and creative/cognitive ones for the rest.
pub fn recommended_activities<R: Rng + ?Sized>(
    current: Option<&MoodEntry>,
    rng: &mut R,
) -> Vec<&'static Activity> {
    let Some(entry) = current else {
        return ACTIVITIES
            .iter()
            .filter(|a| a.targets("Neutral") || a.energy_level == EnergyLevel::Medium)
            .take(RECOMMENDATION_COUNT)
            .collect();
    };

    let mood = discovery_mood(entry);
    let (mut pool, rest): (Vec<&'static Activity>, Vec<&'static Activity>) =
        ACTIVITIES.iter().partition(|a| a.targets(mood));

    if pool.len() < RECOMMENDATION_COUNT {
        let fallback_types: &[ActivityType] = if NEGATIVE_MOODS.contains(&mood) {
            &[ActivityType::Mindfulness, ActivityType::Physical]
        } else {
            &[ActivityType::Creative, ActivityType::Cognitive]
        };
        pool.extend(rest.into_iter().filter(|a| fallback_types.contains(&a.activity_type)));
    }

    pool.shuffle(rng);
    pool.truncate(RECOMMENDATION_COUNT);
    log_debug!(
        "recommended for {}: {:?}",
        mood,
        pool.iter().map(|a| a.id).collect::<Vec<_>>()
    );
    pool
}

/// The day's discovery checklist.
///
/// Activities aimed at the mood come first, then the rest; each group is
/// ordered by a hash of the activity id and `day`, so the list is stable for
/// the whole day. `completed` holds activity ids already done today.
pub fn daily_discovery_tasks(
    current: Option<&MoodEntry>,
    completed: &[String],
    day: NaiveDate,
) -> Vec<DiscoveryTask> {
    let seed = day.format("%Y-%m-%d").to_string();
    let mood = current.map(discovery_mood);

    let mut ordered: Vec<&'static Activity> = match mood {
        Some(mood) => {
            let (mut matched, mut rest): (Vec<_>, Vec<_>) =
                ACTIVITIES.iter().partition(|a| a.targets(mood));
            day_order(&mut matched, &seed);
            day_order(&mut rest, &seed);
            matched.extend(rest);
            matched
        }
        None => {
            let mut all: Vec<_> = ACTIVITIES.iter().collect();
            day_order(&mut all, &seed);
            all
        }
    };
    ordered.truncate(TARGET_COUNT);

    let tasks: Vec<DiscoveryTask> = ordered
        .into_iter()
        .map(|activity| {
            let (category, mood_context) = match mood {
                Some(mood) if activity.targets(mood) => {
                    (TaskCategory::MoodBased, format!("Recommended for {mood}"))
                }
                _ => (TaskCategory::General, "General wellness".to_string()),
            };
            DiscoveryTask {
                id: format!("mood-{}", activity.id),
                label: activity.title.to_string(),
                icon: activity.icon.to_string(),
                category,
                activity_type: activity.activity_type,
                duration: activity.duration.to_string(),
                is_completed: completed.iter().any(|id| id == activity.id),
                mood_context,
                benefit: activity.benefit.to_string(),
            }
        })
        .collect();

    log_debug!("{} discovery tasks for {} (mood {:?})", tasks.len(), seed, mood);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::activities::find_activity;
    use crate::models::{mood_by_name, EmotionTag, MoodOption};
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(mood: &str, emotion: Option<&str>) -> MoodEntry {
        MoodEntry {
            mood: mood_by_name(mood).unwrap_or_else(|| MoodOption {
                name: mood.into(),
                icon: "mood".into(),
                description: String::new(),
                score: 5.0,
            }),
            emotion: emotion.map(|label| EmotionTag {
                label: label.into(),
                confidence: 0.7,
            }),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn hash_matches_the_web_client() {
        assert_eq!(day_hash(""), 0);
        assert_eq!(day_hash("a"), 97);
        assert_eq!(day_hash("hello"), 99162322);
        // long ids wrap past i32::MAX
        assert_eq!(day_hash("box-breathing2026-03-07"), -1301063802);
    }

    #[test]
    fn detected_emotion_overrides_chosen_mood() {
        assert_eq!(discovery_mood(&entry("Calm", Some("fearful"))), "Anxious");
        assert_eq!(discovery_mood(&entry("Calm", Some("surprised"))), "Joyful");
        assert_eq!(discovery_mood(&entry("Tired", Some("bewildered"))), "Tired");
        assert_eq!(discovery_mood(&entry("Tired", None)), "Tired");
    }

    #[test]
    fn daily_tasks_put_mood_matches_first() {
        let happy = entry("Happy", None);
        let tasks = daily_discovery_tasks(Some(&happy), &[], day());
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "mood-dance-it-out",
                "mood-gratitude-journal",
                "mood-compliment-someone",
                "mood-power-pose",
                "mood-hydrate-glass",
                "mood-box-breathing",
                "mood-doodle-session",
                "mood-body-scan",
            ]
        );
        assert!(tasks[..3].iter().all(|t| t.category == TaskCategory::MoodBased));
        assert_eq!(tasks[0].mood_context, "Recommended for Happy");
        assert!(tasks[3..].iter().all(|t| t.mood_context == "General wellness"));
    }

    #[test]
    fn daily_tasks_are_stable_within_a_day() {
        let sad = entry("Sad", None);
        let first = daily_discovery_tasks(Some(&sad), &[], day());
        let again = daily_discovery_tasks(Some(&sad), &[], day());
        assert_eq!(first, again);
        assert_eq!(first.len(), TARGET_COUNT);
        assert_eq!(first[0].id, "mood-reach-out");
        assert!(first.iter().all(|t| t.category == TaskCategory::MoodBased));
    }

    #[test]
    fn no_check_in_gives_general_tasks() {
        let tasks = daily_discovery_tasks(None, &["power-pose".to_string()], day());
        assert_eq!(tasks.len(), TARGET_COUNT);
        assert_eq!(tasks[0].id, "mood-power-pose");
        assert!(tasks[0].is_completed);
        assert!(tasks[1..].iter().all(|t| !t.is_completed));
        assert!(tasks.iter().all(|t| t.category == TaskCategory::General));

        let json = serde_json::to_value(&tasks[0]).unwrap();
        assert_eq!(json["category"], "general");
        assert_eq!(json["type"], "physical");
        assert_eq!(json["isCompleted"], true);
    }

    #[test]
    fn no_check_in_recommends_first_light_options() {
        let picks = recommended_activities(None, &mut StdRng::seed_from_u64(1));
        let ids: Vec<&str> = picks.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["power-pose", "nature-walk"]);
    }

    #[test]
    fn matching_activities_are_recommended() {
        let angry = entry("Angry", None);
        for seed in 0..8 {
            let picks = recommended_activities(Some(&angry), &mut StdRng::seed_from_u64(seed));
            assert_eq!(picks.len(), 2);
            assert!(picks.iter().all(|a| a.targets("Angry")));
        }
    }

    #[test]
    fn sparse_moods_fall_back_by_polarity() {
        let disgusted = entry("Disgusted", None);
        let mut rng = StdRng::seed_from_u64(4);
        let picks = recommended_activities(Some(&disgusted), &mut rng);
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|a| matches!(
            a.activity_type,
            ActivityType::Mindfulness | ActivityType::Physical
        )));

        let calm = entry("Calm", None);
        let picks = recommended_activities(Some(&calm), &mut rng);
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|a| matches!(
            a.activity_type,
            ActivityType::Creative | ActivityType::Cognitive
        )));
        assert!(find_activity(picks[0].id).is_some());
    }
}
