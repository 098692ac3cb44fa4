use serde::{Deserialize, Serialize};

use crate::insights::profile::LibraryProfile;
use crate::insights::summary::{MoodSummary, MoodTrend};
use crate::suggestions::{need_state_for_mood, NeedState};

pub const ONBOARDING_INSIGHT: &str =
    "Log some moods and journal entries so I can learn what resonates with you. The more I know, the better my recommendations become.";

/// Short narrative shown above the suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub summary: String,
    pub mood_trend: MoodTrend,
    pub need_state: NeedState,
}

/// Compose an insight locally from the mood summary and whatever taste
/// signals are available. Library genres take precedence over free-form
/// interests.
pub fn generate_fallback_insight(
    summary: Option<&MoodSummary>,
    journal_keywords: &[String],
    interests: &[String],
    library: Option<&LibraryProfile>,
) -> AiInsight {
    let Some(summary) = summary else {
        return AiInsight {
            summary: ONBOARDING_INSIGHT.to_string(),
            mood_trend: MoodTrend::Stable,
            need_state: NeedState::Exploration,
        };
    };

    let mood = summary.dominant.as_str();
    let need_state = need_state_for_mood(mood);
    let mood_trend = MoodTrend::from_average(summary.average_score);

    let mut parts = vec![match mood_trend {
        MoodTrend::Upward => format!(
            "You've been feeling great lately, your dominant mood is \"{mood}\" with strong positive energy."
        ),
        MoodTrend::Downward => format!(
            "I've noticed you've been going through a tougher time recently, with \"{mood}\" being your dominant feeling."
        ),
        MoodTrend::Stable => {
            format!("Your emotional state has been steady, with \"{mood}\" as your primary feeling.")
        }
    }];

    match library.filter(|profile| !profile.top_genres.is_empty()) {
        Some(profile) => {
            let genres = first_three(&profile.top_genres);
            parts.push(format!("Based on your library, you gravitate toward {genres}."));
        }
        None if !interests.is_empty() => {
            let top = first_three(interests);
            parts.push(format!(
                "Given your interests in {top}, I've curated content that bridges your passions with what you need right now."
            ));
        }
        None => {}
    }

    if !journal_keywords.is_empty() {
        let words = first_three(journal_keywords);
        parts.push(format!("Your journal mentions themes like \"{words}\"."));
    }

    parts.push(format!(
        "Right now, you seem to need {}. Each suggestion below is tailored to support that.",
        need_state.description()
    ));

    AiInsight {
        summary: parts.join(" "),
        mood_trend,
        need_state,
    }
}

fn first_three(values: &[String]) -> String {
    values.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn summary(dominant: &str, average_score: f64) -> MoodSummary {
        MoodSummary {
            dominant: dominant.into(),
            latest_mood: dominant.into(),
            distribution: HashMap::from([(dominant.to_string(), 1.0)]),
            average_score,
            entry_count: 3,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn onboarding_without_history() {
        let insight = generate_fallback_insight(None, &[], &[], None);
        assert_eq!(insight.summary, ONBOARDING_INSIGHT);
        assert_eq!(insight.mood_trend, MoodTrend::Stable);
        assert_eq!(insight.need_state, NeedState::Exploration);
    }

    #[test]
    fn downward_sad_needs_comfort() {
        let insight = generate_fallback_insight(
            Some(&summary("sad", 2.5)),
            &strings(&["work", "sleep", "family", "rain"]),
            &strings(&["Poetry"]),
            None,
        );
        assert_eq!(insight.mood_trend, MoodTrend::Downward);
        assert_eq!(insight.need_state, NeedState::Comfort);
        assert!(insight
            .summary
            .starts_with("I've noticed you've been going through a tougher time"));
        assert!(insight.summary.contains("Given your interests in Poetry,"));
        assert!(insight.summary.contains("themes like \"work, sleep, family\"."));
        assert!(insight.summary.ends_with(
            "you seem to need comfort and emotional warmth. Each suggestion below is tailored to support that."
        ));
    }

    #[test]
    fn library_genres_replace_interests() {
        let library = LibraryProfile {
            top_genres: strings(&["Philosophy", "Fantasy", "History", "Poetry"]),
            ..Default::default()
        };
        let insight = generate_fallback_insight(
            Some(&summary("happy", 8.0)),
            &[],
            &strings(&["Cooking"]),
            Some(&library),
        );
        assert_eq!(insight.mood_trend, MoodTrend::Upward);
        assert_eq!(insight.need_state, NeedState::Energy);
        assert!(insight.summary.starts_with(
            "You've been feeling great lately, your dominant mood is \"happy\" with strong positive energy."
        ));
        assert!(insight.summary.contains("you gravitate toward Philosophy, Fantasy, History."));
        assert!(!insight.summary.contains("Cooking"));
        assert!(!insight.summary.contains("journal"));
    }

    #[test]
    fn steady_mood_reads_stable() {
        let insight = generate_fallback_insight(Some(&summary("calm", 6.0)), &[], &[], None);
        assert_eq!(insight.mood_trend, MoodTrend::Stable);
        assert_eq!(insight.need_state, NeedState::Meaning);
        assert_eq!(
            insight.summary,
            "Your emotional state has been steady, with \"calm\" as your primary feeling. Right now, you seem to need deeper meaning and purpose. Each suggestion below is tailored to support that."
        );
    }
}
