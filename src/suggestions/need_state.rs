use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse wellness intent derived from a mood.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NeedState {
    Comfort,
    Calm,
    Energy,
    Growth,
    Meaning,
    #[default]
    Exploration,
}

impl NeedState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeedState::Comfort => "comfort",
            NeedState::Calm => "calm",
            NeedState::Energy => "energy",
            NeedState::Growth => "growth",
            NeedState::Meaning => "meaning",
            NeedState::Exploration => "exploration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NeedState::Comfort => "comfort and emotional warmth",
            NeedState::Calm => "peace of mind and stress relief",
            NeedState::Energy => "motivation and positive energy",
            NeedState::Growth => "personal growth and deep focus",
            NeedState::Meaning => "deeper meaning and purpose",
            NeedState::Exploration => "curiosity and new perspectives",
        }
    }
}

impl fmt::Display for NeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood (emotion label or mood option name) to need state. Unknown moods map
/// to `Exploration`.
pub fn need_state_for_mood(mood: &str) -> NeedState {
    match mood.trim().to_lowercase().as_str() {
        "happy" | "joyful" => NeedState::Energy,
        "focused" => NeedState::Growth,
        "calm" => NeedState::Meaning,
        "neutral" | "surprised" => NeedState::Exploration,
        "tired" | "sad" | "disgusted" => NeedState::Comfort,
        "anxious" | "fearful" | "angry" => NeedState::Calm,
        _ => NeedState::Exploration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_moods() {
        assert_eq!(need_state_for_mood("happy"), NeedState::Energy);
        assert_eq!(need_state_for_mood("Sad"), NeedState::Comfort);
        assert_eq!(need_state_for_mood("anxious"), NeedState::Calm);
        assert_eq!(need_state_for_mood("focused"), NeedState::Growth);
        assert_eq!(need_state_for_mood("calm"), NeedState::Meaning);
    }

    #[test]
    fn unknown_moods_explore() {
        assert_eq!(need_state_for_mood("bewildered"), NeedState::Exploration);
        assert_eq!(need_state_for_mood(""), NeedState::Exploration);
    }
}
