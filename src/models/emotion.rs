//! Emotion labels and classifier outputs shared by the image and text paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed 7-way emotion classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Fearful,
    Surprised,
    Disgusted,
    Neutral,
}

impl EmotionLabel {
    /// Iteration order for argmax and result building. `Neutral` is last, so it
    /// only wins a tie when nothing earlier reached the same score.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Fearful,
        EmotionLabel::Surprised,
        EmotionLabel::Disgusted,
        EmotionLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Fearful => "fearful",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Disgusted => "disgusted",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Position in [`EmotionLabel::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Mood option name a detected emotion is logged under.
    pub fn mood_name(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Fearful | EmotionLabel::Disgusted => "Anxious",
            EmotionLabel::Surprised => "Joyful",
            EmotionLabel::Neutral => "Calm",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EmotionLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown emotion label {value}"))
    }
}

/// Raw additive score per label, indexed in [`EmotionLabel::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmotionScores([f64; 7]);

impl EmotionScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: EmotionLabel, amount: f64) {
        self.0[label.index()] += amount;
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.0[label.index()]
    }

    /// Sum in label order, starting from zero.
    pub fn total(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, score| acc + score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        EmotionLabel::ALL.iter().map(move |label| (*label, self.get(*label)))
    }
}

/// Top emotion predicted from an image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: EmotionLabel,
    pub confidence: f64,
}

/// One entry of the ranked text classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextEmotionResult {
    pub emotion: EmotionLabel,
    pub confidence: f64,
}

/// Capitalize the first character of a label for display ("happy" -> "Happy").
pub fn format_emotion_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
