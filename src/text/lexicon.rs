use std::collections::HashSet;

use crate::models::{EmotionLabel, EmotionScores};

pub const LEXICON_VERSION: u32 = 1;

const HAPPY: &[&str] = &[
    "happy", "joy", "joyful", "excited", "grateful", "thankful", "love", "wonderful", "amazing",
    "great", "fantastic", "awesome", "blessed", "cheerful", "delighted", "thrilled", "ecstatic",
    "glad", "pleased", "content", "satisfied", "elated", "euphoric", "blissful", "merry",
    "optimistic", "hopeful", "proud", "accomplished", "celebrate", "fun", "laugh", "smile",
    "enjoy", "positive", "bright", "sunshine", "beautiful", "perfect", "brilliant", "inspiring",
    "motivated", "energized",
];

const SAD: &[&str] = &[
    "sad", "unhappy", "depressed", "miserable", "lonely", "alone", "heartbroken", "grief",
    "grieving", "mourning", "loss", "lost", "disappointed", "hopeless", "helpless", "empty",
    "numb", "cry", "crying", "tears", "sorrow", "gloomy", "melancholy", "down", "blue",
    "despair", "regret", "guilt", "ashamed", "worthless", "painful", "hurt", "suffering", "broke",
    "broken", "miss", "missing",
];

const ANGRY: &[&str] = &[
    "angry", "furious", "rage", "mad", "annoyed", "irritated", "frustrated", "outraged",
    "pissed", "hate", "hatred", "resentment", "resent", "hostile", "bitter", "infuriated",
    "aggravated", "upset", "enraged", "livid", "fuming", "conflict", "argue", "argument", "fight",
    "unfair", "injustice", "betrayed", "betrayal",
];

const FEARFUL: &[&str] = &[
    "afraid", "fear", "scared", "anxious", "anxiety", "worried", "worry", "nervous", "panic",
    "panicking", "terrified", "dread", "dreading", "phobia", "frightened", "uneasy", "tense",
    "stressed", "stress", "overwhelmed", "insecure", "uncertain", "doubt", "doubtful",
    "apprehensive", "restless", "paranoid", "threatened",
];

const SURPRISED: &[&str] = &[
    "surprised", "surprise", "shocked", "astonished", "amazed", "unexpected", "unbelievable",
    "incredible", "wow", "whoa", "omg", "stunning", "speechless", "startled", "astounded",
    "bewildered", "mind-blowing", "remarkable", "extraordinary",
];

const DISGUSTED: &[&str] = &[
    "disgusted", "disgust", "revolted", "repulsed", "sick", "nauseous", "gross", "yuck",
    "horrible", "appalling", "repugnant", "vile", "loathe", "loathing", "contempt", "abhorrent",
    "detestable", "awful",
];

const NEUTRAL: &[&str] = &[
    "okay", "fine", "alright", "normal", "usual", "routine", "ordinary", "regular", "standard",
    "average", "typical", "meh", "whatever", "indifferent",
];

/// Keyword dictionaries, one per emotion.
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    categories: Vec<(EmotionLabel, HashSet<&'static str>)>,
}

impl EmotionLexicon {
    pub fn v1() -> Self {
        let table: [(EmotionLabel, &[&'static str]); 7] = [
            (EmotionLabel::Happy, HAPPY),
            (EmotionLabel::Sad, SAD),
            (EmotionLabel::Angry, ANGRY),
            (EmotionLabel::Fearful, FEARFUL),
            (EmotionLabel::Surprised, SURPRISED),
            (EmotionLabel::Disgusted, DISGUSTED),
            (EmotionLabel::Neutral, NEUTRAL),
        ];
        Self {
            categories: table
                .into_iter()
                .map(|(label, words)| (label, words.iter().copied().collect()))
                .collect(),
        }
    }

    pub fn contains(&self, label: EmotionLabel, word: &str) -> bool {
        self.categories
            .iter()
            .any(|(l, words)| *l == label && words.contains(word))
    }

    /// Count exact keyword hits per emotion.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> EmotionScores {
        let mut scores = EmotionScores::new();
        for token in tokens {
            for (label, words) in &self.categories {
                if words.contains(token.as_ref()) {
                    scores.add(*label, 1.0);
                }
            }
        }
        scores
    }
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self::v1()
    }
}
