//! Catalogue of short wellbeing activities offered on the discovery screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Mindfulness,
    Physical,
    Creative,
    Social,
    Cognitive,
    Wellbeing,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration: &'static str,
    /// Mood names (as logged at check-in) this activity is aimed at.
    pub target_moods: &'static [&'static str],
    pub energy_level: EnergyLevel,
    pub icon: &'static str,
    pub benefit: &'static str,
}

impl Activity {
    pub fn targets(&self, mood: &str) -> bool {
        self.target_moods.contains(&mood)
    }
}

use ActivityType::*;
use EnergyLevel::*;

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: "box-breathing",
        title: "Box Breathing",
        activity_type: Mindfulness,
        duration: "3 min",
        target_moods: &["Anxious", "Stressed", "Overwhelmed", "Fearful", "Panic"],
        energy_level: Low,
        icon: "air",
        benefit: "Calms your nervous system instantly by regulating breath rhythm.",
    },
    Activity {
        id: "grounding-54321",
        title: "5-4-3-2-1 Grounding",
        activity_type: Mindfulness,
        duration: "5 min",
        target_moods: &["Anxious", "Panic", "Dissociated", "Fearful"],
        energy_level: Low,
        icon: "anchor",
        benefit: "Brings you back to the present moment when feeling detached or panicked.",
    },
    Activity {
        id: "body-scan",
        title: "Body Scan Meditation",
        activity_type: Mindfulness,
        duration: "10 min",
        target_moods: &["Stressed", "Tired", "Anxious", "Overwhelmed"],
        energy_level: Low,
        icon: "accessibility_new",
        benefit: "Releases physical tension you might not even realize you’re holding.",
    },
    Activity {
        id: "loving-kindness",
        title: "Loving Kindness (Metta)",
        activity_type: Mindfulness,
        duration: "7 min",
        target_moods: &["Lonely", "Sad", "Angry", "Resentful"],
        energy_level: Low,
        icon: "favorite_border",
        benefit: "Cultivates self-compassion and softness towards others.",
    },
    Activity {
        id: "gentle-stretch",
        title: "Gentle Stretching",
        activity_type: Physical,
        duration: "5 min",
        target_moods: &["Sad", "Tired", "Stiff", "Bored", "Depressed"],
        energy_level: Low,
        icon: "self_improvement",
        benefit: "Reconnects you with your body and improves circulation gently.",
    },
    Activity {
        id: "power-pose",
        title: "Power Posing",
        activity_type: Physical,
        duration: "2 min",
        target_moods: &["Insecure", "Anxious", "Nervous", "Hesitant"],
        energy_level: Medium,
        icon: "accessibility",
        benefit: "Boosts confidence hormones and reduces stress cortisol quickly.",
    },
    Activity {
        id: "nature-walk",
        title: "Short Nature Walk",
        activity_type: Physical,
        duration: "15 min",
        target_moods: &["Sad", "Stressed", "Bored", "Neutral", "Lonely"],
        energy_level: Medium,
        icon: "directions_walk",
        benefit: "Fresh air and natural fractals lower stress and improve mood.",
    },
    Activity {
        id: "dance-it-out",
        title: "Dance to 1 Song",
        activity_type: Physical,
        duration: "4 min",
        target_moods: &["Happy", "Excited", "Bored", "Stressed", "Frustrated"],
        energy_level: High,
        icon: "music_note",
        benefit: "Releases endorphins and shakes off stagnant energy.",
    },
    Activity {
        id: "progressive-muscle",
        title: "Progressive Muscle Relaxation",
        activity_type: Physical,
        duration: "8 min",
        target_moods: &["Stressed", "Anxious", "Insomnia", "Tense"],
        energy_level: Low,
        icon: "hotel",
        benefit: "Systematically relaxes your body to help you rest or sleep.",
    },
    Activity {
        id: "doodle-session",
        title: "Free Doodling",
        activity_type: Creative,
        duration: "10 min",
        target_moods: &["Bored", "Neutral", "Anxious", "Confused"],
        energy_level: Medium,
        icon: "draw",
        benefit: "Activates the creative brain and quiets the analytical mind.",
    },
    Activity {
        id: "expressive-writing",
        title: "Expressive Writing",
        activity_type: Creative,
        duration: "12 min",
        target_moods: &["Sad", "Angry", "Confused", "Overwhelmed", "Grieving"],
        energy_level: Medium,
        icon: "edit_note",
        benefit: "Helps process complex emotions by getting them out of your head.",
    },
    Activity {
        id: "play-music",
        title: "Curate a Playlist",
        activity_type: Creative,
        duration: "15 min",
        target_moods: &["Bored", "Sad", "Nostalgic", "Inspired"],
        energy_level: Medium,
        icon: "playlist_add",
        benefit: "Allows specific emotional expression through sound.",
    },
    Activity {
        id: "vision-board-mini",
        title: "Mini Vision Board",
        activity_type: Creative,
        duration: "20 min",
        target_moods: &["Inspired", "Motivated", "Hopeful", "Excited"],
        energy_level: High,
        icon: "dashboard",
        benefit: "Visualizes your goals to anchor motivation.",
    },
    Activity {
        id: "gratitude-journal",
        title: "3 Things Grateful For",
        activity_type: Cognitive,
        duration: "5 min",
        target_moods: &["Happy", "Content", "Sad", "Neutral", "Dissatisfied"],
        energy_level: Medium,
        icon: "favorite",
        benefit: "Trains your brain to scan for positives, increasing happiness over time.",
    },
    Activity {
        id: "future-visioning",
        title: "Future Self Visualization",
        activity_type: Cognitive,
        duration: "10 min",
        target_moods: &["Excited", "Inspired", "Confident", "Hopeful"],
        energy_level: High,
        icon: "visibility",
        benefit: "Connects current actions to your long-term identity and goals.",
    },
    Activity {
        id: "worry-time",
        title: "Scheduled \"Worry Time\"",
        activity_type: Cognitive,
        duration: "10 min",
        target_moods: &["Anxious", "Worried", "Obsessive"],
        energy_level: Medium,
        icon: "schedule",
        benefit: "Contains anxiety to a specific window so it doesn’t take over your day.",
    },
    Activity {
        id: "reframing",
        title: "Thought Reframing",
        activity_type: Cognitive,
        duration: "8 min",
        target_moods: &["Self-Critical", "Hopeless", "Frustrated", "Angry"],
        energy_level: Medium,
        icon: "psychology",
        benefit: "Challenges negative thought patterns to find a more balanced perspective.",
    },
    Activity {
        id: "affirmations",
        title: "Positive Affirmations",
        activity_type: Cognitive,
        duration: "3 min",
        target_moods: &["Insecure", "Low Self-Esteem", "Sad", "Neutral"],
        energy_level: Low,
        icon: "format_quote",
        benefit: "Reinforces positive self-beliefs and combats negative self-talk.",
    },
    Activity {
        id: "reach-out",
        title: "Text a Friend",
        activity_type: Social,
        duration: "2 min",
        target_moods: &["Lonely", "Sad", "Bored", "Isolated"],
        energy_level: Low,
        icon: "chat",
        benefit: "Small micro-connections reduce feelings of isolation instantly.",
    },
    Activity {
        id: "compliment-someone",
        title: "Send a Compliment",
        activity_type: Social,
        duration: "2 min",
        target_moods: &["Grateful", "Happy", "Neutral", "Lonely"],
        energy_level: Medium,
        icon: "thumb_up",
        benefit: "Boosting someone else generates a happiness feedback loop for you too.",
    },
    Activity {
        id: "hydrate-glass",
        title: "Drink a Glass of Water",
        activity_type: Wellbeing,
        duration: "1 min",
        target_moods: &["Tired", "Headache", "Groggy", "Neutral"],
        energy_level: Low,
        icon: "water_drop",
        benefit: "Rehydrates your brain for better focus and energy.",
    },
    Activity {
        id: "digital-detox",
        title: "Digital Detox",
        activity_type: Wellbeing,
        duration: "30 min",
        target_moods: &["Overwhelmed", "Distracted", "Anxious", "Bored"],
        energy_level: Medium,
        icon: "phonelink_off",
        benefit: "Resets your dopamine receptors and reduces information overload.",
    },
    Activity {
        id: "clean-space",
        title: "Tidy One Small Spot",
        activity_type: Wellbeing,
        duration: "5 min",
        target_moods: &["Overwhelmed", "Chaotic", "Stressed", "Productive"],
        energy_level: Medium,
        icon: "cleaning_services",
        benefit: "External order often helps create internal calm.",
    },
];

pub fn find_activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|activity| activity.id == id)
}
