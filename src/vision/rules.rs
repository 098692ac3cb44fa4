use serde::{Deserialize, Serialize};

use crate::models::{EmotionLabel, EmotionScores};
use crate::vision::pixels::PixelMetrics;

/// Thresholds and weights of the rule-based image model.
///
/// Rules are non-exclusive: every rule whose condition holds adds its weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRules {
    pub version: u32,

    /// Skin-pixel ratio above which a face is assumed present.
    pub face_skin_ratio: f64,

    /// Bright and warm: happy, a little surprised.
    pub bright_min_brightness: f64,
    pub bright_min_warmth: f64,
    pub bright_happy: f64,
    pub bright_surprised: f64,

    /// Dark and cool: sad, fearful.
    pub dark_max_brightness: f64,
    pub dark_max_warmth: f64,
    pub dark_sad: f64,
    pub dark_fearful: f64,

    /// High contrast and warm: angry.
    pub tense_min_contrast: f64,
    pub tense_min_warmth: f64,
    pub tense_angry: f64,

    /// Saturated and bright: surprised.
    pub vivid_min_saturation: f64,
    pub vivid_min_brightness: f64,
    pub vivid_surprised: f64,

    /// Muted at medium brightness (exclusive bounds): neutral.
    pub muted_max_saturation: f64,
    pub muted_brightness: (f64, f64),
    pub muted_neutral: f64,

    /// Very dark and unsaturated: disgusted, sad.
    pub gloomy_max_brightness: f64,
    pub gloomy_max_saturation: f64,
    pub gloomy_disgusted: f64,
    pub gloomy_sad: f64,

    /// Face boost is `min(skin_ratio * gain, cap)`, routed by warmth.
    pub face_boost_gain: f64,
    pub face_boost_cap: f64,
    pub face_warm_min_warmth: f64,
    pub face_cool_max_warmth: f64,

    /// Medium brightness (inclusive) with gently warm tones (exclusive).
    pub content_brightness: (f64, f64),
    pub content_warmth: (f64, f64),
    pub content_happy: f64,
    pub content_neutral: f64,

    /// Added to neutral unconditionally.
    pub neutral_baseline: f64,

    /// Reported when every score is zero.
    pub zero_signal_confidence: f64,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
}

impl ImageRules {
    pub const V1: ImageRules = ImageRules {
        version: 1,
        face_skin_ratio: 0.08,
        bright_min_brightness: 140.0,
        bright_min_warmth: 1.1,
        bright_happy: 0.35,
        bright_surprised: 0.15,
        dark_max_brightness: 100.0,
        dark_max_warmth: 1.0,
        dark_sad: 0.30,
        dark_fearful: 0.20,
        tense_min_contrast: 60.0,
        tense_min_warmth: 1.2,
        tense_angry: 0.30,
        vivid_min_saturation: 0.4,
        vivid_min_brightness: 130.0,
        vivid_surprised: 0.25,
        muted_max_saturation: 0.25,
        muted_brightness: (90.0, 170.0),
        muted_neutral: 0.35,
        gloomy_max_brightness: 80.0,
        gloomy_max_saturation: 0.2,
        gloomy_disgusted: 0.15,
        gloomy_sad: 0.15,
        face_boost_gain: 2.0,
        face_boost_cap: 0.3,
        face_warm_min_warmth: 1.15,
        face_cool_max_warmth: 0.95,
        content_brightness: (100.0, 160.0),
        content_warmth: (1.05, 1.3),
        content_happy: 0.15,
        content_neutral: 0.10,
        neutral_baseline: 0.08,
        zero_signal_confidence: 0.6,
        confidence_floor: 0.45,
        confidence_ceiling: 0.92,
    };
}

impl Default for ImageRules {
    fn default() -> Self {
        Self::V1
    }
}

/// Map pixel statistics to raw per-emotion scores.
pub fn infer_emotion_scores(m: &PixelMetrics, rules: &ImageRules) -> EmotionScores {
    use EmotionLabel::*;

    let mut scores = EmotionScores::new();

    if m.brightness > rules.bright_min_brightness && m.warmth > rules.bright_min_warmth {
        scores.add(Happy, rules.bright_happy);
        scores.add(Surprised, rules.bright_surprised);
    }

    if m.brightness < rules.dark_max_brightness && m.warmth < rules.dark_max_warmth {
        scores.add(Sad, rules.dark_sad);
        scores.add(Fearful, rules.dark_fearful);
    }

    if m.contrast > rules.tense_min_contrast && m.warmth > rules.tense_min_warmth {
        scores.add(Angry, rules.tense_angry);
    }

    if m.saturation > rules.vivid_min_saturation && m.brightness > rules.vivid_min_brightness {
        scores.add(Surprised, rules.vivid_surprised);
    }

    let (muted_lo, muted_hi) = rules.muted_brightness;
    if m.saturation < rules.muted_max_saturation
        && m.brightness > muted_lo
        && m.brightness < muted_hi
    {
        scores.add(Neutral, rules.muted_neutral);
    }

    if m.brightness < rules.gloomy_max_brightness && m.saturation < rules.gloomy_max_saturation {
        scores.add(Disgusted, rules.gloomy_disgusted);
        scores.add(Sad, rules.gloomy_sad);
    }

    if m.has_face {
        let boost = (m.skin_ratio * rules.face_boost_gain).min(rules.face_boost_cap);
        if m.warmth > rules.face_warm_min_warmth {
            scores.add(Happy, boost);
        } else if m.warmth < rules.face_cool_max_warmth {
            scores.add(Sad, boost);
        } else {
            scores.add(Neutral, boost);
        }
    }

    let (bright_lo, bright_hi) = rules.content_brightness;
    let (warm_lo, warm_hi) = rules.content_warmth;
    if m.brightness >= bright_lo
        && m.brightness <= bright_hi
        && m.warmth > warm_lo
        && m.warmth < warm_hi
    {
        scores.add(Happy, rules.content_happy);
        scores.add(Neutral, rules.content_neutral);
    }

    scores.add(Neutral, rules.neutral_baseline);

    scores
}
