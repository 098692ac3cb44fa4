use serde::{Deserialize, Serialize};

use crate::models::{EmotionLabel, TextEmotionResult};
use crate::text::lexicon::EmotionLexicon;
use crate::text::sentiment::SentimentAnalyzer;

const ENABLE_LOGS: bool = false;

use crate::log_debug;

/// Tunable constants of the keyword + polarity blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSettings {
    /// Results below this share are dropped.
    pub min_confidence: f64,
    /// `|comparative|` must exceed this to count as positive or negative.
    pub polarity_threshold: f64,
    /// Multiplier applied to the comparative score before blending.
    pub polarity_gain: f64,
    /// Added to neutral when the polarity is inside the threshold.
    pub neutral_boost: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            min_confidence: 0.10,
            polarity_threshold: 0.15,
            polarity_gain: 3.0,
            neutral_boost: 0.5,
        }
    }
}

/// Keep ASCII letters, apostrophes, hyphens and whitespace; everything else
/// becomes a space. Expects lowercased input.
fn keyword_tokens(lower: &str) -> Vec<String> {
    let cleaned: String = lower
        .chars()
        .map(|c| match c {
            'a'..='z' | '\'' | '-' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Rank every emotion whose share of the blended score reaches
/// `min_confidence`, highest first.
///
/// Blank input gives an empty list; input with no usable signal gives a single
/// neutral result at full confidence.
pub fn classify_text(
    text: &str,
    lexicon: &EmotionLexicon,
    sentiment: &SentimentAnalyzer,
    settings: &TextSettings,
) -> Vec<TextEmotionResult> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let words = keyword_tokens(&text.to_lowercase());
    if words.is_empty() {
        return Vec::new();
    }

    let mut raw = lexicon.score_tokens(&words);
    let comp = sentiment.analyze(text).comparative;

    if comp > settings.polarity_threshold {
        raw.add(EmotionLabel::Happy, comp * settings.polarity_gain);
    } else if comp < -settings.polarity_threshold {
        // Spread the negative mass over sad/angry/fearful, weighted by keyword
        // hits with +0.5 smoothing so each gets a share.
        let neg_mag = comp.abs() * settings.polarity_gain;
        let (sad, angry, fearful) = (
            raw.get(EmotionLabel::Sad),
            raw.get(EmotionLabel::Angry),
            raw.get(EmotionLabel::Fearful),
        );
        let hits = sad + angry + fearful;
        let neg_total = if hits == 0.0 { 1.0 } else { hits };
        raw.add(EmotionLabel::Sad, neg_mag * ((sad + 0.5) / (neg_total + 1.5)));
        raw.add(EmotionLabel::Angry, neg_mag * ((angry + 0.5) / (neg_total + 1.5)));
        raw.add(EmotionLabel::Fearful, neg_mag * ((fearful + 0.5) / (neg_total + 1.5)));
    } else {
        raw.add(EmotionLabel::Neutral, settings.neutral_boost);
    }

    let total = raw.total();
    log_debug!("text scores {:?} (comparative {:.3}, total {:.3})", raw, comp, total);
    if total == 0.0 {
        return vec![neutral_singleton()];
    }

    let mut results: Vec<TextEmotionResult> = raw
        .iter()
        .map(|(emotion, score)| TextEmotionResult {
            emotion,
            confidence: score / total,
        })
        .filter(|r| r.confidence >= settings.min_confidence)
        .collect();
    // Stable, so equal shares keep label order.
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    if results.is_empty() {
        return vec![neutral_singleton()];
    }
    results
}

/// First entry of [`classify_text`], if any.
pub fn predict_top_text_emotion(
    text: &str,
    lexicon: &EmotionLexicon,
    sentiment: &SentimentAnalyzer,
    settings: &TextSettings,
) -> Option<TextEmotionResult> {
    classify_text(text, lexicon, sentiment, settings)
        .into_iter()
        .next()
}

fn neutral_singleton() -> TextEmotionResult {
    TextEmotionResult {
        emotion: EmotionLabel::Neutral,
        confidence: 1.0,
    }
}
