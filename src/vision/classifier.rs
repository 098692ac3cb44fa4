use crate::error::Result;
use crate::models::{EmotionLabel, EmotionPrediction, EmotionScores};
use crate::vision::frame::MediaInput;
use crate::vision::pixels::{extract_metrics, PixelMetrics};
use crate::vision::rules::{infer_emotion_scores, ImageRules};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

/// Side length of the square sample buffer.
pub const SAMPLE_SIZE: u32 = 64;

/// Sample the input and compute its pixel statistics.
pub fn analyze_frame(
    input: &MediaInput<'_>,
    rules: &ImageRules,
    sample_size: u32,
) -> Result<PixelMetrics> {
    let sample = input.render(sample_size)?;
    Ok(extract_metrics(&sample, rules.face_skin_ratio))
}

/// Normalize scores and pick the strongest label, clamping its confidence.
pub fn pick_top_emotion(scores: &EmotionScores, rules: &ImageRules) -> EmotionPrediction {
    let total = scores.total();
    if total == 0.0 {
        return EmotionPrediction {
            emotion: EmotionLabel::Neutral,
            confidence: rules.zero_signal_confidence,
        };
    }

    let mut best = EmotionPrediction {
        emotion: EmotionLabel::Neutral,
        confidence: 0.0,
    };
    for (label, score) in scores.iter() {
        let confidence = score / total;
        if confidence > best.confidence {
            best = EmotionPrediction { emotion: label, confidence };
        }
    }

    best.confidence = best
        .confidence
        .max(rules.confidence_floor)
        .min(rules.confidence_ceiling);
    best
}

/// Classify an image and surface the failure when the input is unusable.
pub fn analyze_image(
    input: &MediaInput<'_>,
    rules: &ImageRules,
    sample_size: u32,
) -> Result<EmotionPrediction> {
    let metrics = analyze_frame(input, rules, sample_size)?;
    let scores = infer_emotion_scores(&metrics, rules);
    let prediction = pick_top_emotion(&scores, rules);
    log_debug!(
        "image metrics {:?} -> {} ({:.2})",
        metrics,
        prediction.emotion,
        prediction.confidence
    );
    Ok(prediction)
}

/// Classify an image, video frame or canvas. `None` means the input could not
/// be processed at all, which is distinct from a low-confidence neutral.
pub fn predict_top_emotion(
    input: &MediaInput<'_>,
    rules: &ImageRules,
    sample_size: u32,
) -> Option<EmotionPrediction> {
    match analyze_image(input, rules, sample_size) {
        Ok(prediction) => Some(prediction),
        Err(err) => {
            log_warn!("image emotion analysis failed: {err}");
            None
        }
    }
}
