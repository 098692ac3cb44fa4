pub mod classifier;
pub mod frame;
pub mod pixels;
pub mod rules;

pub use classifier::{
    analyze_frame, analyze_image, pick_top_emotion, predict_top_emotion, SAMPLE_SIZE,
};
pub use frame::MediaInput;
pub use pixels::{extract_metrics, is_skin_pixel, PixelMetrics};
pub use rules::{infer_emotion_scores, ImageRules};
