pub mod classifier;
pub mod lexicon;
pub mod sentiment;

pub use classifier::{classify_text, predict_top_text_emotion, TextSettings};
pub use lexicon::{EmotionLexicon, LEXICON_VERSION};
pub use sentiment::{tokenize, SentimentAnalyzer, SentimentScore};
