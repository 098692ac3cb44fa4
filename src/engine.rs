use anyhow::{Context, Result};

use crate::models::{EmotionPrediction, TextEmotionResult};
use crate::settings::{AnalyzerSettings, SettingsStore};
use crate::text::{self, EmotionLexicon, SentimentAnalyzer, LEXICON_VERSION};
use crate::vision::{self, MediaInput};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Image and text classifiers bundled with their tables and settings.
///
/// Construction does the only fallible work (loading and validating tables);
/// classification itself never errors.
pub struct EmotionEngine {
    settings: AnalyzerSettings,
    lexicon: EmotionLexicon,
    sentiment: SentimentAnalyzer,
}

impl EmotionEngine {
    /// Engine with default settings and the bundled word lists.
    pub fn new() -> Result<Self> {
        Self::from_settings(&AnalyzerSettings::default())
    }

    pub fn from_settings(settings: &AnalyzerSettings) -> Result<Self> {
        settings.validate()?;

        let sentiment = match &settings.lexicon_path {
            Some(path) => SentimentAnalyzer::from_path(path)?,
            None => SentimentAnalyzer::afinn().context("Failed to load bundled AFINN table")?,
        };
        log_info!(
            "Emotion engine ready (rules v{}, lexicon v{}, {} rated words, sample {}px)",
            settings.image_rules.version,
            LEXICON_VERSION,
            sentiment.len(),
            settings.sample_size
        );

        Ok(Self {
            settings: settings.clone(),
            lexicon: EmotionLexicon::v1(),
            sentiment,
        })
    }

    /// Engine built from whatever the host's settings file currently holds.
    pub fn from_store(store: &SettingsStore) -> Result<Self> {
        Self::from_settings(&store.settings())
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    /// Dominant emotion of a picture, or `None` if it could not be read.
    pub fn classify_image(&self, input: &MediaInput<'_>) -> Option<EmotionPrediction> {
        vision::predict_top_emotion(input, &self.settings.image_rules, self.settings.sample_size)
    }

    /// Like [`classify_image`](Self::classify_image), but keeps the reason an
    /// input was rejected.
    pub fn analyze_image(&self, input: &MediaInput<'_>) -> crate::error::Result<EmotionPrediction> {
        vision::analyze_image(input, &self.settings.image_rules, self.settings.sample_size)
    }

    pub fn classify_text(&self, text: &str) -> Vec<TextEmotionResult> {
        text::classify_text(text, &self.lexicon, &self.sentiment, &self.settings.text)
    }

    pub fn predict_top_text_emotion(&self, text: &str) -> Option<TextEmotionResult> {
        text::predict_top_text_emotion(text, &self.lexicon, &self.sentiment, &self.settings.text)
    }
}
