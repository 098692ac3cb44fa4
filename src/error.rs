//! Error types for moodlens.

use thiserror::Error;

/// Result alias for the typed, library-level failures.
pub type Result<T> = std::result::Result<T, MoodError>;

#[derive(Error, Debug)]
pub enum MoodError {
    /// Encoded image bytes could not be decoded.
    #[error("failed to decode image: {message}")]
    ImageDecode {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    /// The source has a zero width or height and cannot be sampled.
    #[error("cannot sample an empty frame ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    /// A raw RGBA frame does not hold `width * height * 4` bytes.
    #[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A lexicon line could not be parsed.
    #[error("invalid lexicon entry on line {line}: {content:?}")]
    LexiconParse { line: usize, content: String },

    /// A settings value is outside its allowed range.
    #[error("invalid setting: {name} = {value}")]
    InvalidSetting { name: String, value: String },
}

impl MoodError {
    pub fn image_decode(message: impl Into<String>, source: image::ImageError) -> Self {
        Self::ImageDecode {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn invalid_setting(name: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Short text the UI layer can show when classification gives up.
    pub fn user_message(&self) -> &'static str {
        match self {
            MoodError::ImageDecode { .. } | MoodError::EmptyFrame { .. } => {
                "Could not analyze this image. Please try another photo."
            }
            MoodError::FrameSizeMismatch { .. } => "Could not read the camera frame.",
            _ => "Analysis is unavailable right now.",
        }
    }
}
