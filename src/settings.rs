use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use crate::error::MoodError;
use crate::text::TextSettings;
use crate::vision::{ImageRules, SAMPLE_SIZE};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info, log_warn};

/// Everything the analyzers can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerSettings {
    pub image_rules: ImageRules,
    pub text: TextSettings,
    /// Side of the square sample the image classifier resizes to.
    pub sample_size: u32,
    /// Optional replacement AFINN word list, tab separated. The bundled
    /// AFINN-165 table is used when unset.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            image_rules: ImageRules::default(),
            text: TextSettings::default(),
            sample_size: SAMPLE_SIZE,
            lexicon_path: None,
        }
    }
}

impl AnalyzerSettings {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.sample_size == 0 {
            return Err(MoodError::invalid_setting("sampleSize", self.sample_size));
        }
        let rules = &self.image_rules;
        if !(0.0..=1.0).contains(&rules.confidence_floor)
            || !(0.0..=1.0).contains(&rules.confidence_ceiling)
            || rules.confidence_floor > rules.confidence_ceiling
        {
            return Err(MoodError::invalid_setting(
                "imageRules.confidenceFloor..confidenceCeiling",
                format!("{}..{}", rules.confidence_floor, rules.confidence_ceiling),
            ));
        }
        if !(0.0..=1.0).contains(&self.text.min_confidence) {
            return Err(MoodError::invalid_setting("text.minConfidence", self.text.min_confidence));
        }
        if self.text.polarity_threshold < 0.0 {
            return Err(MoodError::invalid_setting(
                "text.polarityThreshold",
                self.text.polarity_threshold,
            ));
        }
        Ok(())
    }

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: AnalyzerSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }
}

/// JSON-backed settings file shared by the engine and its host.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<AnalyzerSettings>,
}

impl SettingsStore {
    /// Open the store at `path`. A missing or unreadable file yields defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            match AnalyzerSettings::from_file(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    log_warn!("Ignoring settings at {}: {:#}", path.display(), e);
                    AnalyzerSettings::default()
                }
            }
        } else {
            AnalyzerSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> AnalyzerSettings {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate, store and persist new settings.
    pub fn update(&self, settings: AnalyzerSettings) -> Result<()> {
        settings.validate()?;
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.persist(&settings) {
            log_error!("Could not save analyzer settings: {:#}", e);
            return Err(e);
        }
        *guard = settings;
        log_info!("Saved analyzer settings to {}", self.path.display());
        Ok(())
    }

    fn persist(&self, data: &AnalyzerSettings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    pub fn reload(&self) -> Result<()> {
        let data = AnalyzerSettings::from_file(&self.path)?;
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = data;
        Ok(())
    }
}
