//! Daily journal pages as stored by the host app.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One page per calendar day, keyed by its local date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub char_count: usize,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            date,
            word_count: content.split_whitespace().count(),
            char_count: content.chars().count(),
            content,
            is_favorite: false,
            updated_at: None,
        }
    }

    /// Blank pages don't count as written.
    pub fn is_written(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
