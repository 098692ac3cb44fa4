//! AFINN-style polarity scoring.
//!
//! Every token found in the valence table contributes its rating, negated
//! when the token right before it is a negator ("not good" scores -3). The
//! comparative score divides the total by the token count.

use anyhow::Context;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{MoodError, Result};

const ENABLE_LOGS: bool = true;

use crate::log_info;

const AFINN_165: &str = include_str!("../../data/afinn-165.tsv");

const NEGATORS: [&str; 12] = [
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

/// Characters the tokenizer turns into spaces.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScore {
    /// Sum of (possibly negated) token ratings.
    pub score: i32,
    /// `score / token_count`.
    pub comparative: f64,
    pub token_count: usize,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    valence: HashMap<String, i32>,
    negators: HashSet<&'static str>,
}

impl SentimentAnalyzer {
    /// Analyzer over the bundled AFINN table.
    pub fn afinn() -> Result<Self> {
        Self::from_table(AFINN_165)
    }

    /// Parse a `word<TAB>score` table. Blank lines and `#` comments are skipped.
    pub fn from_table(table: &str) -> Result<Self> {
        let mut valence = HashMap::new();
        for (index, raw) in table.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let parsed = line
                .rsplit_once('\t')
                .and_then(|(word, score)| score.trim().parse::<i32>().ok().map(|s| (word, s)));
            match parsed {
                Some((word, score)) if !word.is_empty() => {
                    valence.insert(word.to_lowercase(), score);
                }
                _ => {
                    return Err(MoodError::LexiconParse {
                        line: index + 1,
                        content: line.to_string(),
                    })
                }
            }
        }

        Ok(Self {
            valence,
            negators: NEGATORS.iter().copied().collect(),
        })
    }

    /// Load a replacement word list from disk.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let table = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sentiment lexicon from {}", path.display()))?;
        let analyzer = Self::from_table(&table)
            .with_context(|| format!("Failed to parse sentiment lexicon {}", path.display()))?;
        log_info!("loaded {} sentiment ratings from {}", analyzer.len(), path.display());
        Ok(analyzer)
    }

    pub fn len(&self) -> usize {
        self.valence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valence.is_empty()
    }

    pub fn rating(&self, word: &str) -> Option<i32> {
        self.valence.get(word).copied()
    }

    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        let mut score = 0;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut rating) = self.rating(token) else {
                continue;
            };
            if i > 0 && self.negators.contains(tokens[i - 1].as_str()) {
                rating = -rating;
            }
            if rating > 0 {
                positive.push(token.clone());
            } else if rating < 0 {
                negative.push(token.clone());
            }
            score += rating;
        }

        let token_count = tokens.len();
        let comparative = if token_count > 0 {
            f64::from(score) / token_count as f64
        } else {
            0.0
        };

        SentimentScore {
            score,
            comparative,
            token_count,
            positive,
            negative,
        }
    }
}

/// Lowercase, blank out punctuation, collapse whitespace runs, trim, split on
/// single spaces. Empty input still yields one (empty) token.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c == '\n' || PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    let mut collapsed = String::with_capacity(cleaned.len());
    let mut chars = cleaned.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            collapsed.push(' ');
        } else {
            collapsed.push(c);
        }
    }

    collapsed.trim().split(' ').map(str::to_string).collect()
}
