use std::collections::HashMap;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
    "could", "i", "me", "my", "we", "our", "you", "your", "he", "she", "it", "they", "them",
    "this", "that", "these", "those", "and", "but", "or", "not", "so", "if", "then", "than",
    "too", "very", "just", "about", "like", "with", "for", "from", "into", "of", "on", "in",
    "at", "to", "up", "out", "off", "over", "after", "before", "also", "more", "some", "no",
    "only", "really", "much", "what", "which", "who", "when", "where", "how", "all", "each",
    "every", "both", "few", "most", "other", "such", "even", "still", "yet", "already", "today",
    "feel", "feeling", "felt", "think", "thought", "know", "day", "time", "thing", "way", "got",
    "get", "going", "went", "make", "made", "want", "need", "take", "come", "see", "look",
    "give", "good", "bad", "lot", "bit", "don", "didn", "doesn", "won",
];

pub const MAX_KEYWORDS: usize = 8;

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Rank `(key, count)` pairs by count, descending. Equal counts keep the
/// order in which keys were first seen.
pub(crate) fn rank_by_frequency<K: Clone + Eq + std::hash::Hash>(
    keys: impl IntoIterator<Item = K>,
) -> Vec<(K, usize)> {
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut ranked: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match index.get(&key) {
            Some(&at) => ranked[at].1 += 1,
            None => {
                index.insert(key.clone(), ranked.len());
                ranked.push((key, 1));
            }
        }
    }
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Most frequent content words across free-form journal texts.
///
/// Characters outside `a-z` and whitespace are deleted (not replaced), so
/// "don't" becomes "dont". Words of four letters or more that are not stop
/// words are counted; the top eight are returned.
pub fn extract_journal_keywords<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let words = texts.iter().flat_map(|text| {
        let cleaned: String = text
            .as_ref()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();
        cleaned
            .split_whitespace()
            .filter(|word| word.len() > 3 && !is_stop_word(word))
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    rank_by_frequency(words)
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}
