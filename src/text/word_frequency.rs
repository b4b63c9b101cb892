// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::HashMap;

/// Occurrence counts for each distinct word of a text.
///
/// Words are kept in the order they were first seen, so [`WordCount::iter`]
/// walks them in source order and [`WordCount::most_common`] can break count
/// ties by first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

/// One row of a ranked word frequency listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordFrequency<'a> {
    pub word: &'a str,
    pub count: usize,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Count for `word`, or `None` if it never occurred.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&position| self.entries[position].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Words in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Words sorted by descending count. Equal counts keep first-appearance order.
    pub fn most_common(&self) -> Vec<WordFrequency<'_>> {
        let mut ranked: Vec<WordFrequency<'_>> = self
            .iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Plain map view, dropping ordering.
    pub fn to_hash_map(&self) -> HashMap<String, usize> {
        self.entries.iter().cloned().collect()
    }
}

/// Replace ASCII punctuation with spaces and lowercase the result.
///
/// Punctuation becomes a space rather than being dropped so that
/// `"end.Start"` splits into two words instead of merging into one.
pub fn normalize_for_words(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Count occurrences of every whitespace-separated token after normalization.
///
/// # Example
/// ```
/// use textkit::text::count_word_frequency;
///
/// let counts = count_word_frequency("one fish, two fish");
/// assert_eq!(counts.get("fish"), Some(2));
/// assert_eq!(counts.most_common()[0].word, "fish");
/// ```
pub fn count_word_frequency(text: &str) -> WordCount {
    let mut counts = WordCount::new();
    for token in normalize_for_words(text).split_whitespace() {
        counts.record(token);
    }
    counts
}
