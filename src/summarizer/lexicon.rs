// WHY: Stop words and abbreviations are immutable value objects handed to each stage,
// so counting and scoring classify tokens with exactly the same rule.

use std::collections::HashSet;

use super::{Token, TokenKind};

/// Abbreviations whose periods never end a sentence. Stored lowercase with their periods.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "dr.", "mr.", "mrs.", "ms.", "prof.", "sr.", "jr.", "st.", "rev.", "gen.", "capt.",
    "u.s.", "u.s.a.", "u.k.", "n.y.c.", "l.a.", "d.c.",
    "ft.", "lbs.", "oz.", "mi.", "km.",
    "a.m.", "p.m.", "etc.", "vs.", "e.g.", "i.e.", "approx.", "dept.", "inc.", "ltd.", "co.",
    "jan.", "feb.", "aug.", "sept.", "oct.", "nov.", "dec.",
];

/// Common English function words excluded from scoring
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "d", "did", "do", "does", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "itself", "just", "ll", "m", "may", "me",
    "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "o", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "re", "s", "said", "same", "she", "should", "so", "some", "such", "t", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Set of lowercase entries loaded once and never mutated afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries: trimmed, lowercased, blanks dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a one-entry-per-line list. Lines starting with `#` are comments.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Stop list and abbreviation list used by one summarizer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: WordSet,
    abbreviations: WordSet,
}

impl Lexicon {
    pub fn new(stop_words: WordSet, abbreviations: WordSet) -> Self {
        Self {
            stop_words,
            abbreviations,
        }
    }

    /// Built-in English lists
    pub fn english() -> Self {
        Self::new(
            DEFAULT_STOPWORDS.iter().collect(),
            DEFAULT_ABBREVIATIONS.iter().collect(),
        )
    }

    pub fn abbreviations(&self) -> &WordSet {
        &self.abbreviations
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Content words are purely alphabetic, unprotected, and not stop words.
    /// Both the frequency pass and the scoring pass go through this one check.
    pub fn is_content_word(&self, token: &Token) -> bool {
        token.kind == TokenKind::Word
            && !token.text.is_empty()
            && token.text.chars().all(char::is_alphabetic)
            && !self.is_stop_word(&token.text)
    }
}
