use std::collections::HashMap;

use super::{Lexicon, Sentence};

/// Raw and normalized content-word frequencies for one document.
/// Weights are document-relative (count / max count); there is no IDF component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl FrequencyTable {
    /// Count every content word across all sentences
    pub fn build(sentences: &[Sentence], lexicon: &Lexicon) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in sentences.iter().flat_map(|s| &s.tokens) {
            if lexicon.is_content_word(token) {
                *counts.entry(token.text.clone()).or_default() += 1;
            }
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        Self { counts, max_count }
    }

    pub fn count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Normalized weight in (0, 1]; the most frequent word(s) weigh exactly 1.0
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.count(word)
            .map(|count| count as f64 / self.max_count as f64)
    }

    /// Highest raw count, 0 when the document has no content words
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct content words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (word, normalized weight) pairs in no particular order
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.counts
            .iter()
            .map(move |(word, &count)| (word.as_str(), count as f64 / self.max_count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::Segmenter;

    fn table(text: &str) -> FrequencyTable {
        let lexicon = Lexicon::english();
        let sentences = Segmenter::new(lexicon.abbreviations()).segment(text);
        FrequencyTable::build(&sentences, &lexicon)
    }

    #[test]
    fn test_counts_content_words_only() {
        let table = table("The cat saw the cat. A dog saw 3 cats, Dr. Who said.");
        assert_eq!(table.count("cat"), Some(2));
        assert_eq!(table.count("saw"), Some(2));
        assert_eq!(table.count("cats"), Some(1));
        assert_eq!(table.count("the"), None);
        assert_eq!(table.count("3"), None);
        assert_eq!(table.count("dr."), None);
        assert_eq!(table.max_count(), 2);
    }

    #[test]
    fn test_weight_bounds() {
        let table = table("Apple apple apple banana. Banana cherry.");
        assert_eq!(table.weight("apple"), Some(1.0));
        assert!((table.weight("banana").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((table.weight("cherry").unwrap() - 1.0 / 3.0).abs() < 1e-12);

        for (_, weight) in table.weights() {
            assert!(weight > 0.0 && weight <= 1.0);
        }
        assert_eq!(table.weights().filter(|(_, w)| *w == 1.0).count(), 1);
    }

    #[test]
    fn test_tied_maximum() {
        let table = table("Red blue. Blue red.");
        assert_eq!(table.weight("red"), Some(1.0));
        assert_eq!(table.weight("blue"), Some(1.0));
    }

    #[test]
    fn test_no_content_words() {
        let table = table("It is what it is. 42!");
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.weight("anything"), None);
    }
}
