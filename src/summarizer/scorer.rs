use anyhow::{bail, Result};

use super::{FrequencyTable, Lexicon, Sentence};

/// One score per sentence, aligned with sentence indices
pub type ScoreTable = Vec<f64>;

/// Scores sentences by the mean normalized weight of their content words
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
    table: &'a FrequencyTable,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a Lexicon, table: &'a FrequencyTable) -> Self {
        Self { lexicon, table }
    }

    /// Mean weight of the sentence's content words, 0.0 when it has none.
    /// A content word absent from the table means the table was built from other sentences.
    pub fn score_sentence(&self, sentence: &Sentence) -> Result<f64> {
        let mut total = 0.0;
        let mut words = 0usize;

        for token in sentence.tokens.iter().filter(|t| self.lexicon.is_content_word(t)) {
            let Some(weight) = self.table.weight(&token.text) else {
                bail!(
                    "content word {:?} in sentence {} missing from frequency table",
                    token.text,
                    sentence.index
                );
            };
            total += weight;
            words += 1;
        }

        if words == 0 {
            return Ok(0.0);
        }
        Ok(total / words as f64)
    }

    pub fn score_all(&self, sentences: &[Sentence]) -> Result<ScoreTable> {
        sentences.iter().map(|s| self.score_sentence(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::Segmenter;

    fn scores(text: &str) -> ScoreTable {
        let lexicon = Lexicon::english();
        let sentences = Segmenter::new(lexicon.abbreviations()).segment(text);
        let table = FrequencyTable::build(&sentences, &lexicon);
        Scorer::new(&lexicon, &table).score_all(&sentences).unwrap()
    }

    #[test]
    fn test_mean_of_weights() {
        // apple 3, banana 2, cherry 1 -> weights 1, 2/3, 1/3
        let scores = scores("Apple apple apple banana. Banana cherry.");
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - (3.0 + 2.0 / 3.0) / 4.0).abs() < 1e-12);
        assert!((scores[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_without_content_scores_zero() {
        let scores = scores("Rivers flow. It is. Rivers bend.");
        assert_eq!(scores[1], 0.0);
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn test_all_empty_content_document() {
        let scores = scores("It is. So it was!");
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_mismatched_table_is_an_error() {
        let lexicon = Lexicon::english();
        let segmenter = Segmenter::new(lexicon.abbreviations());
        let table = FrequencyTable::build(&segmenter.segment("Rivers flow."), &lexicon);
        let other = segmenter.segment("Mountains rise.");

        let result = Scorer::new(&lexicon, &table).score_all(&other);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("mountains"));
    }
}
