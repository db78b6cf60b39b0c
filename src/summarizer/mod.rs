// WHY: Summarization pipeline entry point. Each stage is a pure function of the
// previous stage's output plus the immutable lexicon, so the whole run is deterministic.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub mod frequency;
pub mod lexicon;
pub mod normalization;
pub mod reconstructor;
pub mod scorer;
pub mod segmenter;
pub mod selector;

// Re-export core types
pub use frequency::FrequencyTable;
pub use lexicon::{Lexicon, WordSet};
pub use normalization::{join_lines, normalize_whitespace, normalize_whitespace_into};
pub use reconstructor::render_sentence;
pub use scorer::{ScoreTable, Scorer};
pub use segmenter::Segmenter;
pub use selector::SelectionPolicy;

/// Classification of a token produced by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Period-free text between punctuation marks
    Word,
    /// Text carrying periods that are not sentence boundaries (abbreviations, decimals)
    Protected,
    /// Sentence terminator: `.`, `!` or `?`
    Terminal,
    /// Any other punctuation mark, always split from neighbouring text
    Symbol,
}

/// A single token of a segmented sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// True when no whitespace separated this token from the previous one in the source
    pub attached: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, attached: bool) -> Self {
        Self {
            kind,
            text: text.into(),
            attached,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == TokenKind::Terminal
    }
}

/// A sentence as an ordered token sequence, indexed by segmentation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Token texts in order, mostly useful for assertions and debugging
    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfig {
    pub selection: SelectionPolicy,
}

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub score: f64,
    pub text: String,
}

/// Result of summarizing one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub sentences_detected: usize,
    /// Selected sentences in ascending document order
    pub sentences: Vec<SelectedSentence>,
}

impl Summary {
    /// Selected sentence indices, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    /// Rendered summary: selected sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    lexicon: Arc<Lexicon>,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a summarizer over the given lexicon
    pub fn new(lexicon: impl Into<Arc<Lexicon>>, config: SummarizerConfig) -> Result<Self> {
        config.selection.validate()?;
        Ok(Self {
            lexicon: lexicon.into(),
            config,
        })
    }

    /// Summarizer with the built-in English stop and abbreviation lists
    pub fn with_default_lexicon() -> Result<Self> {
        Self::new(Lexicon::english(), SummarizerConfig::default())
    }

    /// Split a document into sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        Segmenter::new(self.lexicon.abbreviations()).segment(text)
    }

    /// Run the full pipeline over a document
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        let sentences = self.segment(text);
        self.summarize_sentences(&sentences)
    }

    /// Run frequency, scoring, selection and rendering over already segmented sentences
    pub fn summarize_sentences(&self, sentences: &[Sentence]) -> Result<Summary> {
        let table = FrequencyTable::build(sentences, &self.lexicon);
        let scores = Scorer::new(&self.lexicon, &table).score_all(sentences)?;
        let selected = selector::select(&scores, self.config.selection);

        debug!(
            sentences = sentences.len(),
            distinct_words = table.len(),
            selected = selected.len(),
            "Summarized document"
        );

        let sentences = selected
            .into_iter()
            .map(|index| SelectedSentence {
                index,
                score: scores[index],
                text: render_sentence(&sentences[index]),
            })
            .collect();

        Ok(Summary {
            sentences_detected: scores.len(),
            sentences,
        })
    }
}
