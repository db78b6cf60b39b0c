// WHY: Single segmentation pass shared by counting, scoring and rendering.
// Periods inside abbreviations and numbers are kept as protected token text instead of
// being rewritten, so nothing in the input can be mistaken for a protected period.

use std::mem;

use tracing::debug;

use super::lexicon::WordSet;
use super::{Sentence, Token, TokenKind};

/// Punctuation that always becomes a token of its own
const SYMBOL_CHARS: &[char] = &[
    '/', ':', ';', '\'', '\u{2014}', '+', '=', '@', '#', '$', '%', '^', '&', '*', '(', ')',
    '[', ']', '{', '}', '>', '<', '~', '`', '"', ',',
    '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Terminators that split out of a word on their own. `.` is handled per word piece.
const SPLIT_TERMINATORS: &[char] = &['!', '?'];

fn is_symbol(ch: char) -> bool {
    SYMBOL_CHARS.contains(&ch)
}

/// Splits lowercased text into sentences of tokens
pub struct Segmenter<'a> {
    abbreviations: &'a WordSet,
}

impl<'a> Segmenter<'a> {
    pub fn new(abbreviations: &'a WordSet) -> Self {
        Self { abbreviations }
    }

    /// Segment a document. A sentence ends after a whitespace-delimited chunk whose
    /// last token is a terminator; trailing text without a terminator forms the final sentence.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let lowered = text.to_lowercase();
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        for chunk in lowered.split_whitespace() {
            let chunk_start = current.len();
            self.tokenize_chunk(chunk, &mut current);

            // First token of a chunk was preceded by whitespace
            if let Some(first) = current.get_mut(chunk_start) {
                first.attached = false;
            }

            if current.last().is_some_and(Token::is_terminal) {
                flush_sentence(&mut sentences, &mut current);
            }
        }
        flush_sentence(&mut sentences, &mut current);

        debug!("Segmented {} chars into {} sentences", text.len(), sentences.len());
        sentences
    }

    fn tokenize_chunk(&self, chunk: &str, out: &mut Vec<Token>) {
        if self.abbreviations.contains(chunk) {
            out.push(Token::new(TokenKind::Protected, chunk, true));
            return;
        }

        let mut piece_start = None;
        for (i, ch) in chunk.char_indices() {
            let kind = if is_symbol(ch) {
                TokenKind::Symbol
            } else if SPLIT_TERMINATORS.contains(&ch) {
                TokenKind::Terminal
            } else {
                piece_start.get_or_insert(i);
                continue;
            };

            if let Some(start) = piece_start.take() {
                self.push_piece(&chunk[start..i], out);
            }
            out.push(Token::new(kind, ch.to_string(), true));
        }

        if let Some(start) = piece_start {
            self.push_piece(&chunk[start..], out);
        }
    }

    /// Classify a punctuation-free piece of a chunk
    fn push_piece(&self, piece: &str, out: &mut Vec<Token>) {
        if self.abbreviations.contains(piece) {
            out.push(Token::new(TokenKind::Protected, piece, true));
            return;
        }

        let body = piece.trim_end_matches('.');
        if !body.is_empty() {
            // Remaining periods sit mid-token (decimals, dotted forms) and never split
            let kind = if body.contains('.') {
                TokenKind::Protected
            } else {
                TokenKind::Word
            };
            out.push(Token::new(kind, body, true));
        }

        for _ in 0..(piece.len() - body.len()) {
            out.push(Token::new(TokenKind::Terminal, ".", true));
        }
    }
}

fn flush_sentence(sentences: &mut Vec<Sentence>, current: &mut Vec<Token>) {
    if current.is_empty() {
        return;
    }
    sentences.push(Sentence {
        index: sentences.len(),
        tokens: mem::take(current),
    });
}
