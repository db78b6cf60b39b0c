// WHY: Ranking uses a stable sort on (score desc, index asc) so equal scores always
// resolve toward earlier sentences and repeated runs select the same set.

use anyhow::{bail, Result};

/// How many sentences a summary keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// `num_sentences / divisor + minimum`
    Proportional { divisor: usize, minimum: usize },
    /// A fixed number of sentences
    Fixed(usize),
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        // Roughly a fifth of the document, never fewer than two sentences
        Self::Proportional {
            divisor: 5,
            minimum: 2,
        }
    }
}

impl SelectionPolicy {
    pub fn validate(&self) -> Result<()> {
        if let Self::Proportional { divisor: 0, .. } = self {
            bail!("proportional selection divisor must be greater than zero");
        }
        Ok(())
    }

    /// Number of sentences to keep, clamped to the number available
    pub fn num_to_select(&self, num_sentences: usize) -> usize {
        let wanted = match *self {
            Self::Proportional { divisor, minimum } => {
                num_sentences.checked_div(divisor).unwrap_or(0) + minimum
            }
            Self::Fixed(count) => count,
        };
        wanted.min(num_sentences)
    }
}

/// Sentence indices ordered by descending score, ties by ascending index
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranked
}

/// Pick the top sentences and return their indices in document order
pub fn select(scores: &[f64], policy: SelectionPolicy) -> Vec<usize> {
    let count = policy.num_to_select(scores.len());
    let mut selected = rank(scores);
    selected.truncate(count);
    selected.sort_unstable();
    selected
}
