// Test fixtures with known documents and expected summaries
// WHY: Golden-output testing requires deterministic input/output pairs

/// Hard-wrapped article with an abbreviation, a decimal and adjacent short sentences
pub const ARTICLE_TEXT: &str = "Honeybees are social insects that live in large colonies.
A colony contains one queen, thousands of workers, and a few hundred drones.
Workers gather nectar and pollen from flowers near the hive.
The weather was pleasant on Tuesday.
Dr. Lee measured 2.5 kg of honey from a single hive in the U.S. last year.
Honeybees communicate the location of flowers through a waggle dance.
Is it true? Yes!
Beekeepers protect colonies from mites, disease, and cold winters.
Pollination by honeybees supports many crops and wild flowers.
";

/// Sentence count of ARTICLE_TEXT
pub const ARTICLE_SENTENCES: usize = 10;

/// Indices selected from ARTICLE_TEXT: 10 / 5 + 2 = 4 sentences
pub const ARTICLE_SELECTED: &[usize] = &[0, 2, 5, 9];

/// Expected summary of ARTICLE_TEXT with the built-in English lexicon
pub const ARTICLE_EXPECTED: &str = "Honeybees are social insects that live in large colonies. \
Workers gather nectar and pollen from flowers near the hive. \
Honeybees communicate the location of flowers through a waggle dance. \
Pollination by honeybees supports many crops and wild flowers.";

/// Three sentences: only two are kept, in document order
pub const SHORT_TEXT: &str = "Rust compiles fast code. Cats sleep. Rust code is safe code.";

pub const SHORT_EXPECTED: &str = "Rust compiles fast code. Rust code is safe code.";

/// Every sentence scores 1.0 except the last; ties resolve to the earliest sentences
pub const TIED_TEXT: &str = "Alpha beta. Beta alpha. Alpha beta. Gamma.";

pub const TIED_EXPECTED: &str = "Alpha beta. Beta alpha.";

/// No content words anywhere
pub const STOPWORD_TEXT: &str = "It is. And so it was. Then it is not. But they were.";
