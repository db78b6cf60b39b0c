pub mod discovery;
pub mod incremental;
pub mod parallel_processing;
pub mod progress;
pub mod reader;
pub mod summarizer;

// Re-export main types for convenient access
pub use summarizer::{
    FrequencyTable, Lexicon, SelectedSentence, SelectionPolicy, Sentence, Summarizer,
    SummarizerConfig, Summary, Token, TokenKind, WordSet,
};

// Re-export batch processing types and functions
pub use parallel_processing::{
    process_files_parallel, summarize_file, FileStats, ProcessingOptions, RunStats,
};
