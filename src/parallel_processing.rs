// WHY: Documents are independent, so a batch run summarizes several at once while each
// document's pipeline stays single-threaded and deterministic.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use crate::incremental::{should_process_file, write_summary_file_async};
use crate::progress::ProgressReporter;
use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::summarizer::{join_lines, Summarizer};

/// Per-document processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileStats {
    /// Document path
    pub path: String,
    /// Lines read from the document
    pub lines_read: u64,
    /// Bytes read from the document, line terminators included
    pub bytes_read: u64,
    /// Number of characters summarized
    pub chars_processed: u64,
    /// Number of sentences found by segmentation
    pub sentences_detected: u64,
    /// Number of sentences kept in the summary
    pub sentences_selected: u64,
    /// Wall time for reading, summarizing and writing
    pub processing_time_ms: u64,
    /// Processing status (success, skipped, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl FileStats {
    fn new(path: &Path, status: &str) -> Self {
        Self {
            path: path.display().to_string(),
            lines_read: 0,
            bytes_read: 0,
            chars_processed: 0,
            sentences_detected: 0,
            sentences_selected: 0,
            processing_time_ms: 0,
            status: status.to_string(),
            error: None,
        }
    }

    fn failed(path: &Path, error: String, started: Instant) -> Self {
        Self {
            error: Some(error),
            processing_time_ms: started.elapsed().as_millis() as u64,
            ..Self::new(path, "failed")
        }
    }
}

/// Aggregate statistics for one batch run
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    /// Run start as seconds since the Unix epoch
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub total_lines_read: u64,
    pub total_bytes_read: u64,
    pub total_chars_processed: u64,
    pub total_sentences_detected: u64,
    pub total_sentences_selected: u64,
    pub files_processed: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    fn record(&mut self, stats: FileStats) {
        match stats.status.as_str() {
            "success" => {
                self.files_processed += 1;
                self.total_lines_read += stats.lines_read;
                self.total_bytes_read += stats.bytes_read;
                self.total_chars_processed += stats.chars_processed;
                self.total_sentences_detected += stats.sentences_detected;
                self.total_sentences_selected += stats.sentences_selected;
            }
            "skipped" => self.files_skipped += 1,
            _ => self.files_failed += 1,
        }
        self.file_stats.push(stats);
    }

    /// Account for a document that failed before it could be summarized,
    /// such as a discovered path that did not pass validation
    pub fn record_failed(&mut self, path: &Path, error: String) {
        self.record(FileStats {
            error: Some(error),
            ..FileStats::new(path, "failed")
        });
    }

    /// Write the statistics as pretty-printed JSON
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", path.display()))?;
        Ok(())
    }
}

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    pub overwrite_all: bool,
    pub fail_fast: bool,
    /// Maximum documents in flight, defaults to the CPU count
    pub max_concurrency: Option<usize>,
}

/// Read, summarize and write the summary for one document
pub async fn summarize_file(
    path: &Path,
    summarizer: Arc<Summarizer>,
    reader_config: ReaderConfig,
) -> Result<FileStats> {
    let started = Instant::now();
    let reader = AsyncFileReader::new(reader_config);
    let (lines, read_stats) = reader.read_file_lines(path).await?;

    if let Some(error) = read_stats.read_error {
        return Ok(FileStats {
            lines_read: read_stats.lines_read,
            bytes_read: read_stats.bytes_read,
            ..FileStats::failed(path, error, started)
        });
    }

    let text = join_lines(&lines);
    let chars_processed = text.chars().count() as u64;
    let summary = tokio::task::spawn_blocking(move || summarizer.summarize(&text))
        .await
        .context("Summarization task panicked")??;

    write_summary_file_async(path, &summary.text())
        .await
        .with_context(|| format!("Failed to write summary for {}", path.display()))?;

    Ok(FileStats {
        lines_read: read_stats.lines_read,
        bytes_read: read_stats.bytes_read,
        chars_processed,
        sentences_detected: summary.sentences_detected as u64,
        sentences_selected: summary.sentences.len() as u64,
        processing_time_ms: started.elapsed().as_millis() as u64,
        ..FileStats::new(path, "success")
    })
}

/// Summarize many documents concurrently. With `fail_fast` the first failure aborts
/// the run; otherwise failures are recorded in the returned statistics.
pub async fn process_files_parallel(
    files: &[PathBuf],
    summarizer: Arc<Summarizer>,
    options: ProcessingOptions,
    progress: &ProgressReporter,
) -> Result<RunStats> {
    let run_started = Instant::now();
    let mut run_stats = RunStats {
        run_start: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
        ..Default::default()
    };

    let concurrency = options.max_concurrency.unwrap_or_else(num_cpus::get).max(1);
    let reader_config = ReaderConfig {
        fail_fast: options.fail_fast,
        ..Default::default()
    };
    info!("Summarizing {} documents with concurrency {}", files.len(), concurrency);

    let mut results = stream::iter(files.iter().cloned())
        .map(|path| {
            let summarizer = Arc::clone(&summarizer);
            let reader_config = reader_config.clone();
            let overwrite_all = options.overwrite_all;
            async move {
                if !should_process_file(&path, overwrite_all).await {
                    return (path.clone(), Ok(FileStats::new(&path, "skipped")));
                }
                let started = Instant::now();
                let result = summarize_file(&path, summarizer, reader_config)
                    .await
                    .map_err(|e| (e, started));
                (path, result)
            }
        })
        .buffered(concurrency);

    while let Some((path, result)) = results.next().await {
        let stats = match result {
            Ok(stats) => stats,
            Err((e, started)) => {
                if options.fail_fast {
                    return Err(e.context(format!("Failed to summarize {}", path.display())));
                }
                warn!("Failed to summarize {}: {:#}", path.display(), e);
                FileStats::failed(&path, format!("{e:#}"), started)
            }
        };

        if options.fail_fast {
            if let Some(error) = &stats.error {
                anyhow::bail!("Failed to summarize {}: {}", path.display(), error);
            }
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        progress.file_completed(&name);
        run_stats.record(stats);
    }

    run_stats.total_processing_time_ms = run_started.elapsed().as_millis() as u64;
    info!(
        "Batch complete: {} summarized, {} skipped, {} failed",
        run_stats.files_processed, run_stats.files_skipped, run_stats.files_failed
    );
    Ok(run_stats)
}
