use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::summarizer::{join_lines, WordSet};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or return partial results
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB matches typical filesystem block reads
        }
    }
}

/// Statistics for file reading operations
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub lines_read: u64,
    /// Exact bytes consumed, line terminators included
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async file reader that streams file contents line-by-line
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read file contents line-by-line with async buffered I/O.
    /// Without fail_fast, errors are reported through `ReadStats::read_error`
    /// together with whatever lines were read before the failure.
    pub async fn read_file_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();
        let mut stats = ReadStats::default();
        let mut lines = Vec::new();

        debug!("Starting async read of file: {}", path.display());

        let outcome = match File::open(path).await {
            Ok(file) => {
                let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
                read_lines_into(&mut reader, &mut lines, &mut stats)
                    .await
                    .map_err(|e| describe_read_error(path, stats.lines_read + 1, &e))
            }
            Err(e) => Err(format!("Failed to open file {}: {}", path.display(), e)),
        };
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        if let Err(error_msg) = outcome {
            warn!("{}", error_msg);
            if self.config.fail_fast {
                anyhow::bail!(error_msg);
            }
            stats.read_error = Some(error_msg);
            return Ok((lines, stats));
        }

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );
        Ok((lines, stats))
    }
}

async fn read_lines_into(
    reader: &mut BufReader<File>,
    lines: &mut Vec<String>,
    stats: &mut ReadStats,
) -> io::Result<()> {
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        stats.bytes_read += n as u64;
        stats.lines_read += 1;
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        lines.push(line.strip_suffix('\r').unwrap_or(line).to_string());
    }
}

fn describe_read_error(path: &Path, line: u64, error: &io::Error) -> String {
    let what = match error.kind() {
        io::ErrorKind::InvalidData => "Invalid UTF-8",
        _ => "I/O error",
    };
    format!("{what} in {} at line {line}: {error}", path.display())
}

/// Read a document and join its lines into one single-spaced string
pub async fn read_document<P: AsRef<Path>>(file_path: P) -> Result<(String, ReadStats)> {
    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    let (lines, stats) = reader.read_file_lines(file_path).await?;
    Ok((join_lines(&lines), stats))
}

/// Load a stop word or abbreviation list, one entry per line
pub async fn read_word_list<P: AsRef<Path>>(file_path: P) -> Result<WordSet> {
    let path = file_path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words = WordSet::parse(&content);
    debug!("Loaded {} entries from {}", words.len(), path.display());
    Ok(words)
}
