// WHY: Batch runs write one summary file next to each document; a summary with a
// trailing newline is complete, so reruns can skip documents that are already done.

use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// File name suffix of generated summaries
pub const SUMMARY_SUFFIX: &str = "_summary.txt";

/// Generate the summary file path for a source document: `<stem>_summary.txt`
pub fn generate_summary_path(source_path: &Path) -> PathBuf {
    let mut summary_path = source_path.to_path_buf();
    let file_stem = summary_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();
    summary_path.set_file_name(format!("{file_stem}{SUMMARY_SUFFIX}"));
    summary_path
}

/// A summary file is complete once it ends with a newline; partial writes do not
pub async fn summary_is_complete<P: AsRef<Path>>(source_path: P) -> bool {
    ends_with_newline(&generate_summary_path(source_path.as_ref()))
        .await
        .unwrap_or(false)
}

// Only the last byte is read, summaries of large documents are never loaded
async fn ends_with_newline(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path).await?;
    if file.metadata().await?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] == b'\n')
}

/// Whether a document needs (re)summarizing in this run
pub async fn should_process_file<P: AsRef<Path>>(source_path: P, overwrite_all: bool) -> bool {
    overwrite_all || !summary_is_complete(source_path).await
}

/// Write a complete summary file (with trailing newline) for the given source
pub async fn write_summary_file_async<P: AsRef<Path>>(
    source_path: P,
    content: &str,
) -> Result<PathBuf, io::Error> {
    let summary_path = generate_summary_path(source_path.as_ref());
    tokio::fs::write(&summary_path, with_trailing_newline(content)).await?;
    Ok(summary_path)
}

fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    }
}
