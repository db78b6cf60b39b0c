use anyhow::Result;
use futures::stream::{Stream, StreamExt};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::incremental::SUMMARY_SUFFIX;

/// Configuration for document discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Result of document discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Discovers all `**/*.txt` documents under the given root directory, skipping
/// summaries generated by earlier runs. Returns an async stream of validated paths.
pub fn discover_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    let root_path = root_dir.as_ref().to_path_buf();

    futures::stream::unfold(
        DiscoveryState::new(root_path, config),
        |mut state| async move { state.next_file().await.map(|result| (result, state)) },
    )
}

/// True for generated `<stem>_summary.txt` files
pub fn is_generated_summary(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SUMMARY_SUFFIX))
}

/// Internal state for file discovery iteration
struct DiscoveryState {
    root_dir: PathBuf,
    config: DiscoveryConfig,
    glob_iter: Option<glob::Paths>,
}

impl DiscoveryState {
    fn new(root_dir: PathBuf, config: DiscoveryConfig) -> Self {
        Self {
            root_dir,
            config,
            glob_iter: None,
        }
    }

    async fn next_file(&mut self) -> Option<Result<FileValidation>> {
        if self.glob_iter.is_none() {
            let pattern = format!("{}/**/*.txt", self.root_dir.display());
            debug!("Starting document discovery with pattern: {}", pattern);

            match glob(&pattern) {
                Ok(paths) => self.glob_iter = Some(paths),
                Err(e) => return Some(Err(anyhow::anyhow!("Failed to create glob pattern: {}", e))),
            }
        }

        loop {
            let glob_iter = self.glob_iter.as_mut()?;
            match glob_iter.next()? {
                Ok(path) if is_generated_summary(&path) => {
                    debug!("Skipping generated summary: {}", path.display());
                }
                Ok(path) => {
                    debug!("Found document: {}", path.display());
                    return Some(self.validate_file(path).await);
                }
                Err(e) => {
                    let error_msg = format!("Glob iteration error: {e}");
                    warn!("{}", error_msg);
                    if self.config.fail_fast {
                        return Some(Err(anyhow::anyhow!(error_msg)));
                    }
                }
            }
        }
    }

    async fn validate_file(&self, path: PathBuf) -> Result<FileValidation> {
        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(FileValidation { path, error: None }),
            Ok(_) => {
                let error = format!("Path is not a file: {}", path.display());
                warn!("{}", error);
                Ok(FileValidation {
                    path,
                    error: Some(error),
                })
            }
            Err(e) => {
                let error = format!("Cannot access file {}: {}", path.display(), e);
                warn!("{}", error);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error));
                }
                Ok(FileValidation {
                    path,
                    error: Some(error),
                })
            }
        }
    }
}

/// Collect all discovered documents into a Vec, sorted by path for stable output
pub async fn collect_discovered_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(discover_files(root_dir, config));

    while let Some(result) = stream.next().await {
        files.push(result?);
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;
    if invalid_count > 0 {
        warn!("Found {} documents with validation issues", invalid_count);
    }
    info!("Document discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}
