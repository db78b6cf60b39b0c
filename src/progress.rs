use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Console progress for batch summarization, silent when disabled
#[derive(Clone, Default)]
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Reporter that never draws anything
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Reporter with a bar sized for `total_files` documents
    pub fn for_files(total_files: u64) -> Result<Self> {
        let pb = ProgressBar::new(total_files);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")?
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Ok(Self {
            progress_bar: Some(pb),
        })
    }

    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Summarized: {filename}"));
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
