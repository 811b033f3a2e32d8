//! Batch progress reporting for multi-file runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for batch word-list processing
///
/// A single batch bar appears when more than one file is queued; single-file
/// runs finish too quickly for a bar to be anything but noise.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for a known file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count <= 1 {
            return;
        }

        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        self.batch_bar = Some(bar);
    }

    /// Record one completed file
    pub fn file_done(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish();
        }
    }
}
