//! Progress display for the grid auto-size search

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SIZING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting which grid size is being attempted
pub struct SizingProgress {
    bar: ProgressBar,
    attempts: usize,
}

impl Default for SizingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SizingProgress {
    /// Create a visible spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SIZING_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar, attempts: 0 }
    }

    /// Create a spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            attempts: 0,
        }
    }

    /// Report the start of an attempt at `size`
    pub fn start_attempt(&mut self, size: usize) {
        self.attempts += 1;
        self.bar
            .set_message(format!("Generating puzzle of size {size} (attempt {})", self.attempts));
    }

    /// Number of attempts reported so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Current status message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
