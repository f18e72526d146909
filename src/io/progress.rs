//! Terminal progress for the random pass

use crate::algorithm::orchestrator::{GenerationObserver, GenerationReport};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the attempt budget
///
/// The bar length is set lazily from the first attempt, since the ceiling
/// depends on the catalog.
pub struct AttemptProgress {
    bar: ProgressBar,
    palette_candidates: usize,
}

impl Default for AttemptProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptProgress {
    /// Progress bar drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Progress bar that never draws, for tests and quiet runs
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(ATTEMPT_STYLE.clone());
        bar.set_prefix("outfits");
        Self {
            bar,
            palette_candidates: 0,
        }
    }

    /// Attempts recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Attempt ceiling currently shown
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl GenerationObserver for AttemptProgress {
    fn on_palette_pass(&mut self, accepted: usize) {
        self.palette_candidates = accepted;
        self.bar.set_message(format!("{accepted} from palettes"));
    }

    fn on_attempt(&mut self, attempt: usize, ceiling: usize, accepted: usize) {
        if self.bar.length() != Some(ceiling as u64) {
            self.bar.set_length(ceiling as u64);
        }
        self.bar.set_position(attempt as u64);
        self.bar.set_message(format!(
            "{} from palettes, {accepted} random",
            self.palette_candidates
        ));
    }

    fn on_finish(&mut self, report: &GenerationReport) {
        if report.cancelled {
            self.bar.abandon_with_message("cancelled");
        } else {
            self.bar.finish_and_clear();
        }
    }
}
