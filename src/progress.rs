// src/progress.rs
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::error::Result;

/// Lightweight progress reporting used by the per-item loops (PEP rows,
/// what's-new articles). The CLI draws a bar; everything else passes `NullProgress`.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Called when one item has been handled, whether it was kept or skipped.
    fn item_done(&mut self) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Terminal progress bar on stderr.
pub struct BarProgress {
    bar: ProgressBar,
    style: ProgressStyle,
}

impl BarProgress {
    pub fn new() -> Result<Self> {
        let style = ProgressStyle::with_template("{percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}]")?;
        Ok(Self { bar: ProgressBar::hidden(), style })
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total: usize) {
        self.bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        self.bar.set_style(self.style.clone());
    }

    fn item_done(&mut self) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}
