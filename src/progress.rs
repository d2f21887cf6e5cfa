// Copyright 2026 dentist-scan contributors
// SPDX-License-Identifier: Apache-2.0

//! Console progress bar for the per-page extraction loop.

use indicatif::{ProgressBar, ProgressStyle};

/// A bar that advances once per extracted record.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Create a bar sized to the number of detail pages to visit.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("[{bar:60}] {percent}% ({pos}/{len})")
                .expect("static template is valid")
                .progress_chars("█-"),
        );
        Self { bar }
    }

    /// One more record done.
    pub fn record_done(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the console.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
