//! UI/Progress presentation layer
//!
//! This module handles:
//! - Spinners for long-running stages (graph build)
//! - A file progress bar while copying
//! - Silent progress for tests
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! split pipeline does not care whether a terminal is attached.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Show a spinner for a stage of unknown length
    fn start_stage(&mut self, message: &str);

    /// Stop the current spinner with a success message
    fn finish_stage(&mut self, message: &str);

    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Advance file progress, showing the file being processed
    fn update_file(&mut self, file_path: &str);

    /// Finish file progress with a success message
    fn finish_files(&mut self, message: &str);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a spinner and a file progress bar
#[derive(Default)]
pub struct InteractiveProgressReporter {
    stage_pb: Option<ProgressBar>,
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_stage(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(SPINNER_TICKS),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.stage_pb = Some(pb);
    }

    fn finish_stage(&mut self, message: &str) {
        if let Some(pb) = self.stage_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }

    fn init_file_progress(&mut self, total_files: u64) {
        let file_style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let display_path = if file_path.chars().count() > 50 {
                let tail: String = file_path
                    .chars()
                    .rev()
                    .take(47)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("...{tail}")
            } else {
                file_path.to_string()
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_files(&mut self, message: &str) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_with_message(message.to_string());
        }
    }

    fn abandon(&mut self) {
        if let Some(pb) = self.stage_pb.take() {
            pb.abandon();
        }
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation used in tests.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_stage(&mut self, _message: &str) {}

    fn finish_stage(&mut self, _message: &str) {}

    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish_files(&mut self, _message: &str) {}

    fn abandon(&mut self) {}
}
