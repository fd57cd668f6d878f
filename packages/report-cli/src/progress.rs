use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use video_report::ProgressSink;

/// Create a progress bar for batch extraction
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {msg}")
        .map(|style| style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏").progress_chars("█▓░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Feeds aggregator progress into a progress bar.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for BarProgress {
    fn on_progress(&mut self, completed: usize, total: usize, url: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed as u64);
        self.bar.set_message(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_drives_bar() {
        let bar = ProgressBar::hidden();
        let mut progress = BarProgress::new(bar.clone());

        progress.on_progress(2, 5, "https://www.tiktok.com/@a/video/2");

        assert_eq!(bar.position(), 2);
        assert_eq!(bar.length(), Some(5));
        assert_eq!(bar.message(), "https://www.tiktok.com/@a/video/2");

        progress.finish();
        assert!(bar.is_finished());
    }
}
