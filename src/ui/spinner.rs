//! Progress spinners for blocking backend queries.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::Theme;

/// Spinner shown while one backend query is in flight.
///
/// Consumed by [`done`](Self::done) or [`fail`](Self::fail) so a query can
/// never leave a spinner ticking behind it.
pub struct TaskSpinner {
    bar: ProgressBar,
    theme: Theme,
}

impl TaskSpinner {
    /// Create a visible spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.magenta} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: Theme::new(),
        }
    }

    /// Create a spinner that never draws (quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: Theme::new(),
        }
    }

    /// Finish with a success line.
    pub fn done(self, message: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(
            self.theme
                .success
                .apply_to(format!("✓ {message}"))
                .to_string(),
        );
    }

    /// Finish with a failure line; the error itself is reported upstream.
    pub fn fail(self, message: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(
            self.theme
                .error
                .apply_to(format!("✗ {message}"))
                .to_string(),
        );
    }
}
