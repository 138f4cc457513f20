//! Terminal output.
//!
//! Backend queries block on external processes, so each one runs under a
//! spinner; everything else is a styled line. [`Reporter`] is the single
//! entry point — it owns the output mode, hands out [`spinner::TaskSpinner`]s
//! for long operations, and prints the final success or error lines.

pub mod spinner;
pub mod theme;

pub use spinner::TaskSpinner;
pub use theme::Theme;

/// How much terminal output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Errors only.
    Quiet,
    /// Spinners and result lines.
    Normal,
    /// Normal plus dim detail lines.
    Verbose,
}

/// Terminal reporter for progress and results.
#[derive(Debug, Clone)]
pub struct Reporter {
    mode: OutputMode,
    theme: Theme,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start a spinner for a blocking backend query.
    pub fn task(&self, message: &str) -> TaskSpinner {
        if self.mode == OutputMode::Quiet {
            TaskSpinner::hidden()
        } else {
            TaskSpinner::new(message)
        }
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", self.theme.success.apply_to(format!("✓ {message}")));
        }
    }

    /// Print a dim detail line, verbose mode only.
    pub fn detail(&self, message: &str) {
        if self.mode == OutputMode::Verbose {
            println!("{}", self.theme.dim.apply_to(message));
        }
    }

    /// Print an error line to stderr. Never suppressed.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.theme.error.apply_to(message));
    }
}
