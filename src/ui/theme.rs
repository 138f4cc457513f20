//! Visual theme.

use console::Style;

/// Styles for terminal output.
///
/// `console` handles capability detection itself: on a non-TTY stream or
/// under `NO_COLOR`, styles render as plain text.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Success lines (green).
    pub success: Style,
    /// Error lines (red bold).
    pub error: Style,
    /// Secondary detail (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }
}
