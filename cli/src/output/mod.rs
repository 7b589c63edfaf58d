//! Output formatting module

pub mod human;
pub mod reporter;
pub mod styles;

use console::Term;
pub use human::HumanRenderer;
pub use reporter::TerminalReporter;
pub use styles::{Mark, Styles};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether stderr is a TTY (progress goes there).
    pub stderr_is_tty: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let styles = if use_colors {
            Styles::colored()
        } else {
            Styles::default()
        };

        Self {
            styles,
            is_tty,
            stderr_is_tty: Term::stderr().is_term(),
        }
    }

    /// Context with no colors and no progress, for rendering into buffers.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            styles: Styles::default(),
            is_tty: false,
            stderr_is_tty: false,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.stderr_is_tty
    }
}
