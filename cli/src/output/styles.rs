//! Report stylesheet built on owo-colors.

use std::fmt;

use owo_colors::Style;

/// Outcome marker printed in front of a result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pass,
    Warn,
    Fail,
}

impl Mark {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warn => "⚠",
            Self::Fail => "✗",
        }
    }
}

/// Styles for each role in the diagnosis report. Plain by default.
#[derive(Default, Clone)]
pub struct Styles {
    pub pass: Style,
    pub warn: Style,
    pub fail: Style,
    /// Paths, patterns and other secondary detail.
    pub muted: Style,
    /// `STEP n` and `Option n` headings.
    pub heading: Style,
    /// Opening and closing banners.
    pub banner: Style,
}

impl Styles {
    /// Terminal palette.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            pass: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red().bold(),
            muted: Style::new().dimmed(),
            heading: Style::new().bold(),
            banner: Style::new().bold().cyan(),
        }
    }

    /// The marker symbol in its outcome color.
    #[must_use]
    pub fn mark(&self, mark: Mark) -> impl fmt::Display {
        let style = match mark {
            Mark::Pass => self.pass,
            Mark::Warn => self.warn,
            Mark::Fail => self.fail,
        };
        style.style(mark.symbol())
    }
}
