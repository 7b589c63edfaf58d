//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Application services emit step events through the port; this type turns
//! them into a single stderr spinner that is replaced on every step.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// Stderr spinner reporter.
///
/// Nothing is drawn when stderr is not a terminal, so redirected runs keep a
/// clean stdout report and an empty stderr.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    steps: Cell<usize>,
    current: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            steps: Cell::new(0),
            current: RefCell::new(None),
        }
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {prefix:.dim} {msg}") {
            pb.set_style(style.tick_strings(TICKS));
        }
        pb.set_prefix(format!("[{}]", self.steps.get()));
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.show_progress() {
            return;
        }
        self.steps.set(self.steps.get() + 1);
        let mut current = self.current.borrow_mut();
        if let Some(pb) = current.take() {
            pb.finish_and_clear();
        }
        *current = Some(self.spinner(message));
    }

    fn success(&self, message: &str) {
        let Some(pb) = self.current.borrow_mut().take() else {
            return;
        };
        if let Ok(style) = ProgressStyle::with_template("  {prefix:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_prefix("✓");
        pb.finish_with_message(format!("{message} ({} steps)", self.steps.get()));
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        if let Some(pb) = self.current.get_mut().take() {
            pb.finish_and_clear();
        }
    }
}
