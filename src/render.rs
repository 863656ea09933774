// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Verdict renderers.
//!
//! A [`Renderer`] consumes the verdicts of each frame. Drawing onto video frames is left
//! to the host application; [`ConsoleRenderer`] prints colored text lines instead.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::Result;
use crate::monitor::{FrameReport, Summary};
use crate::posture::{PostureVerdict, Severity};

/// Consumer of per-frame verdicts.
pub trait Renderer {
    /// Present the verdicts of one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render(&mut self, report: &FrameReport) -> Result<()>;

    /// Called once after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn finish(&mut self, _summary: &Summary) -> Result<()> {
        Ok(())
    }
}

/// Prints one line per frame with each verdict in its severity color.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    show_empty: bool,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            show_empty: true,
        }
    }

    /// Whether frames without people produce a line.
    #[must_use]
    pub const fn with_show_empty(mut self, show_empty: bool) -> Self {
        self.show_empty = show_empty;
        self
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn paint(verdict: &PostureVerdict) -> String {
    let color = verdict.color();
    let text = verdict.label.truecolor(color.0, color.1, color.2);
    if verdict.severity.is_risk() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format one frame as `frame N: <verdicts>, <fps> FPS`.
#[must_use]
pub fn format_report(report: &FrameReport) -> String {
    let verdicts = if report.verdicts.is_empty() {
        "(no people)".to_string()
    } else {
        report
            .verdicts
            .iter()
            .map(paint)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let fps = report
        .fps
        .map_or_else(String::new, |fps| format!(", {fps:.1} FPS"));
    format!("frame {}: {verdicts}{fps}", report.index)
}

/// Format run totals, e.g. `3 frames, 4 people: 1 over-reach, 1 tight-grip, 2 safe`.
#[must_use]
pub fn format_summary(summary: &Summary) -> String {
    let counts = Severity::ALL
        .iter()
        .filter(|s| summary.count(**s) > 0)
        .map(|s| format!("{} {s}", summary.count(*s)))
        .collect::<Vec<_>>();
    let mut line = format!(
        "{} {}, {} {}",
        summary.frames,
        if summary.frames == 1 { "frame" } else { "frames" },
        summary.skeletons,
        if summary.skeletons == 1 { "person" } else { "people" }
    );
    if !counts.is_empty() {
        line.push_str(": ");
        line.push_str(&counts.join(", "));
    }
    line
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, report: &FrameReport) -> Result<()> {
        if report.verdicts.is_empty() && !self.show_empty {
            return Ok(());
        }
        writeln!(self.out, "{}", format_report(report))?;
        Ok(())
    }

    fn finish(&mut self, _summary: &Summary) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
