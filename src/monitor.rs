// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame-by-frame posture monitoring.
//!
//! [`PostureMonitor`] pulls frames from a [`PoseSource`], classifies every skeleton and
//! hands the verdicts to a [`Renderer`], keeping running totals for a final [`Summary`].

use std::collections::HashMap;
use std::time::Instant;

use crate::error::Result;
use crate::posture::{PostureClassifier, PostureVerdict, Severity};
use crate::render::Renderer;
use crate::source::{Frame, PoseSource};

/// Verdicts for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Index of the source frame.
    pub index: usize,
    /// One verdict per skeleton, in detection order.
    pub verdicts: Vec<PostureVerdict>,
    /// Processing rate measured since the previous frame.
    pub fps: Option<f64>,
}

impl FrameReport {
    /// Check whether any skeleton in the frame was flagged.
    #[must_use]
    pub fn has_risk(&self) -> bool {
        self.verdicts.iter().any(|v| v.severity.is_risk())
    }
}

/// Totals over a monitoring run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Frames processed.
    pub frames: usize,
    /// Skeletons classified.
    pub skeletons: usize,
    counts: HashMap<Severity, usize>,
}

impl Summary {
    /// Number of verdicts with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Number of risk verdicts (over-reach and tight grip).
    #[must_use]
    pub fn risks(&self) -> usize {
        self.count(Severity::OverReach) + self.count(Severity::TightGrip)
    }

    fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.skeletons += report.verdicts.len();
        for verdict in &report.verdicts {
            *self.counts.entry(verdict.severity).or_insert(0) += 1;
        }
    }
}

/// Drives a classifier over a stream of pose frames.
#[derive(Debug, Clone)]
pub struct PostureMonitor {
    classifier: PostureClassifier,
    last_frame: Option<Instant>,
    summary: Summary,
}

impl PostureMonitor {
    #[must_use]
    pub fn new(classifier: PostureClassifier) -> Self {
        Self {
            classifier,
            last_frame: None,
            summary: Summary::default(),
        }
    }

    /// Classify every skeleton in `frame`.
    ///
    /// # Errors
    ///
    /// Returns the first classification error; the frame is not counted in the summary.
    pub fn process(&mut self, frame: &Frame) -> Result<FrameReport> {
        let verdicts = frame
            .skeletons
            .iter()
            .map(|skeleton| self.classifier.classify(skeleton))
            .collect::<Result<Vec<_>>>()?;

        let now = Instant::now();
        let fps = self.last_frame.and_then(|prev| {
            let secs = now.duration_since(prev).as_secs_f64();
            (secs > 0.0).then(|| 1.0 / secs)
        });
        self.last_frame = Some(now);

        let report = FrameReport {
            index: frame.index,
            verdicts,
            fps,
        };
        self.summary.record(&report);
        Ok(report)
    }

    /// Process `source` to exhaustion, rendering each frame.
    ///
    /// # Errors
    ///
    /// Stops at the first source, classification or rendering error.
    pub fn run<S, R>(&mut self, source: S, renderer: &mut R) -> Result<Summary>
    where
        S: PoseSource,
        R: Renderer + ?Sized,
    {
        for frame in source {
            let report = self.process(&frame?)?;
            renderer.render(&report)?;
        }
        renderer.finish(&self.summary)?;
        Ok(self.summary.clone())
    }

    /// Totals so far.
    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }
}
