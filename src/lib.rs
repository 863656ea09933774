// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # SafePose
//!
//! Arm-posture safety heuristics on top of YOLO pose keypoints.
//!
//! A pose model (for example `yolov8n-pose` exported to ONNX) yields 17 COCO keypoints per
//! detected person. This crate measures the elbow angle of each person's arm and flags
//! postures that risk over-extension or strain. Model inference, video capture and
//! drawing stay with the host application.
//!
//! ## Quick Start
//!
//! ```rust
//! use safepose::{Severity, Skeleton, classify_posture};
//!
//! fn main() -> safepose::Result<()> {
//!     // One person's keypoints in COCO order: [x, y, confidence].
//!     let mut rows = [[0.0_f32, 0.0, 0.9]; 17];
//!     rows[6] = [100.0, 100.0, 0.95]; // right shoulder
//!     rows[8] = [100.0, 200.0, 0.95]; // right elbow
//!     rows[10] = [100.0, 300.0, 0.95]; // right wrist, arm fully straight
//!
//!     let verdict = classify_posture(&Skeleton::from_rows(&rows)?)?;
//!     assert_eq!(verdict.severity, Severity::OverReach);
//!     println!("{verdict}"); // RISK: Over-Reach (180deg)
//!     Ok(())
//! }
//! ```
//!
//! ## Severities
//!
//! | Severity | Condition | Color |
//! |----------|-----------|-------|
//! | `InsufficientConfidence` | any arm keypoint below 0.5 confidence | white |
//! | `OverReach` | elbow angle > 160° | red |
//! | `TightGrip` | elbow angle < 50° | orange |
//! | `Safe` | otherwise | green |
//!
//! Thresholds and the examined arm can be changed through [`ClassifierConfig`].
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`keypoint`] | COCO keypoint layout, [`Joint`] and [`Skeleton`] |
//! | [`geometry`] | [`interior_angle`] calculation |
//! | [`posture`] | [`PostureClassifier`], rule table and [`PostureVerdict`] |
//! | [`config`] | [`ClassifierConfig`] builder |
//! | [`source`] | [`PoseSource`] trait, [`Keypoints`] tensor adapter, JSON-lines reader |
//! | [`render`] | [`Renderer`] trait and [`ConsoleRenderer`] |
//! | [`monitor`] | [`PostureMonitor`] frame loop and [`Summary`] |
//! | [`error`] | Error types ([`PoseError`], [`Result`]) |

// Modules
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keypoint;
pub mod monitor;
pub mod posture;
pub mod render;
pub mod source;

// Re-export main types for convenience
pub use color::Color;
pub use config::ClassifierConfig;
pub use error::{PoseError, Result};
pub use geometry::interior_angle;
pub use keypoint::{Arm, Joint, KeypointKind, Point, Skeleton};
pub use monitor::{FrameReport, PostureMonitor, Summary};
pub use posture::{PostureClassifier, PostureRule, PostureVerdict, Severity, classify_posture};
pub use render::{ConsoleRenderer, Renderer};
pub use source::{Frame, JsonLinesSource, Keypoints, PoseSource, Source};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
