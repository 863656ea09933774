// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose sources.
//!
//! A pose source yields one [`Frame`] per video frame, each holding the skeletons a pose
//! model detected in it. Any `Iterator<Item = Result<Frame>>` is a [`PoseSource`]; this
//! module provides an adapter for raw YOLO keypoint tensors ([`Keypoints`]) and a reader
//! for JSON-lines keypoint dumps ([`JsonLinesSource`]).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use ndarray::{Array3, ArrayView2, Axis};
use serde::Deserialize;

use crate::error::{PoseError, Result};
use crate::keypoint::{KEYPOINT_DIM, NUM_KEYPOINTS, Skeleton};

/// Skeletons detected in one video frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Frame index within the source.
    pub index: usize,
    /// Zero or more detected people.
    pub skeletons: Vec<Skeleton>,
}

impl Frame {
    #[must_use]
    pub const fn new(index: usize, skeletons: Vec<Skeleton>) -> Self {
        Self { index, skeletons }
    }
}

/// Anything that yields pose frames.
pub trait PoseSource: Iterator<Item = Result<Frame>> {}

impl<T> PoseSource for T where T: Iterator<Item = Result<Frame>> {}

/// Pose keypoints as emitted by a YOLO pose head.
#[derive(Debug, Clone)]
pub struct Keypoints {
    /// Raw keypoint data with shape (N, 17, 3): x, y, confidence per keypoint.
    pub data: Array3<f32>,
}

impl Keypoints {
    /// Wrap a keypoint tensor.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidInput`] unless the shape is `(N, 17, 3)`.
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let shape = data.shape();
        if shape[1] != NUM_KEYPOINTS || shape[2] != KEYPOINT_DIM {
            return Err(PoseError::InvalidInput(format!(
                "expected keypoints of shape (N, {NUM_KEYPOINTS}, {KEYPOINT_DIM}), got {shape:?}"
            )));
        }
        Ok(Self { data })
    }

    /// Number of detected people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Skeleton of the `i`-th person, if present.
    #[must_use]
    pub fn skeleton(&self, i: usize) -> Option<Skeleton> {
        (i < self.len()).then(|| to_skeleton(self.data.index_axis(Axis(0), i)))
    }

    /// All skeletons in detection order.
    #[must_use]
    pub fn skeletons(&self) -> Vec<Skeleton> {
        self.data.outer_iter().map(to_skeleton).collect()
    }

    /// Package the skeletons as a frame.
    #[must_use]
    pub fn into_frame(self, index: usize) -> Frame {
        Frame::new(index, self.skeletons())
    }
}

fn to_skeleton(person: ArrayView2<'_, f32>) -> Skeleton {
    let mut rows = [[0.0_f32; KEYPOINT_DIM]; NUM_KEYPOINTS];
    for (row, values) in rows.iter_mut().zip(person.outer_iter()) {
        for (dst, src) in row.iter_mut().zip(values.iter()) {
            *dst = *src;
        }
    }
    // Shape was checked in `Keypoints::new`.
    let joints = rows.map(Into::into);
    Skeleton::new(joints)
}

/// One line of a JSON-lines pose dump.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    frame: Option<usize>,
    #[serde(default)]
    skeletons: Vec<Vec<[f32; KEYPOINT_DIM]>>,
}

/// Reads pose frames from JSON lines.
///
/// Each non-blank line is one frame:
///
/// ```text
/// {"frame": 0, "skeletons": [[[x, y, conf], ... 17 rows], ...]}
/// ```
///
/// `frame` is optional and defaults to the frame's ordinal in the input.
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    next_index: usize,
    buf: String,
    done: bool,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            next_index: 0,
            buf: String::new(),
            done: false,
        }
    }

    fn parse_line(&mut self) -> Result<Frame> {
        let line = self.line;
        let record: FrameRecord =
            serde_json::from_str(&self.buf).map_err(|e| PoseError::ParseError {
                line,
                message: e.to_string(),
            })?;

        let skeletons = record
            .skeletons
            .iter()
            .enumerate()
            .map(|(i, rows)| {
                Skeleton::from_rows(rows).map_err(|e| match e {
                    PoseError::InvalidInput(msg) => {
                        PoseError::InvalidInput(format!("line {line}, skeleton {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let index = record.frame.unwrap_or(self.next_index);
        self.next_index = index.checked_add(1).ok_or_else(|| PoseError::ParseError {
            line,
            message: "frame index overflow".to_string(),
        })?;
        Ok(Frame::new(index, skeletons))
    }
}

impl<R: BufRead> Iterator for JsonLinesSource<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line += 1;
                    if self.buf.trim().is_empty() {
                        continue;
                    }
                    let frame = self.parse_line();
                    if frame.is_err() {
                        self.done = true;
                    }
                    return Some(frame);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Where pose frames are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A JSON-lines file.
    File(PathBuf),
}

impl Source {
    /// Open the source for reading.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::SourceError`] if the file cannot be opened.
    pub fn open(&self) -> Result<JsonLinesSource<Box<dyn BufRead>>> {
        let reader: Box<dyn BufRead> = match self {
            Self::Stdin => Box::new(BufReader::new(io::stdin())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    PoseError::SourceError(format!("cannot open {}: {e}", path.display()))
                })?;
                Box::new(BufReader::new(file))
            }
        };
        Ok(JsonLinesSource::new(reader))
    }

    /// Human-readable name for logs.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// `-` selects stdin, anything else is a file path.
impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}
