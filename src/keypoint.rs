// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! COCO-Pose keypoint layout and skeleton types.
//!
//! A [`Skeleton`] holds the 17 keypoints a YOLO pose model predicts for one person,
//! addressed by [`KeypointKind`] instead of raw tensor indices.

use std::fmt;

use crate::error::{PoseError, Result};

/// Number of keypoints in the COCO-Pose layout.
pub const NUM_KEYPOINTS: usize = 17;

/// Values per keypoint: x, y, confidence.
pub const KEYPOINT_DIM: usize = 3;

/// Anatomical landmark in COCO-Pose order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointKind {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointKind {
    /// All keypoints in layout order.
    pub const ALL: [Self; NUM_KEYPOINTS] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Position of this keypoint in the model output.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a keypoint by its position in the model output.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_KEYPOINTS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Snake-case name as used in COCO annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl fmt::Display for KeypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Body side used to pick an arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arm {
    Left,
    #[default]
    Right,
}

impl Arm {
    /// Shoulder, elbow and wrist keypoints of this arm.
    #[must_use]
    pub const fn keypoints(self) -> [KeypointKind; 3] {
        match self {
            Self::Left => [
                KeypointKind::LeftShoulder,
                KeypointKind::LeftElbow,
                KeypointKind::LeftWrist,
            ],
            Self::Right => [
                KeypointKind::RightShoulder,
                KeypointKind::RightElbow,
                KeypointKind::RightWrist,
            ],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Arm {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(PoseError::ConfigError(format!(
                "invalid arm '{s}', expected one of: left, right"
            ))),
        }
    }
}

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One keypoint sample: pixel position and detection confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Joint {
    /// X coordinate in pixels.
    pub x: f32,
    /// Y coordinate in pixels.
    pub y: f32,
    /// Detection confidence (0.0 to 1.0).
    pub confidence: f32,
}

impl Joint {
    #[must_use]
    pub const fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// Position without the confidence.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check that position and confidence are all finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.confidence.is_finite()
    }
}

impl From<[f32; 3]> for Joint {
    fn from(row: [f32; 3]) -> Self {
        Self::new(row[0], row[1], row[2])
    }
}

/// The 17 keypoints of one detected person in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    joints: [Joint; NUM_KEYPOINTS],
}

impl Skeleton {
    /// Create a skeleton from joints already in COCO-Pose order.
    #[must_use]
    pub const fn new(joints: [Joint; NUM_KEYPOINTS]) -> Self {
        Self { joints }
    }

    /// Build a skeleton from `[x, y, confidence]` rows.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidInput`] unless exactly 17 rows are given.
    pub fn from_rows(rows: &[[f32; KEYPOINT_DIM]]) -> Result<Self> {
        if rows.len() != NUM_KEYPOINTS {
            return Err(PoseError::InvalidInput(format!(
                "expected {NUM_KEYPOINTS} keypoints, got {}",
                rows.len()
            )));
        }
        let mut joints = [Joint::default(); NUM_KEYPOINTS];
        for (joint, row) in joints.iter_mut().zip(rows) {
            *joint = Joint::from(*row);
        }
        Ok(Self { joints })
    }

    /// Build a skeleton from a row-major `17 * 3` slice.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidInput`] if the slice length is not `17 * 3`.
    pub fn from_flat(values: &[f32]) -> Result<Self> {
        if values.len() != NUM_KEYPOINTS * KEYPOINT_DIM {
            return Err(PoseError::InvalidInput(format!(
                "expected {} values ({NUM_KEYPOINTS} keypoints x {KEYPOINT_DIM}), got {}",
                NUM_KEYPOINTS * KEYPOINT_DIM,
                values.len()
            )));
        }
        let mut joints = [Joint::default(); NUM_KEYPOINTS];
        for (joint, chunk) in joints.iter_mut().zip(values.chunks_exact(KEYPOINT_DIM)) {
            *joint = Joint::new(chunk[0], chunk[1], chunk[2]);
        }
        Ok(Self { joints })
    }

    /// Get a single keypoint.
    #[must_use]
    pub const fn joint(&self, kind: KeypointKind) -> Joint {
        self.joints[kind.index()]
    }

    /// Replace a single keypoint, returning the updated skeleton.
    #[must_use]
    pub const fn with_joint(mut self, kind: KeypointKind, joint: Joint) -> Self {
        self.joints[kind.index()] = joint;
        self
    }

    /// Shoulder, elbow and wrist samples for the given arm.
    #[must_use]
    pub const fn arm(&self, arm: Arm) -> [Joint; 3] {
        let [shoulder, elbow, wrist] = arm.keypoints();
        [self.joint(shoulder), self.joint(elbow), self.joint(wrist)]
    }

    /// All joints in layout order.
    #[must_use]
    pub const fn joints(&self) -> &[Joint; NUM_KEYPOINTS] {
        &self.joints
    }
}
