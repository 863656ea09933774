// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Arm posture classification.
//!
//! The classifier gates on keypoint confidence, measures the elbow angle
//! (shoulder → elbow → wrist) and maps it to a [`Severity`] through an ordered rule table.

use std::fmt;

use crate::color::Color;
use crate::config::ClassifierConfig;
use crate::error::{PoseError, Result};
use crate::geometry::interior_angle;
use crate::keypoint::{Arm, Point, Skeleton};

/// Risk category assigned to a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Arm keypoints are not reliable enough to assess.
    InsufficientConfidence,
    /// Arm nearly straight: risk of over-extension while lifting.
    OverReach,
    /// Acute elbow flexion: risk of strain or awkward grip.
    TightGrip,
    /// Elbow angle within the comfortable range.
    Safe,
}

impl Severity {
    /// All severities, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::InsufficientConfidence,
        Self::OverReach,
        Self::TightGrip,
        Self::Safe,
    ];

    /// Display color for this severity.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::InsufficientConfidence => Color::WHITE,
            Self::OverReach => Color::RED,
            Self::TightGrip => Color::ORANGE,
            Self::Safe => Color::GREEN,
        }
    }

    /// Whether this severity flags a risk.
    #[must_use]
    pub const fn is_risk(self) -> bool {
        matches!(self, Self::OverReach | Self::TightGrip)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientConfidence => "insufficient-confidence",
            Self::OverReach => "over-reach",
            Self::TightGrip => "tight-grip",
            Self::Safe => "safe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one skeleton.
#[derive(Debug, Clone, PartialEq)]
pub struct PostureVerdict {
    /// Human-readable label, e.g. `RISK: Over-Reach (170deg)`.
    pub label: String,
    /// Risk category.
    pub severity: Severity,
    /// Measured elbow angle in degrees, `None` when the confidence gate tripped before
    /// any angle was computed.
    pub angle: Option<f32>,
}

impl PostureVerdict {
    /// Verdict for an arm whose keypoints are not confident enough.
    #[must_use]
    pub fn analyzing() -> Self {
        Self {
            label: "Analyzing...".to_string(),
            severity: Severity::InsufficientConfidence,
            angle: None,
        }
    }

    /// Verdict for a measured angle.
    ///
    /// A custom rule may map an angle to [`Severity::InsufficientConfidence`]. That
    /// verdict reads `Analyzing...` like a gated one but keeps the measured angle.
    #[must_use]
    pub fn measured(severity: Severity, angle: f32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let degrees = angle.round() as i32;
        let label = match severity {
            Severity::OverReach => format!("RISK: Over-Reach ({degrees}deg)"),
            Severity::TightGrip => format!("RISK: Tight Grip ({degrees}deg)"),
            Severity::Safe => format!("Safe Posture ({degrees}deg)"),
            Severity::InsufficientConfidence => "Analyzing...".to_string(),
        };
        Self {
            label,
            severity,
            angle: Some(angle),
        }
    }

    /// Display color of the verdict.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.severity.color()
    }
}

impl fmt::Display for PostureVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// How a rule compares the measured angle with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Matches angles strictly greater than the threshold.
    Above,
    /// Matches angles strictly less than the threshold.
    Below,
}

/// One entry of the angle rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureRule {
    pub comparison: Comparison,
    /// Threshold in degrees.
    pub threshold: f32,
    pub severity: Severity,
}

impl PostureRule {
    #[must_use]
    pub const fn above(threshold: f32, severity: Severity) -> Self {
        Self {
            comparison: Comparison::Above,
            threshold,
            severity,
        }
    }

    #[must_use]
    pub const fn below(threshold: f32, severity: Severity) -> Self {
        Self {
            comparison: Comparison::Below,
            threshold,
            severity,
        }
    }

    /// Check whether `angle` falls under this rule.
    #[must_use]
    pub fn matches(&self, angle: f32) -> bool {
        match self.comparison {
            Comparison::Above => angle > self.threshold,
            Comparison::Below => angle < self.threshold,
        }
    }
}

/// Map an angle to a severity. The first matching rule wins; no match is [`Severity::Safe`].
#[must_use]
pub fn evaluate_rules(rules: &[PostureRule], angle: f32) -> Severity {
    rules
        .iter()
        .find(|rule| rule.matches(angle))
        .map_or(Severity::Safe, |rule| rule.severity)
}

/// Stateless arm posture classifier.
///
/// # Example
///
/// ```rust
/// use safepose::{ClassifierConfig, PostureClassifier, Severity, Skeleton};
///
/// let classifier = PostureClassifier::new(ClassifierConfig::default()).unwrap();
/// let mut rows = [[0.0_f32, 0.0, 0.9]; 17];
/// rows[6] = [100.0, 100.0, 0.9]; // right shoulder
/// rows[8] = [100.0, 200.0, 0.9]; // right elbow
/// rows[10] = [200.0, 200.0, 0.9]; // right wrist
/// let skeleton = Skeleton::from_rows(&rows).unwrap();
///
/// let verdict = classifier.classify(&skeleton).unwrap();
/// assert_eq!(verdict.severity, Severity::Safe);
/// ```
#[derive(Debug, Clone)]
pub struct PostureClassifier {
    min_confidence: f32,
    arm: Arm,
    rules: Vec<PostureRule>,
}

impl Default for PostureClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl PostureClassifier {
    /// Create a classifier from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ConfigError`] if the configuration is invalid.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            min_confidence: config.min_confidence,
            arm: config.arm,
            rules: vec![
                PostureRule::above(config.over_reach_deg, Severity::OverReach),
                PostureRule::below(config.tight_grip_deg, Severity::TightGrip),
            ],
        }
    }

    /// Replace the angle rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<PostureRule>) -> Self {
        self.rules = rules;
        self
    }

    /// The ordered angle rules.
    #[must_use]
    pub fn rules(&self) -> &[PostureRule] {
        &self.rules
    }

    /// Arm this classifier examines.
    #[must_use]
    pub const fn arm(&self) -> Arm {
        self.arm
    }

    /// Classify one skeleton.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidInput`] if an arm keypoint has a non-finite coordinate
    /// or confidence.
    pub fn classify(&self, skeleton: &Skeleton) -> Result<PostureVerdict> {
        self.classify_using(skeleton, interior_angle)
    }

    /// Classify one skeleton with a caller-supplied angle function.
    ///
    /// `angle_fn` receives `(shoulder, elbow, wrist)` and is not called when the
    /// confidence gate trips.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidInput`] if an arm keypoint is non-finite or
    /// `angle_fn` returns a non-finite angle.
    pub fn classify_using<F>(&self, skeleton: &Skeleton, angle_fn: F) -> Result<PostureVerdict>
    where
        F: FnOnce(Point, Point, Point) -> f32,
    {
        let joints = skeleton.arm(self.arm);
        for (kind, joint) in self.arm.keypoints().iter().zip(&joints) {
            if !joint.is_finite() {
                return Err(PoseError::InvalidInput(format!(
                    "{kind} has non-finite values ({}, {}, {})",
                    joint.x, joint.y, joint.confidence
                )));
            }
        }

        if joints.iter().any(|j| j.confidence < self.min_confidence) {
            return Ok(PostureVerdict::analyzing());
        }

        let [shoulder, elbow, wrist] = joints;
        let angle = angle_fn(shoulder.point(), elbow.point(), wrist.point());
        if !angle.is_finite() {
            return Err(PoseError::InvalidInput(format!(
                "{} elbow angle is not finite",
                self.arm
            )));
        }

        Ok(PostureVerdict::measured(evaluate_rules(&self.rules, angle), angle))
    }
}

/// Classify one skeleton's right arm with the default policy.
///
/// # Errors
///
/// Returns [`PoseError::InvalidInput`] if a right-arm keypoint is non-finite.
pub fn classify_posture(skeleton: &Skeleton) -> Result<PostureVerdict> {
    PostureClassifier::default().classify(skeleton)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoint::{Joint, KeypointKind, NUM_KEYPOINTS};
    use std::cell::Cell;

    /// Skeleton whose right elbow sits at (200, 200) with the given interior angle.
    fn right_arm_at(angle_deg: f32, confidence: f32) -> Skeleton {
        let elbow = Point::new(200.0, 200.0);
        let shoulder = Point::new(elbow.x, elbow.y - 100.0);
        // Shoulder points straight up (-90 deg); rotate the forearm from there.
        let forearm = (-90.0_f32 + angle_deg).to_radians();
        let wrist = Point::new(elbow.x + 80.0 * forearm.cos(), elbow.y + 80.0 * forearm.sin());

        Skeleton::new([Joint::new(0.0, 0.0, 0.9); NUM_KEYPOINTS])
            .with_joint(KeypointKind::RightShoulder, Joint::new(shoulder.x, shoulder.y, confidence))
            .with_joint(KeypointKind::RightElbow, Joint::new(elbow.x, elbow.y, confidence))
            .with_joint(KeypointKind::RightWrist, Joint::new(wrist.x, wrist.y, confidence))
    }

    #[test]
    fn test_over_reach() {
        let verdict = classify_posture(&right_arm_at(170.0, 0.9)).unwrap();
        assert_eq!(verdict.severity, Severity::OverReach);
        assert!(verdict.label.contains("170"), "{}", verdict.label);
        assert_eq!(verdict.color(), Color::RED);
    }

    #[test]
    fn test_tight_grip() {
        let verdict = classify_posture(&right_arm_at(30.0, 0.9)).unwrap();
        assert_eq!(verdict.severity, Severity::TightGrip);
        assert!(verdict.label.contains("30"), "{}", verdict.label);
        assert_eq!(verdict.color(), Color::ORANGE);
    }

    #[test]
    fn test_safe() {
        let verdict = classify_posture(&right_arm_at(90.0, 0.9)).unwrap();
        assert_eq!(verdict.severity, Severity::Safe);
        assert_eq!(verdict.label, "Safe Posture (90deg)");
        assert_eq!(verdict.color(), Color::GREEN);
        assert!((verdict.angle.unwrap() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_threshold_boundaries_are_safe() {
        // Both thresholds are strict comparisons.
        let rules = PostureClassifier::default().rules().to_vec();
        assert_eq!(evaluate_rules(&rules, 160.0), Severity::Safe);
        assert_eq!(evaluate_rules(&rules, 50.0), Severity::Safe);
        assert_eq!(evaluate_rules(&rules, 160.5), Severity::OverReach);
        assert_eq!(evaluate_rules(&rules, 49.5), Severity::TightGrip);
        assert_eq!(evaluate_rules(&[], 10.0), Severity::Safe);
    }

    #[test]
    fn test_low_confidence_skips_angle() {
        let skeleton = right_arm_at(170.0, 0.9).with_joint(
            KeypointKind::RightElbow,
            Joint::new(200.0, 200.0, 0.2),
        );
        let calls = Cell::new(0);
        let verdict = PostureClassifier::default()
            .classify_using(&skeleton, |a, v, c| {
                calls.set(calls.get() + 1);
                interior_angle(a, v, c)
            })
            .unwrap();

        assert_eq!(verdict.severity, Severity::InsufficientConfidence);
        assert_eq!(verdict.label, "Analyzing...");
        assert_eq!(verdict.angle, None);
        assert_eq!(verdict.color(), Color::WHITE);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_confident_arm_computes_angle_once() {
        let calls = Cell::new(0);
        PostureClassifier::default()
            .classify_using(&right_arm_at(90.0, 0.9), |a, v, c| {
                calls.set(calls.get() + 1);
                interior_angle(a, v, c)
            })
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_confidence_at_threshold_passes_gate() {
        let verdict = classify_posture(&right_arm_at(90.0, 0.5)).unwrap();
        assert_eq!(verdict.severity, Severity::Safe);
    }

    #[test]
    fn test_left_arm_ignored_by_default() {
        let skeleton = right_arm_at(90.0, 0.9)
            .with_joint(KeypointKind::LeftElbow, Joint::new(f32::NAN, 0.0, 0.0));
        assert!(classify_posture(&skeleton).is_ok());
    }

    #[test]
    fn test_left_arm_selection() {
        let classifier =
            PostureClassifier::new(ClassifierConfig::new().with_arm(Arm::Left)).unwrap();
        // Right arm is over-reaching, left arm is bent at a right angle.
        let skeleton = right_arm_at(170.0, 0.9)
            .with_joint(KeypointKind::LeftShoulder, Joint::new(10.0, 0.0, 0.9))
            .with_joint(KeypointKind::LeftElbow, Joint::new(0.0, 0.0, 0.9))
            .with_joint(KeypointKind::LeftWrist, Joint::new(0.0, 10.0, 0.9));
        let verdict = classifier.classify(&skeleton).unwrap();
        assert_eq!(verdict.severity, Severity::Safe);
        assert_eq!(verdict.label, "Safe Posture (90deg)");
    }

    #[test]
    fn test_non_finite_arm_is_invalid() {
        let skeleton = right_arm_at(90.0, 0.9)
            .with_joint(KeypointKind::RightWrist, Joint::new(f32::INFINITY, 1.0, 0.9));
        assert!(matches!(
            classify_posture(&skeleton),
            Err(PoseError::InvalidInput(_))
        ));

        // Non-finite confidence must not slip past the gate.
        let skeleton = right_arm_at(90.0, 0.9)
            .with_joint(KeypointKind::RightShoulder, Joint::new(200.0, 100.0, f32::NAN));
        assert!(classify_posture(&skeleton).is_err());
    }

    #[test]
    fn test_non_finite_angle_is_invalid() {
        let result = PostureClassifier::default()
            .classify_using(&right_arm_at(90.0, 0.9), |_, _, _| f32::NAN);
        assert!(matches!(result, Err(PoseError::InvalidInput(_))));
    }

    #[test]
    fn test_custom_rules() {
        let classifier = PostureClassifier::default()
            .with_rules(vec![PostureRule::above(80.0, Severity::OverReach)]);
        let verdict = classifier.classify(&right_arm_at(90.0, 0.9)).unwrap();
        assert_eq!(verdict.severity, Severity::OverReach);
    }

    #[test]
    fn test_insufficient_confidence_rule_keeps_angle() {
        let verdict = PostureVerdict::measured(Severity::InsufficientConfidence, 42.4);
        assert_eq!(verdict.label, "Analyzing...");
        assert_eq!(verdict.severity, Severity::InsufficientConfidence);
        assert!((verdict.angle.unwrap() - 42.4).abs() < f32::EPSILON);

        let classifier = PostureClassifier::default()
            .with_rules(vec![PostureRule::below(60.0, Severity::InsufficientConfidence)]);
        let verdict = classifier.classify(&right_arm_at(30.0, 0.9)).unwrap();
        assert_eq!(verdict.severity, Severity::InsufficientConfidence);
        assert!((verdict.angle.unwrap() - 30.0).abs() < 1e-3);
        assert_eq!(PostureVerdict::analyzing().angle, None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClassifierConfig::new().with_min_confidence(2.0);
        assert!(PostureClassifier::new(config).is_err());
    }

    #[test]
    fn test_idempotent() {
        let skeleton = right_arm_at(123.0, 0.8);
        let first = classify_posture(&skeleton).unwrap();
        let second = classify_posture(&skeleton).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_severity_flags() {
        assert!(Severity::OverReach.is_risk());
        assert!(Severity::TightGrip.is_risk());
        assert!(!Severity::Safe.is_risk());
        assert!(!Severity::InsufficientConfidence.is_risk());
        assert_eq!(Severity::TightGrip.to_string(), "tight-grip");
    }
}
