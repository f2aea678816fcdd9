use serde::{Deserialize, Serialize};

use crate::landmarks::LandmarkSnapshot;

/// Tunable cutoffs for the pose rules. Loaded from config.json,
/// fixed for the lifetime of the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Min (nose.y - wrist.y) to count a hand as raised.
    pub hand_raise_threshold: f32,
    /// Min mouth-opening / face-height ratio for an open mouth.
    pub mouth_open_threshold: f32,
    /// Max fingertip-to-mouth 2D distance for hand-on-face.
    pub hand_to_face_threshold: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            hand_raise_threshold: 0.05,
            mouth_open_threshold: 0.15,
            hand_to_face_threshold: 0.08,
        }
    }
}

/// Scalar measurements taken while the rules run. Rebuilt from zero on
/// every classification; valid only until the next call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebugMetrics {
    pub mouth_ratio: f32,
    pub hand_height: f32,
    pub hands_detected: usize,
    pub face_detected: bool,
}

/// The four mutually exclusive pose classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseLabel {
    RaisingHand,
    Thinking,
    Shocking,
    Default,
}

impl PoseLabel {
    /// Stable key used for asset lookup and logging.
    pub fn key(&self) -> &'static str {
        match self {
            PoseLabel::RaisingHand => "raising_hand",
            PoseLabel::Thinking => "thinking",
            PoseLabel::Shocking => "shocking",
            PoseLabel::Default => "default",
        }
    }
}

/// Rule-based pose classifier.
///
/// Priority order is raising_hand > thinking > shocking > default:
/// a raised hand is the most deliberate gesture and must not be masked
/// by an incidental open mouth or hand-near-face match.
///
/// The decision is a pure function of the snapshot and the thresholds.
/// The struct only retains the last computed [`DebugMetrics`] so the
/// display layer can read them after the fact; not safe to share
/// across threads without external synchronization.
pub struct PoseClassifier {
    thresholds: ThresholdConfig,
    metrics: DebugMetrics,
}

impl PoseClassifier {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            metrics: DebugMetrics::default(),
        }
    }

    /// Metrics from the most recent `classify` call.
    pub fn metrics(&self) -> DebugMetrics {
        self.metrics
    }

    /// Classifies one frame's landmarks. Total: absent landmarks mean
    /// "rule does not fire", never an error.
    pub fn classify(&mut self, snapshot: &LandmarkSnapshot) -> (PoseLabel, DebugMetrics) {
        let mut metrics = DebugMetrics {
            hands_detected: snapshot.hands.len(),
            face_detected: !snapshot.faces.is_empty(),
            ..DebugMetrics::default()
        };

        let label = if self.is_raising_hand(snapshot, &mut metrics) {
            PoseLabel::RaisingHand
        } else if self.is_thinking(snapshot) {
            PoseLabel::Thinking
        } else if self.is_shocking(snapshot, &mut metrics) {
            PoseLabel::Shocking
        } else {
            PoseLabel::Default
        };

        self.metrics = metrics;
        (label, metrics)
    }

    /// Hand raised above head level: any wrist more than the threshold
    /// above the nose. `hand_height` records the hand currently being
    /// evaluated, not the maximum over hands; on a miss it keeps the
    /// last iterated hand's value.
    fn is_raising_hand(&self, snapshot: &LandmarkSnapshot, metrics: &mut DebugMetrics) -> bool {
        let body = match &snapshot.body {
            Some(body) if !snapshot.hands.is_empty() => body,
            _ => {
                metrics.hand_height = 0.0;
                return false;
            }
        };

        let nose_y = body.nose().y;
        for hand in &snapshot.hands {
            let height_diff = nose_y - hand.wrist().y;
            metrics.hand_height = height_diff;

            if height_diff > self.thresholds.hand_raise_threshold {
                return true;
            }
        }

        false
    }

    /// Hand touching the face: any fingertip within threshold distance
    /// of the mouth region of the first face.
    fn is_thinking(&self, snapshot: &LandmarkSnapshot) -> bool {
        let face = match snapshot.primary_face() {
            Some(face) if !snapshot.hands.is_empty() => face,
            _ => return false,
        };

        let mouth_points = [
            face.upper_lip(),
            face.lower_lip(),
            face.chin(),
            face.mouth_center(),
        ];

        for hand in &snapshot.hands {
            let finger_tips = [
                hand.thumb_tip(),
                hand.index_finger_tip(),
                hand.middle_finger_tip(),
            ];

            for finger_tip in &finger_tips {
                for mouth_point in &mouth_points {
                    if finger_tip.distance_2d(mouth_point) < self.thresholds.hand_to_face_threshold
                    {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Mouth open wide relative to face height.
    fn is_shocking(&self, snapshot: &LandmarkSnapshot, metrics: &mut DebugMetrics) -> bool {
        let face = match snapshot.primary_face() {
            Some(face) => face,
            None => {
                metrics.mouth_ratio = 0.0;
                return false;
            }
        };

        let face_height = (face.chin().y - face.forehead().y).abs();
        let mouth_opening = (face.lower_lip().y - face.upper_lip().y).abs();

        // A degenerate mesh can report zero face height.
        let mouth_ratio = if face_height > 0.0 {
            mouth_opening / face_height
        } else {
            0.0
        };
        metrics.mouth_ratio = mouth_ratio;

        mouth_ratio > self.thresholds.mouth_open_threshold
    }
}
