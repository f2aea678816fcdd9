use crate::classifier::{DebugMetrics, PoseClassifier, PoseLabel, ThresholdConfig};
use crate::landmarks::{
    BodyLandmarks, FaceLandmarks, HandLandmarks, LandmarkPoint, LandmarkSnapshot, BODY_NOSE,
    BODY_POINT_COUNT, FACE_CHIN, FACE_FOREHEAD, FACE_LOWER_LIP, FACE_MOUTH_CENTER, FACE_POINT_COUNT,
    FACE_UPPER_LIP, HAND_INDEX_FINGER_TIP, HAND_MIDDLE_FINGER_TIP, HAND_POINT_COUNT,
    HAND_THUMB_TIP, HAND_WRIST,
};

const EPS: f32 = 1e-6;

fn classifier() -> PoseClassifier {
    PoseClassifier::new(ThresholdConfig::default())
}

fn body_with_nose(nose_y: f32) -> BodyLandmarks {
    let mut points = [LandmarkPoint::default(); BODY_POINT_COUNT];
    points[BODY_NOSE] = LandmarkPoint::new(0.5, nose_y, 0.0);
    BodyLandmarks::new(points)
}

/// A hand with the wrist at the given height and all fingertips parked
/// far away from any plausible mouth region.
fn hand_with_wrist(wrist_y: f32) -> HandLandmarks {
    let mut points = [LandmarkPoint::new(0.9, 0.9, 0.0); HAND_POINT_COUNT];
    points[HAND_WRIST] = LandmarkPoint::new(0.5, wrist_y, 0.0);
    HandLandmarks::new(points)
}

/// A hand with the index fingertip at the given position, wrist low.
fn hand_with_fingertip(x: f32, y: f32) -> HandLandmarks {
    let mut points = [LandmarkPoint::new(0.9, 0.9, 0.0); HAND_POINT_COUNT];
    points[HAND_WRIST] = LandmarkPoint::new(0.5, 0.9, 0.0);
    points[HAND_THUMB_TIP] = LandmarkPoint::new(0.9, 0.9, 0.0);
    points[HAND_INDEX_FINGER_TIP] = LandmarkPoint::new(x, y, 0.0);
    points[HAND_MIDDLE_FINGER_TIP] = LandmarkPoint::new(0.9, 0.9, 0.0);
    HandLandmarks::new(points)
}

/// A face with the five classification-relevant points set and every
/// other mesh point parked far away.
fn face(forehead_y: f32, chin_y: f32, upper_lip_y: f32, lower_lip_y: f32) -> FaceLandmarks {
    face_with_mouth_center(forehead_y, chin_y, upper_lip_y, lower_lip_y, (0.3, 0.5))
}

fn face_with_mouth_center(
    forehead_y: f32,
    chin_y: f32,
    upper_lip_y: f32,
    lower_lip_y: f32,
    mouth_center: (f32, f32),
) -> FaceLandmarks {
    let mut points = vec![LandmarkPoint::new(0.1, 0.1, 0.0); FACE_POINT_COUNT];
    points[FACE_FOREHEAD] = LandmarkPoint::new(0.3, forehead_y, 0.0);
    points[FACE_CHIN] = LandmarkPoint::new(0.3, chin_y, 0.0);
    points[FACE_UPPER_LIP] = LandmarkPoint::new(0.3, upper_lip_y, 0.0);
    points[FACE_LOWER_LIP] = LandmarkPoint::new(0.3, lower_lip_y, 0.0);
    points[FACE_MOUTH_CENTER] = LandmarkPoint::new(mouth_center.0, mouth_center.1, 0.0);
    FaceLandmarks::new(points)
}

#[test]
fn empty_snapshot_is_default_with_zeroed_metrics() {
    let mut c = classifier();
    let (label, metrics) = c.classify(&LandmarkSnapshot::empty());

    assert_eq!(label, PoseLabel::Default);
    assert_eq!(metrics, DebugMetrics::default());
    assert_eq!(c.metrics(), metrics);
}

#[test]
fn raising_hand_fires_above_threshold() {
    // nose_y 0.40, wrist_y 0.30 -> diff 0.10 > 0.05
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_wrist(0.30)],
        faces: vec![],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::RaisingHand);
    assert!((metrics.hand_height - 0.10).abs() < EPS);
    assert_eq!(metrics.hands_detected, 1);
    assert!(!metrics.face_detected);
}

#[test]
fn raising_hand_boundary_is_strict() {
    // diff == threshold exactly must NOT fire. Exactly representable
    // values so the comparison really hits the boundary.
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.75)),
        hands: vec![hand_with_wrist(0.5)],
        faces: vec![],
    };

    let mut c = PoseClassifier::new(ThresholdConfig {
        hand_raise_threshold: 0.25,
        ..ThresholdConfig::default()
    });
    let (label, metrics) = c.classify(&snapshot);
    assert_ne!(label, PoseLabel::RaisingHand);
    assert_eq!(metrics.hand_height, 0.25);
}

#[test]
fn raising_hand_needs_body_and_hand() {
    // Hand raised but no body landmarks: metric zeroed, rule off.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![hand_with_wrist(0.10)],
        faces: vec![],
    };
    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
    assert_eq!(metrics.hand_height, 0.0);
    assert_eq!(metrics.hands_detected, 1);

    // Body present but no hands.
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![],
        faces: vec![],
    };
    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
    assert_eq!(metrics.hand_height, 0.0);
}

#[test]
fn hand_height_records_current_hand_not_maximum() {
    // First hand well below the nose, second one raised. The loop must
    // stop at the second hand with its height recorded.
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_wrist(0.60), hand_with_wrist(0.28)],
        faces: vec![],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::RaisingHand);
    assert!((metrics.hand_height - 0.12).abs() < EPS);
}

#[test]
fn hand_height_keeps_last_iterated_value_on_miss() {
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_wrist(0.60), hand_with_wrist(0.50)],
        faces: vec![],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_ne!(label, PoseLabel::RaisingHand);
    assert!((metrics.hand_height - (-0.10)).abs() < EPS);
}

#[test]
fn thinking_fires_on_fingertip_near_mouth() {
    // Fingertip (0.50, 0.50) vs mouth center (0.52, 0.51):
    // distance ~0.0224 < 0.08
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![hand_with_fingertip(0.50, 0.50)],
        faces: vec![face_with_mouth_center(0.10, 0.60, 0.30, 0.33, (0.52, 0.51))],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Thinking);
    assert!(metrics.face_detected);
    assert_eq!(metrics.hands_detected, 1);
}

#[test]
fn thinking_needs_face_and_hand() {
    // Fingertip near where a mouth would be, but no face detected.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![hand_with_fingertip(0.50, 0.50)],
        faces: vec![],
    };
    let (label, _) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);

    // Face present, no hands: falls through to shocking/default.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![],
        faces: vec![face(0.10, 0.60, 0.30, 0.33)],
    };
    let (label, _) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
}

#[test]
fn shocking_fires_on_wide_mouth() {
    // face height 0.50, mouth opening 0.10 -> ratio 0.20 > 0.15
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![],
        faces: vec![face(0.10, 0.60, 0.30, 0.40)],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Shocking);
    assert!((metrics.mouth_ratio - 0.20).abs() < EPS);
    assert!(metrics.face_detected);
}

#[test]
fn shocking_boundary_is_strict() {
    // ratio == threshold exactly must NOT fire. Dyadic values again:
    // opening 0.125 over height 0.5 is exactly 0.25.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![],
        faces: vec![face(0.25, 0.75, 0.5, 0.625)],
    };

    let mut c = PoseClassifier::new(ThresholdConfig {
        mouth_open_threshold: 0.25,
        ..ThresholdConfig::default()
    });
    let (label, metrics) = c.classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
    assert_eq!(metrics.mouth_ratio, 0.25);
}

#[test]
fn zero_face_height_guards_division() {
    // forehead_y == chin_y: ratio must be exactly 0.0 no matter how far
    // apart the lips are, and shocking must not fire.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![],
        faces: vec![face(0.30, 0.30, 0.10, 0.90)],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
    assert_eq!(metrics.mouth_ratio, 0.0);
}

#[test]
fn raising_hand_wins_over_thinking_and_shocking() {
    // Raised wrist, fingertip on mouth, mouth wide open: all three
    // conditions hold, raising hand must win.
    let mut points = [LandmarkPoint::new(0.9, 0.9, 0.0); HAND_POINT_COUNT];
    points[HAND_WRIST] = LandmarkPoint::new(0.5, 0.20, 0.0);
    points[HAND_INDEX_FINGER_TIP] = LandmarkPoint::new(0.50, 0.50, 0.0);
    let raised = HandLandmarks::new(points);

    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![raised],
        faces: vec![face_with_mouth_center(0.10, 0.60, 0.30, 0.40, (0.52, 0.51))],
    };

    let (label, _) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::RaisingHand);
}

#[test]
fn thinking_wins_over_shocking() {
    // Fingertip on mouth and mouth wide open, hand not raised.
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_fingertip(0.50, 0.50)],
        faces: vec![face_with_mouth_center(0.10, 0.60, 0.30, 0.40, (0.52, 0.51))],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Thinking);
    // Shocking never ran, so its metric stays zeroed.
    assert_eq!(metrics.mouth_ratio, 0.0);
}

#[test]
fn only_first_face_is_authoritative() {
    // First face neutral, second wide open: second must be ignored.
    let snapshot = LandmarkSnapshot {
        body: None,
        hands: vec![],
        faces: vec![face(0.10, 0.60, 0.30, 0.33), face(0.10, 0.60, 0.30, 0.55)],
    };

    let (label, metrics) = classifier().classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
    assert!((metrics.mouth_ratio - 0.06).abs() < EPS);
}

#[test]
fn classify_is_idempotent() {
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_wrist(0.30)],
        faces: vec![face(0.10, 0.60, 0.30, 0.40)],
    };

    let mut c = classifier();
    let first = c.classify(&snapshot);
    let second = c.classify(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn thresholds_are_overridable() {
    // With a huge raise threshold the same raised hand is ignored.
    let snapshot = LandmarkSnapshot {
        body: Some(body_with_nose(0.40)),
        hands: vec![hand_with_wrist(0.30)],
        faces: vec![],
    };

    let mut strict = PoseClassifier::new(ThresholdConfig {
        hand_raise_threshold: 0.5,
        ..ThresholdConfig::default()
    });
    let (label, _) = strict.classify(&snapshot);
    assert_eq!(label, PoseLabel::Default);
}
