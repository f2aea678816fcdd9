//! Landmark data model shared by the detector boundary and the classifier.
//!
//! All coordinates are normalized to the source image: x/y in [0, 1]
//! with y increasing downward, z unconstrained relative depth.

/// A single landmark point in normalized image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    #[allow(dead_code)]
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 2D Euclidean distance, ignoring depth.
    pub fn distance_2d(&self, other: &LandmarkPoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

// Body skeleton indices (33-point reference skeleton)
pub const BODY_POINT_COUNT: usize = 33;
pub const BODY_NOSE: usize = 0;

// Hand indices (21 points per hand)
pub const HAND_POINT_COUNT: usize = 21;
pub const HAND_WRIST: usize = 0;
pub const HAND_THUMB_TIP: usize = 4;
pub const HAND_INDEX_FINGER_TIP: usize = 8;
pub const HAND_MIDDLE_FINGER_TIP: usize = 12;

// Face mesh indices (468-point reference mesh)
pub const FACE_POINT_COUNT: usize = 468;
pub const FACE_MOUTH_CENTER: usize = 0;
pub const FACE_FOREHEAD: usize = 10;
pub const FACE_UPPER_LIP: usize = 13;
pub const FACE_LOWER_LIP: usize = 14;
pub const FACE_CHIN: usize = 152;

/// The 33-point body skeleton for one detected person.
#[derive(Debug, Clone)]
pub struct BodyLandmarks {
    points: [LandmarkPoint; BODY_POINT_COUNT],
}

impl BodyLandmarks {
    pub fn new(points: [LandmarkPoint; BODY_POINT_COUNT]) -> Self {
        Self { points }
    }

    pub fn nose(&self) -> LandmarkPoint {
        self.points[BODY_NOSE]
    }

    #[allow(dead_code)]
    pub fn point(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(index).copied()
    }
}

/// The 21-point landmark set for one detected hand.
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    points: [LandmarkPoint; HAND_POINT_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [LandmarkPoint; HAND_POINT_COUNT]) -> Self {
        Self { points }
    }

    pub fn wrist(&self) -> LandmarkPoint {
        self.points[HAND_WRIST]
    }

    pub fn thumb_tip(&self) -> LandmarkPoint {
        self.points[HAND_THUMB_TIP]
    }

    pub fn index_finger_tip(&self) -> LandmarkPoint {
        self.points[HAND_INDEX_FINGER_TIP]
    }

    pub fn middle_finger_tip(&self) -> LandmarkPoint {
        self.points[HAND_MIDDLE_FINGER_TIP]
    }

    pub fn point(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(index).copied()
    }
}

/// The 468-point face mesh for one detected face.
#[derive(Debug, Clone)]
pub struct FaceLandmarks {
    points: Vec<LandmarkPoint>,
}

impl FaceLandmarks {
    /// Builds a face mesh from exactly `FACE_POINT_COUNT` points.
    /// Shorter inputs are padded with the origin so index accessors
    /// stay total; the detectors shipped here always provide 468.
    pub fn new(mut points: Vec<LandmarkPoint>) -> Self {
        points.resize(FACE_POINT_COUNT, LandmarkPoint::default());
        Self { points }
    }

    pub fn mouth_center(&self) -> LandmarkPoint {
        self.points[FACE_MOUTH_CENTER]
    }

    pub fn forehead(&self) -> LandmarkPoint {
        self.points[FACE_FOREHEAD]
    }

    pub fn upper_lip(&self) -> LandmarkPoint {
        self.points[FACE_UPPER_LIP]
    }

    pub fn lower_lip(&self) -> LandmarkPoint {
        self.points[FACE_LOWER_LIP]
    }

    pub fn chin(&self) -> LandmarkPoint {
        self.points[FACE_CHIN]
    }

    pub fn point(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(index).copied()
    }
}

/// Everything the detection capability produced for a single frame.
///
/// Built fresh each frame and passed by reference to the classifier.
/// Any subset may be absent; absence is normal, not an error.
#[derive(Debug, Clone, Default)]
pub struct LandmarkSnapshot {
    pub body: Option<BodyLandmarks>,
    pub hands: Vec<HandLandmarks>,
    pub faces: Vec<FaceLandmarks>,
}

impl LandmarkSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The authoritative face: only the first detection counts.
    pub fn primary_face(&self) -> Option<&FaceLandmarks> {
        self.faces.first()
    }
}
