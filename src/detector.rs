use anyhow::Result;
use image::{ImageBuffer, Rgb};

use crate::config::DetectionConfig;
use crate::landmarks::{
    BodyLandmarks, FaceLandmarks, HandLandmarks, LandmarkPoint, LandmarkSnapshot, BODY_NOSE,
    BODY_POINT_COUNT, FACE_CHIN, FACE_FOREHEAD, FACE_LOWER_LIP, FACE_MOUTH_CENTER,
    FACE_POINT_COUNT, FACE_UPPER_LIP, HAND_INDEX_FINGER_TIP, HAND_MIDDLE_FINGER_TIP,
    HAND_POINT_COUNT, HAND_THUMB_TIP, HAND_WRIST,
};

/// Boundary to the external landmark-extraction capability.
///
/// Implementations turn a camera frame into a snapshot of whatever
/// body/hand/face landmarks they found. Finding nothing is a normal
/// result (an empty snapshot), not an error.
pub trait LandmarkDetector {
    fn name(&self) -> String;
    fn process(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<LandmarkSnapshot>;
}

/// Detector that reports nothing. Useful for exercising the display
/// path and as the explicit "no detection available" fallback.
pub struct NullDetector;

impl LandmarkDetector for NullDetector {
    fn name(&self) -> String {
        "Null (no landmarks)".to_string()
    }

    fn process(&mut self, _frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<LandmarkSnapshot> {
        Ok(LandmarkSnapshot::empty())
    }
}

/// Animated fake person for running the app without a real model.
///
/// Cycles through the four poses on a fixed schedule: a few seconds of
/// neutral pose, then the hand rises above the head, then the hand
/// moves to the mouth, then the mouth opens wide.
pub struct SimulatedDetector {
    start_time: std::time::Instant,
    max_num_hands: usize,
    max_num_faces: usize,
}

impl SimulatedDetector {
    pub fn new(detection: &DetectionConfig) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            max_num_hands: detection.max_num_hands,
            max_num_faces: detection.max_num_faces,
        }
    }

    fn body(nose_y: f32) -> BodyLandmarks {
        let mut points = [LandmarkPoint::default(); BODY_POINT_COUNT];
        points[BODY_NOSE] = LandmarkPoint::new(0.5, nose_y, 0.0);
        BodyLandmarks::new(points)
    }

    fn hand(wrist: (f32, f32), tips: (f32, f32)) -> HandLandmarks {
        let mut points = [LandmarkPoint::new(wrist.0, wrist.1, 0.0); HAND_POINT_COUNT];
        points[HAND_WRIST] = LandmarkPoint::new(wrist.0, wrist.1, 0.0);
        points[HAND_THUMB_TIP] = LandmarkPoint::new(tips.0 - 0.02, tips.1, 0.0);
        points[HAND_INDEX_FINGER_TIP] = LandmarkPoint::new(tips.0, tips.1, 0.0);
        points[HAND_MIDDLE_FINGER_TIP] = LandmarkPoint::new(tips.0 + 0.02, tips.1, 0.0);
        HandLandmarks::new(points)
    }

    fn face(mouth_opening: f32) -> FaceLandmarks {
        let mut points = vec![LandmarkPoint::new(0.5, 0.35, 0.0); FACE_POINT_COUNT];
        points[FACE_FOREHEAD] = LandmarkPoint::new(0.5, 0.20, 0.0);
        points[FACE_CHIN] = LandmarkPoint::new(0.5, 0.50, 0.0);
        points[FACE_UPPER_LIP] = LandmarkPoint::new(0.5, 0.42, 0.0);
        points[FACE_LOWER_LIP] = LandmarkPoint::new(0.5, 0.42 + mouth_opening, 0.0);
        points[FACE_MOUTH_CENTER] = LandmarkPoint::new(0.5, 0.43, 0.0);
        FaceLandmarks::new(points)
    }
}

impl LandmarkDetector for SimulatedDetector {
    fn name(&self) -> String {
        "Simulated Person".to_string()
    }

    fn process(&mut self, _frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<LandmarkSnapshot> {
        let t = self.start_time.elapsed().as_secs_f32();
        let phase = (t / 4.0) as u32 % 4;

        let nose_y = 0.35;
        let body = Some(Self::body(nose_y));
        let face_count = self.max_num_faces.min(1);

        let (hands, faces) = match phase {
            // Neutral: hand resting low, mouth closed.
            0 => (
                vec![Self::hand((0.7, 0.8), (0.7, 0.75))],
                vec![Self::face(0.01); face_count],
            ),
            // Raising hand: wrist well above the nose.
            1 => (
                vec![Self::hand((0.7, nose_y - 0.15), (0.7, nose_y - 0.20))],
                vec![Self::face(0.01); face_count],
            ),
            // Thinking: fingertips on the mouth.
            2 => (
                vec![Self::hand((0.55, 0.55), (0.5, 0.43))],
                vec![Self::face(0.01); face_count],
            ),
            // Shocking: mouth wide open, hand away from the face.
            _ => (
                vec![Self::hand((0.7, 0.8), (0.7, 0.75))],
                vec![Self::face(0.06); face_count],
            ),
        };

        let mut hands = hands;
        hands.truncate(self.max_num_hands);

        Ok(LandmarkSnapshot { body, hands, faces })
    }
}
