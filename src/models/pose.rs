// Pose landmark structures delivered by the external vision pipeline
// (MediaPipe Pose, 33 body keypoints)

use serde::{Deserialize, Serialize};

/// A pose keypoint with normalized image coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32, // Normalized [0, 1] for image coordinates
    pub y: f32, // Normalized [0, 1] for image coordinates
    pub z: f32, // Depth relative to the hip midpoint
    pub visibility: f32, // Detection confidence [0, 1]
}

impl Keypoint {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility >= threshold
    }
}

/// MediaPipe Pose landmark indices (33 total)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

pub const LANDMARK_COUNT: usize = 33;

/// Skeleton connection topology (pairs of landmark indices)
///
/// Matches the MediaPipe POSE_CONNECTIONS graph used for drawing.
pub const POSE_CONNECTIONS: [(usize, usize); 35] = [
    // Face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    // Arms
    (11, 12),
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    // Torso
    (11, 23),
    (12, 24),
    (23, 24),
    // Legs
    (23, 25),
    (24, 26),
    (25, 27),
    (26, 28),
    (27, 29),
    (28, 30),
    (29, 31),
    (30, 32),
    (27, 31),
    (28, 32),
];

/// Pose landmarks for a single frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkFrame {
    pub keypoints: Vec<Keypoint>,
}

impl LandmarkFrame {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    pub fn get(&self, landmark: BodyLandmark) -> Option<&Keypoint> {
        self.keypoints.get(landmark as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_visibility() {
        let keypoint = Keypoint::new(0.5, 0.5, 0.0, 0.8);
        assert!(keypoint.is_visible(0.5));
        assert!(keypoint.is_visible(0.8));
        assert!(!keypoint.is_visible(0.9));
    }

    #[test]
    fn test_connections_reference_valid_landmarks() {
        for (a, b) in POSE_CONNECTIONS {
            assert!(a < LANDMARK_COUNT);
            assert!(b < LANDMARK_COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_landmark_frame_lookup() {
        let mut keypoints = vec![Keypoint::new(0.0, 0.0, 0.0, 0.0); LANDMARK_COUNT];
        keypoints[BodyLandmark::LeftElbow as usize] = Keypoint::new(0.3, 0.6, 0.0, 0.9);

        let frame = LandmarkFrame::new(keypoints);
        let elbow = frame.get(BodyLandmark::LeftElbow).unwrap();
        assert_eq!(elbow.x, 0.3);
        assert_eq!(elbow.y, 0.6);
    }

    #[test]
    fn test_landmark_frame_lookup_short_list() {
        let frame = LandmarkFrame::new(vec![Keypoint::new(0.1, 0.1, 0.0, 1.0)]);
        assert!(frame.get(BodyLandmark::Nose).is_some());
        assert!(frame.get(BodyLandmark::LeftElbow).is_none());
    }
}
