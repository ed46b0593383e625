pub mod geometry;
pub mod landmark;

pub use geometry::{distance, joint_angle, thumb_joint_angle};
pub use landmark::{Finger, HandLandmarks, Handedness, Landmark, LandmarkIndex};
