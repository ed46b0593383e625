pub mod analyzer;
pub mod boundary;
pub mod finger;
pub mod orientation;

pub use analyzer::{HandAnalyzer, HandFeatures};
pub use boundary::{find_boundary_landmarks, BoundaryLandmarks};
pub use finger::{finger_state, finger_state_name, thumb_state_name, FingerThresholds};
pub use orientation::{detect_orientation, Direction, Facing, Orientation};
