pub mod matcher;
pub mod template;

pub use matcher::{match_gesture, GestureClassifier, OVERLAP_SPAN_DIVISOR};
pub use template::{BoundaryRule, GestureLibrary, GestureTemplate};
