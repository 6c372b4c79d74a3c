//! Pointer and touch interpretation.
//!
//! Callers feed raw coordinates; these types only classify them. Any input
//! that does not meet a threshold is a no-op, never an error.

mod edge;
mod swipe;

pub use edge::{EdgeConfig, EdgeDragDetector, EdgeSide};
pub use swipe::{classify_swipe, Point, SwipeConfig, SwipeDirection, SwipeTracker};
