//! Edge detection while an event is being dragged.
//!
//! Holding a dragged event near the left or right edge of the viewport asks
//! the calendar to turn to the adjacent day. Requests are rate limited so a
//! pointer resting on the edge turns one day per cooldown period.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default distance from either edge that triggers a day change.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 100.0;

/// Default minimum time between day changes.
pub const DEFAULT_EDGE_COOLDOWN: Duration = Duration::from_millis(1000);

/// The viewport edge a dragged event was held against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Left,
    Right,
}

impl EdgeSide {
    /// Left edge turns to the previous day, right edge to the next.
    pub fn day_delta(self) -> i64 {
        match self {
            EdgeSide::Left => -1,
            EdgeSide::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeConfig {
    pub threshold: f64,
    pub cooldown: Duration,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_EDGE_THRESHOLD,
            cooldown: DEFAULT_EDGE_COOLDOWN,
        }
    }
}

/// Turns drag positions into throttled edge requests.
#[derive(Debug, Clone, Default)]
pub struct EdgeDragDetector {
    config: EdgeConfig,
    last_change: Option<Instant>,
}

impl EdgeDragDetector {
    pub fn new(config: EdgeConfig) -> Self {
        Self {
            config,
            last_change: None,
        }
    }

    /// Starts a drag. The cooldown runs from this moment.
    pub fn begin(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    /// Ends the drag; further positions are ignored until the next `begin`.
    pub fn finish(&mut self) {
        self.last_change = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last_change.is_some()
    }

    /// Reports which edge, if any, the pointer at `x` is pressing against.
    pub fn on_drag(&mut self, x: f64, viewport_width: f64, now: Instant) -> Option<EdgeSide> {
        let last_change = self.last_change?;
        if now.saturating_duration_since(last_change) <= self.config.cooldown {
            return None;
        }

        let side = if x < self.config.threshold {
            EdgeSide::Left
        } else if x > viewport_width - self.config.threshold {
            EdgeSide::Right
        } else {
            return None;
        };

        self.last_change = Some(now);
        tracing::trace!(?side, x, viewport_width, "Edge drag triggered");
        Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 400.0;

    fn started() -> (EdgeDragDetector, Instant) {
        let mut detector = EdgeDragDetector::default();
        let start = Instant::now();
        detector.begin(start);
        (detector, start)
    }

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_no_trigger_without_drag() {
        let mut detector = EdgeDragDetector::default();
        assert_eq!(detector.on_drag(10.0, WIDTH, Instant::now()), None);
        assert!(!detector.is_dragging());
    }

    #[test]
    fn test_cooldown_from_drag_start() {
        let (mut detector, start) = started();

        assert_eq!(detector.on_drag(10.0, WIDTH, at(start, 500)), None);
        assert_eq!(detector.on_drag(10.0, WIDTH, at(start, 1000)), None);
        assert_eq!(
            detector.on_drag(10.0, WIDTH, at(start, 1001)),
            Some(EdgeSide::Left)
        );
    }

    #[test]
    fn test_right_edge() {
        let (mut detector, start) = started();
        assert_eq!(
            detector.on_drag(350.0, WIDTH, at(start, 1500)),
            Some(EdgeSide::Right)
        );
    }

    #[test]
    fn test_middle_does_not_trigger_or_reset_cooldown() {
        let (mut detector, start) = started();

        assert_eq!(detector.on_drag(200.0, WIDTH, at(start, 1500)), None);
        assert_eq!(
            detector.on_drag(20.0, WIDTH, at(start, 1600)),
            Some(EdgeSide::Left)
        );
    }

    #[test]
    fn test_resting_on_edge_turns_once_per_cooldown() {
        let (mut detector, start) = started();

        assert!(detector.on_drag(5.0, WIDTH, at(start, 1100)).is_some());
        assert!(detector.on_drag(5.0, WIDTH, at(start, 1500)).is_none());
        assert!(detector.on_drag(5.0, WIDTH, at(start, 2200)).is_some());
    }

    #[test]
    fn test_finish_stops_detection() {
        let (mut detector, start) = started();
        detector.finish();
        assert_eq!(detector.on_drag(5.0, WIDTH, at(start, 5000)), None);
    }

    #[test]
    fn test_edge_day_delta() {
        assert_eq!(EdgeSide::Left.day_delta(), -1);
        assert_eq!(EdgeSide::Right.day_delta(), 1);
    }
}
