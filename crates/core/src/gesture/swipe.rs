use serde::{Deserialize, Serialize};

/// Default minimum horizontal travel for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// A sampled pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A recognized horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moved towards the left edge; navigates forward.
    Left,
    /// Finger moved towards the right edge; navigates backward.
    Right,
}

impl SwipeDirection {
    /// Days to move for a single-day view: left = next, right = previous.
    pub fn day_delta(self) -> i64 {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Tuning for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Horizontal travel that must be strictly exceeded.
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Classifies a start/end pair as a horizontal swipe.
///
/// A swipe needs `|dx| > threshold` and `|dx| > |dy|`. Positive `dx` is a
/// right swipe, negative a left swipe.
///
/// ```
/// use kanbancal_core::gesture::{classify_swipe, Point, SwipeConfig, SwipeDirection};
///
/// let config = SwipeConfig::default();
/// let left = classify_swipe(Point::new(100.0, 100.0), Point::new(20.0, 105.0), &config);
/// assert_eq!(left, Some(SwipeDirection::Left));
///
/// let vertical = classify_swipe(Point::new(100.0, 100.0), Point::new(100.0, 160.0), &config);
/// assert_eq!(vertical, None);
/// ```
pub fn classify_swipe(start: Point, end: Point, config: &SwipeConfig) -> Option<SwipeDirection> {
    let delta_x = end.x - start.x;
    let delta_y = end.y - start.y;

    if delta_x.abs() > config.threshold && delta_x.abs() > delta_y.abs() {
        Some(if delta_x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else {
        None
    }
}

/// Tracks one gesture from touch start to release.
///
/// While active, [`SwipeTracker::offset`] is the running horizontal delta for
/// live feedback. Release classifies the gesture and always resets the offset.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<Point>,
    offset: f64,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
            offset: 0.0,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Begins a gesture, discarding any gesture still in progress.
    pub fn start(&mut self, point: Point) {
        self.start = Some(point);
        self.offset = 0.0;
    }

    /// Records an intermediate sample and returns the live offset.
    /// Samples outside a gesture are ignored.
    pub fn move_to(&mut self, point: Point) -> f64 {
        if let Some(start) = self.start {
            self.offset = point.x - start.x;
        }
        self.offset
    }

    /// Ends the gesture and classifies it from its start and release points.
    pub fn end(&mut self, point: Point) -> Option<SwipeDirection> {
        let start = self.start.take();
        self.offset = 0.0;

        let direction = classify_swipe(start?, point, &self.config);
        if let Some(direction) = direction {
            tracing::trace!(direction = direction.as_str(), "Swipe recognized");
        }
        direction
    }

    /// Abandons the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
        self.offset = 0.0;
    }

    /// Running horizontal delta; zero when no gesture is active.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
