//! Gesture interpretation
//!
//! Each gesture maps to at most one single-step request. There is no
//! accumulation or debouncing: every wheel tick and every completed swipe is
//! judged on its own, and bounds are enforced later by the navigator.

/// Direction of a single navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the feed (+1)
    Next,
    /// Towards the start of the feed (-1)
    Previous,
}

impl Direction {
    /// Signed index offset for this direction
    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }

    /// Apply this step to `index`, returning `None` if it would leave `0..len`
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Next => index.checked_add(1).filter(|&next| next < len),
            Direction::Previous => index.checked_sub(1),
        }
    }
}

/// Intent to move the current index by one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub direction: Direction,
}

impl NavigationRequest {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn next() -> Self {
        Self::new(Direction::Next)
    }

    pub fn previous() -> Self {
        Self::new(Direction::Previous)
    }
}

impl From<Direction> for NavigationRequest {
    fn from(direction: Direction) -> Self {
        Self::new(direction)
    }
}

/// Direction of a wheel tick; a purely horizontal tick (`delta_y == 0`) is no step
pub fn wheel_direction(delta_y: f64) -> Option<Direction> {
    if delta_y > 0.0 {
        Some(Direction::Next)
    } else if delta_y < 0.0 {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Direction for a navigation key, using DOM `KeyboardEvent.key` names
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" | "PageDown" => Some(Direction::Next),
        "ArrowUp" | "PageUp" => Some(Direction::Previous),
        _ => None,
    }
}

/// Tracks one touch gesture from touch-start to touch-end
///
/// Only the start and end positions matter; intermediate moves are never
/// observed. The start is consumed by the matching end (or discarded by a
/// cancel), so each start/end pair yields at most one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTracker {
    start_y: Option<f64>,
    threshold_px: f64,
}

impl TouchTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            start_y: None,
            threshold_px,
        }
    }

    /// Record where the finger went down
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Finish the gesture at `y` and classify it
    ///
    /// Upward travel (start below end on screen, positive delta) advances the
    /// feed. Travel must strictly exceed the threshold in either direction.
    pub fn end(&mut self, y: f64) -> Option<Direction> {
        let start_y = self.start_y.take()?;
        let delta = start_y - y;
        if delta > self.threshold_px {
            Some(Direction::Next)
        } else if delta < -self.threshold_px {
            Some(Direction::Previous)
        } else {
            None
        }
    }

    /// Drop any in-progress gesture (touchcancel)
    pub fn cancel(&mut self) {
        self.start_y = None;
    }

    /// Start position of the in-progress gesture, if any
    pub fn start_y(&self) -> Option<f64> {
        self.start_y
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }
}
