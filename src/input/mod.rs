//! Input pipeline
//!
//! Turns raw gesture readings (wheel deltas, touch positions, key names) into
//! discrete navigation requests. Pure and platform-independent; the browser
//! build feeds it from DOM events.

pub mod gesture;

pub use gesture::{key_direction, wheel_direction, Direction, NavigationRequest, TouchTracker};
