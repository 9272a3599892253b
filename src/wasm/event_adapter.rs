//! Event adapter for converting DOM events to navigator inputs
//!
//! The navigator works with plain numbers and [`VisibilityEvent`]s. This
//! module reads the few fields it needs out of `web_sys` events.

use web_sys::{Element, IntersectionObserverEntry, KeyboardEvent, TouchEvent, WheelEvent};

use crate::visibility::VisibilityEvent;

/// Attribute carrying a slot's stable feed index
pub const SLOT_INDEX_ATTR: &str = "data-feed-slot";

/// Parse the value of [`SLOT_INDEX_ATTR`]
pub fn parse_slot_index(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Feed index of a tagged slot container
pub fn slot_index_of(element: &Element) -> Option<usize> {
    parse_slot_index(&element.get_attribute(SLOT_INDEX_ATTR)?)
}

/// Convert an observer entry; `None` for targets that are not tagged slots
pub fn convert_intersection_entry(
    entry: &IntersectionObserverEntry,
    threshold: f64,
) -> Option<VisibilityEvent> {
    let slot_index = slot_index_of(&entry.target())?;
    Some(VisibilityEvent::from_observation(
        slot_index,
        entry.is_intersecting(),
        entry.intersection_ratio(),
        threshold,
    ))
}

pub fn wheel_delta_y(event: &WheelEvent) -> f64 {
    event.delta_y()
}

/// Y position of the first finger that went down
pub fn touch_start_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.client_y() as f64)
}

/// Y position of the first finger that lifted (touchend has no active touches)
pub fn touch_end_y(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| touch.client_y() as f64)
}

/// Key name, skipping events that carry modifiers the feed does not own
pub fn navigation_key(event: &KeyboardEvent) -> Option<String> {
    if event.ctrl_key() || event.alt_key() || event.meta_key() {
        return None;
    }
    Some(event.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_index() {
        assert_eq!(parse_slot_index("0"), Some(0));
        assert_eq!(parse_slot_index(" 12 "), Some(12));
        assert_eq!(parse_slot_index("-1"), None);
        assert_eq!(parse_slot_index("card-3"), None);
        assert_eq!(parse_slot_index(""), None);
    }
}
