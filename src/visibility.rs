//! Viewport visibility reports
//!
//! The page's intersection observer fires whenever a slot's visible fraction
//! crosses the configured threshold in either direction. A browser observer
//! still reports `isIntersecting` for a slot that is only partly visible, so
//! the "in view" decision is made here against the threshold itself.

/// A slot crossed the visibility threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub slot_index: usize,
    /// Whether the slot is now at least threshold-visible
    pub intersecting: bool,
    /// Visible fraction of the slot, 0.0..=1.0
    pub ratio: f64,
}

impl VisibilityEvent {
    pub fn entered(slot_index: usize, ratio: f64) -> Self {
        Self {
            slot_index,
            intersecting: true,
            ratio,
        }
    }

    pub fn left(slot_index: usize, ratio: f64) -> Self {
        Self {
            slot_index,
            intersecting: false,
            ratio,
        }
    }

    /// Build an event from a raw observer report
    pub fn from_observation(
        slot_index: usize,
        host_intersecting: bool,
        ratio: f64,
        threshold: f64,
    ) -> Self {
        Self {
            slot_index,
            intersecting: host_intersecting && ratio >= threshold,
            ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_above_threshold_is_intersecting() {
        let event = VisibilityEvent::from_observation(1, true, 0.95, 0.8);
        assert!(event.intersecting);
        assert_eq!(event.slot_index, 1);
    }

    #[test]
    fn test_partial_visibility_below_threshold_is_not_intersecting() {
        let event = VisibilityEvent::from_observation(1, true, 0.4, 0.8);
        assert!(!event.intersecting);
    }

    #[test]
    fn test_ratio_just_below_threshold_is_not_intersecting() {
        let event = VisibilityEvent::from_observation(0, true, 0.7999, 0.8);
        assert!(!event.intersecting);

        let departing = VisibilityEvent::from_observation(1, true, 0.9995, 1.0);
        assert!(!departing.intersecting);
    }

    #[test]
    fn test_ratio_exactly_at_threshold_is_intersecting() {
        let event = VisibilityEvent::from_observation(0, true, 0.8, 0.8);
        assert!(event.intersecting);
    }

    #[test]
    fn test_host_not_intersecting_wins() {
        let event = VisibilityEvent::from_observation(0, false, 1.0, 0.8);
        assert!(!event.intersecting);
    }
}
