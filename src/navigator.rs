//! Feed navigator
//!
//! The single authority over which slot is current. Three independent sources
//! ask to change it:
//!
//! - visibility reports from the viewport observer (authoritative: they say
//!   what the user is actually looking at),
//! - wheel ticks,
//! - touch swipes (and optionally navigation keys).
//!
//! Gestures update the index optimistically and issue a scroll; the observer
//! later confirms arrival or corrects the index to wherever the viewport
//! settled. The correction is accepted, never suppressed, so the index is
//! eventually consistent with the viewport rather than with the last gesture.
//!
//! All handlers run to completion on the UI thread, so the index is read and
//! written within one call and each request is bounds-checked against the
//! latest value.

use tracing::{debug, trace, warn};

use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::host::FeedHost;
use crate::input::{key_direction, wheel_direction, Direction, NavigationRequest, TouchTracker};
use crate::slot::{FeedSlot, PlaybackState};
use crate::visibility::VisibilityEvent;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The index changed and a scroll to `to` was issued
    Moved { from: usize, to: usize },
    /// The request pointed past the end of the feed and was dropped
    AtBoundary { index: usize, direction: Direction },
}

impl NavigationOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }

    /// Current index after the request
    pub fn index(&self) -> usize {
        match *self {
            NavigationOutcome::Moved { to, .. } => to,
            NavigationOutcome::AtBoundary { index, .. } => index,
        }
    }
}

/// Result of a visibility report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityOutcome {
    /// The slot is in view, playing, and now current
    Current { index: usize, previous: usize },
    /// The slot left view and was paused
    Paused { index: usize },
    /// The report named a slot this feed does not have
    UnknownSlot { index: usize },
}

/// Keeps exactly one video current while the user scrolls, wheels and swipes
#[derive(Debug)]
pub struct FeedNavigator<H: FeedHost> {
    slots: Vec<FeedSlot>,
    current_index: usize,
    /// Target of the latest gesture that the observer has not confirmed yet
    pending_target: Option<usize>,
    touch: TouchTracker,
    config: NavigatorConfig,
    host: H,
}

impl<H: FeedHost> FeedNavigator<H> {
    /// Create a navigator over `slot_count` slots, starting at slot 0
    ///
    /// No commands are issued here; the observer's first report starts
    /// playback.
    pub fn new(
        slot_count: usize,
        config: NavigatorConfig,
        host: H,
    ) -> Result<Self, NavigatorError> {
        if slot_count == 0 {
            return Err(NavigatorError::EmptyFeed);
        }
        config.validate()?;

        debug!(slot_count, "feed navigator created");
        Ok(Self {
            slots: (0..slot_count).map(FeedSlot::new).collect(),
            current_index: 0,
            pending_target: None,
            touch: TouchTracker::new(config.swipe_threshold_px),
            config,
            host,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[FeedSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&FeedSlot> {
        self.slots.get(index)
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Indices of slots whose media was last asked to play
    pub fn playing_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|slot| slot.is_playing())
            .map(FeedSlot::index)
            .collect()
    }

    /// Gesture target still waiting for the observer to confirm arrival
    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Apply a visibility report from the viewport observer
    pub fn handle_visibility(&mut self, event: VisibilityEvent) -> VisibilityOutcome {
        let index = event.slot_index;
        let Some(slot) = self.slots.get_mut(index) else {
            warn!(index, slot_count = self.slots.len(), "visibility report for unknown slot");
            return VisibilityOutcome::UnknownSlot { index };
        };

        if !event.intersecting {
            if slot.set_playback(PlaybackState::Paused) {
                self.host.pause(index);
            }
            trace!(index, ratio = event.ratio, "slot left view");
            return VisibilityOutcome::Paused { index };
        }

        if slot.set_playback(PlaybackState::Playing) {
            self.host.play(index);
        }

        let previous = self.current_index;
        self.current_index = index;

        match self.pending_target {
            Some(target) if target == index => {
                debug!(index, "observer confirmed navigation target");
                self.pending_target = None;
            }
            Some(target) => {
                debug!(index, target, "observer settled away from navigation target");
            }
            None if previous != index => {
                debug!(previous, index, "current slot changed by scrolling");
            }
            None => {}
        }

        VisibilityOutcome::Current { index, previous }
    }

    /// Move one slot in the requested direction, if the feed allows it
    pub fn handle_navigation_request(&mut self, request: NavigationRequest) -> NavigationOutcome {
        let from = self.current_index;
        let Some(to) = request.direction.step(from, self.slots.len()) else {
            trace!(
                index = from,
                direction = ?request.direction,
                "navigation request at feed boundary"
            );
            return NavigationOutcome::AtBoundary {
                index: from,
                direction: request.direction,
            };
        };

        self.current_index = to;
        self.pending_target = Some(to);
        self.host.scroll_into_view(to, self.config.scroll_behavior);
        debug!(from, to, "navigated");
        NavigationOutcome::Moved { from, to }
    }

    /// One wheel tick is one step; purely horizontal ticks are ignored
    pub fn handle_wheel(&mut self, delta_y: f64) -> Option<NavigationOutcome> {
        let direction = wheel_direction(delta_y)?;
        Some(self.handle_navigation_request(direction.into()))
    }

    pub fn handle_touch_start(&mut self, y: f64) {
        self.touch.begin(y);
    }

    /// Finish a swipe; swipes within the threshold issue no request
    pub fn handle_touch_end(&mut self, y: f64) -> Option<NavigationOutcome> {
        let direction = self.touch.end(y)?;
        Some(self.handle_navigation_request(direction.into()))
    }

    pub fn handle_touch_cancel(&mut self) {
        self.touch.cancel();
    }

    /// Step on a navigation key when keyboard navigation is enabled
    pub fn handle_key(&mut self, key: &str) -> Option<NavigationOutcome> {
        if !self.config.keyboard_navigation {
            return None;
        }
        let direction = key_direction(key)?;
        Some(self.handle_navigation_request(direction.into()))
    }

    /// Tear the feed down, pausing anything still asked to play
    ///
    /// Returns the host so the caller can release whatever it holds.
    pub fn teardown(mut self) -> H {
        for slot in &mut self.slots {
            if slot.set_playback(PlaybackState::Paused) {
                self.host.pause(slot.index());
            }
        }
        debug!(slot_count = self.slots.len(), "feed navigator torn down");
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCommand, RecordingHost, ScrollBehavior};

    fn navigator(slot_count: usize) -> FeedNavigator<RecordingHost> {
        FeedNavigator::new(slot_count, NavigatorConfig::default(), RecordingHost::new()).unwrap()
    }

    fn scroll(index: usize) -> HostCommand {
        HostCommand::ScrollIntoView {
            index,
            behavior: ScrollBehavior::Smooth,
        }
    }

    #[test]
    fn test_new_starts_at_zero_without_commands() {
        let nav = navigator(3);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.slot_count(), 3);
        assert!(nav.is_current(0));
        assert!(nav.host().commands().is_empty());
        assert!(nav.playing_slots().is_empty());
    }

    #[test]
    fn test_empty_feed_is_rejected() {
        let err =
            FeedNavigator::new(0, NavigatorConfig::default(), RecordingHost::new()).unwrap_err();
        assert!(matches!(err, NavigatorError::EmptyFeed));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = NavigatorConfig {
            visibility_threshold: 0.0,
            ..Default::default()
        };
        let err = FeedNavigator::new(3, config, RecordingHost::new()).unwrap_err();
        assert!(matches!(err, NavigatorError::Config(_)));
    }

    #[test]
    fn test_request_moves_and_scrolls() {
        let mut nav = navigator(3);
        let outcome = nav.handle_navigation_request(NavigationRequest::next());
        assert_eq!(outcome, NavigationOutcome::Moved { from: 0, to: 1 });
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.pending_target(), Some(1));
        assert_eq!(nav.host().commands(), &[scroll(1)]);
    }

    #[test]
    fn test_boundary_requests_are_noops() {
        let mut nav = navigator(2);
        let outcome = nav.handle_navigation_request(NavigationRequest::previous());
        assert_eq!(
            outcome,
            NavigationOutcome::AtBoundary {
                index: 0,
                direction: Direction::Previous
            }
        );

        nav.handle_navigation_request(NavigationRequest::next());
        nav.host_mut().take_commands();

        let outcome = nav.handle_navigation_request(NavigationRequest::next());
        assert!(!outcome.is_moved());
        assert_eq!(outcome.index(), 1);
        assert!(nav.host().commands().is_empty());
    }

    #[test]
    fn test_single_slot_feed_never_moves() {
        let mut nav = navigator(1);
        assert!(!nav.handle_wheel(100.0).unwrap().is_moved());
        assert!(!nav.handle_wheel(-100.0).unwrap().is_moved());
        assert_eq!(nav.current_index(), 0);
        assert!(nav.host().commands().is_empty());
    }

    #[test]
    fn test_visibility_enter_plays_and_sets_current() {
        let mut nav = navigator(4);
        let outcome = nav.handle_visibility(VisibilityEvent::entered(2, 0.9));
        assert_eq!(outcome, VisibilityOutcome::Current { index: 2, previous: 0 });
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.slot(2).unwrap().playback(), PlaybackState::Playing);
        assert_eq!(nav.host().commands(), &[HostCommand::Play(2)]);
    }

    #[test]
    fn test_visibility_leave_pauses() {
        let mut nav = navigator(4);
        nav.handle_visibility(VisibilityEvent::entered(0, 1.0));
        let outcome = nav.handle_visibility(VisibilityEvent::left(0, 0.3));
        assert_eq!(outcome, VisibilityOutcome::Paused { index: 0 });
        assert_eq!(nav.slot(0).unwrap().playback(), PlaybackState::Paused);
        assert_eq!(
            nav.host().commands(),
            &[HostCommand::Play(0), HostCommand::Pause(0)]
        );
        // Leaving view does not move the current index
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_repeated_visibility_is_idempotent() {
        let mut nav = navigator(3);
        nav.handle_visibility(VisibilityEvent::entered(1, 0.85));
        nav.handle_visibility(VisibilityEvent::entered(1, 1.0));
        nav.handle_visibility(VisibilityEvent::left(2, 0.1));
        assert_eq!(nav.host().commands(), &[HostCommand::Play(1)]);
    }

    #[test]
    fn test_unknown_slot_is_ignored() {
        let mut nav = navigator(3);
        let outcome = nav.handle_visibility(VisibilityEvent::entered(7, 1.0));
        assert_eq!(outcome, VisibilityOutcome::UnknownSlot { index: 7 });
        assert_eq!(nav.current_index(), 0);
        assert!(nav.host().commands().is_empty());
    }

    #[test]
    fn test_observer_confirms_pending_target() {
        let mut nav = navigator(3);
        nav.handle_wheel(120.0);
        assert_eq!(nav.pending_target(), Some(1));
        nav.handle_visibility(VisibilityEvent::entered(1, 0.9));
        assert_eq!(nav.pending_target(), None);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_observer_correction_overrides_gesture() {
        let mut nav = navigator(5);
        nav.handle_wheel(120.0);
        nav.handle_wheel(120.0);
        assert_eq!(nav.current_index(), 2);

        // Viewport actually settled on slot 1
        nav.handle_visibility(VisibilityEvent::entered(1, 0.95));
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.pending_target(), Some(2));

        // Next gesture is checked against the corrected index
        let outcome = nav.handle_wheel(120.0).unwrap();
        assert_eq!(outcome, NavigationOutcome::Moved { from: 1, to: 2 });
    }

    #[test]
    fn test_horizontal_wheel_is_ignored() {
        let mut nav = navigator(3);
        assert_eq!(nav.handle_wheel(0.0), None);
        assert_eq!(nav.current_index(), 0);
        assert!(nav.host().commands().is_empty());
    }

    #[test]
    fn test_touch_swipe_navigates_once_per_pair() {
        let mut nav = navigator(3);
        nav.handle_touch_start(400.0);
        let outcome = nav.handle_touch_end(300.0);
        assert_eq!(outcome, Some(NavigationOutcome::Moved { from: 0, to: 1 }));
        assert_eq!(nav.handle_touch_end(300.0), None);
        assert_eq!(nav.host().scroll_targets(), vec![1]);
    }

    #[test]
    fn test_touch_cancel_drops_swipe() {
        let mut nav = navigator(3);
        nav.handle_touch_start(400.0);
        nav.handle_touch_cancel();
        assert_eq!(nav.handle_touch_end(100.0), None);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_keys_ignored_unless_enabled() {
        let mut nav = navigator(3);
        assert_eq!(nav.handle_key("ArrowDown"), None);

        let config = NavigatorConfig {
            keyboard_navigation: true,
            ..Default::default()
        };
        let mut nav = FeedNavigator::new(3, config, RecordingHost::new()).unwrap();
        assert_eq!(
            nav.handle_key("ArrowDown"),
            Some(NavigationOutcome::Moved { from: 0, to: 1 })
        );
        assert_eq!(
            nav.handle_key("PageUp"),
            Some(NavigationOutcome::Moved { from: 1, to: 0 })
        );
        assert_eq!(nav.handle_key("Enter"), None);
    }

    #[test]
    fn test_instant_scroll_behavior_is_forwarded() {
        let config = NavigatorConfig {
            scroll_behavior: ScrollBehavior::Instant,
            ..Default::default()
        };
        let mut nav = FeedNavigator::new(2, config, RecordingHost::new()).unwrap();
        nav.handle_wheel(1.0);
        assert_eq!(
            nav.host().commands(),
            &[HostCommand::ScrollIntoView {
                index: 1,
                behavior: ScrollBehavior::Instant
            }]
        );
    }

    #[test]
    fn test_teardown_pauses_playing_media() {
        let mut nav = navigator(3);
        nav.handle_visibility(VisibilityEvent::entered(0, 1.0));
        nav.handle_visibility(VisibilityEvent::entered(1, 0.8));
        let mut host = nav.teardown();
        assert_eq!(
            host.take_commands(),
            vec![
                HostCommand::Play(0),
                HostCommand::Play(1),
                HostCommand::Pause(0),
                HostCommand::Pause(1),
            ]
        );
    }
}
