//! Feed slots and their requested playback state

/// Last playback state the navigator requested for a slot's media
///
/// This is what was asked of the host, not what the media element reports.
/// Autoplay policies or user controls may leave the element in another state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// One position in the feed holding exactly one playable video
///
/// The slot's index is fixed when the feed is laid out. The media element
/// itself lives with the [`FeedHost`](crate::host::FeedHost), addressed by
/// that index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSlot {
    index: usize,
    playback: PlaybackState,
}

impl FeedSlot {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            playback: PlaybackState::Paused,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Record a new requested state, returning whether it changed
    pub(crate) fn set_playback(&mut self, playback: PlaybackState) -> bool {
        let changed = self.playback != playback;
        self.playback = playback;
        changed
    }
}
