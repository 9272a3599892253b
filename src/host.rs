//! Side-effect sink for the navigator
//!
//! The navigator never touches the page directly. Every play, pause and
//! scroll goes through a [`FeedHost`], which the browser build implements
//! over real media elements and which tests implement with [`RecordingHost`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a scroll command animates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Animated scroll
    #[default]
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// Receiver of the navigator's play/pause/scroll commands
///
/// Slots are addressed by their feed index. Implementations own the mapping
/// from index to the slot's container and media element. Commands are
/// fire-and-forget: the navigator only requests playback, it never learns
/// whether the media actually started.
pub trait FeedHost {
    /// Start playback of the slot's media
    fn play(&mut self, index: usize);

    /// Pause the slot's media
    fn pause(&mut self, index: usize);

    /// Scroll the slot's container into view
    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior);
}

impl<H: FeedHost + ?Sized> FeedHost for &mut H {
    fn play(&mut self, index: usize) {
        (**self).play(index)
    }

    fn pause(&mut self, index: usize) {
        (**self).pause(index)
    }

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        (**self).scroll_into_view(index, behavior)
    }
}

/// A command issued to a [`FeedHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Play(usize),
    Pause(usize),
    ScrollIntoView {
        index: usize,
        behavior: ScrollBehavior,
    },
}

/// Host that records every command instead of performing it
///
/// Useful for headless embedding and for asserting on the exact side
/// effects a sequence of events produced.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    commands: Vec<HostCommand>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands in the order they were issued
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the log empty
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Indices of every scroll command, in order
    pub fn scroll_targets(&self) -> Vec<usize> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                HostCommand::ScrollIntoView { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl FeedHost for RecordingHost {
    fn play(&mut self, index: usize) {
        self.commands.push(HostCommand::Play(index));
    }

    fn pause(&mut self, index: usize) {
        self.commands.push(HostCommand::Pause(index));
    }

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        self.commands.push(HostCommand::ScrollIntoView { index, behavior });
    }
}
