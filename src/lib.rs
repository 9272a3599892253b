// Feed navigator library - exposes all core modules for testing

// Core types and config are always available (needed for schema generation)
pub mod config;
pub mod error;

// Core modules - pure Rust, no platform dependencies
pub mod host;
pub mod input;
pub mod navigator;
pub mod shared;
pub mod slot;
pub mod visibility;

pub use config::{LogLevel, NavigatorConfig};
pub use error::{ConfigError, NavigatorError};
pub use host::{FeedHost, HostCommand, RecordingHost, ScrollBehavior};
pub use input::{Direction, NavigationRequest};
pub use navigator::{FeedNavigator, NavigationOutcome, VisibilityOutcome};
pub use shared::{with_navigator, SharedNavigator};
pub use slot::{FeedSlot, PlaybackState};
pub use visibility::VisibilityEvent;

// WASM browser build modules
#[cfg(feature = "wasm")]
pub mod wasm;
