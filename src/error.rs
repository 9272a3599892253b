//! Error types for feed construction and configuration
//!
//! Navigation itself never fails: a request at either end of the feed is a
//! regular [`NavigationOutcome`](crate::navigator::NavigationOutcome). Errors
//! only arise while building a navigator or wiring it to the page.

use thiserror::Error;

/// Configuration values that cannot drive a navigator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("visibility threshold must be in (0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("swipe threshold must be a finite, non-negative pixel distance, got {0}")]
    InvalidSwipeThreshold(f64),

    #[error("selector `{0}` must not be empty")]
    EmptySelector(&'static str),
}

/// Errors raised while creating or attaching a feed navigator
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The feed has no slots, so there is no valid current index
    #[error("feed has no video slots")]
    EmptyFeed,

    #[error("invalid navigator configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse navigator configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A slot container has no playable media element inside it
    #[error("slot {index} has no media element")]
    MissingMedia { index: usize },

    /// A browser API call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
