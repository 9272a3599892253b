//! Navigator configuration
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields the stock feed behavior: 80% visibility threshold, 50px swipes,
//! smooth scrolling and suppressed native wheel scrolling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, NavigatorError};
use crate::host::ScrollBehavior;

/// Most verbose level written to the browser console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Configuration for a feed navigator instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Visible fraction a slot must reach to count as "in view" (0 < t <= 1)
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,

    /// Vertical touch travel in CSS pixels that a swipe must strictly exceed
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,

    /// How scroll commands animate
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,

    /// Suppress the browser's own wheel scrolling so only navigator scrolls happen
    #[serde(default = "default_true")]
    pub suppress_native_wheel: bool,

    /// Step through the feed with ArrowUp/ArrowDown/PageUp/PageDown
    #[serde(default)]
    pub keyboard_navigation: bool,

    /// CSS selector for slot containers inside the feed
    #[serde(default = "default_slot_selector")]
    pub slot_selector: String,

    /// CSS selector for the media element inside a slot
    #[serde(default = "default_media_selector")]
    pub media_selector: String,

    /// Console log verbosity for the browser build
    #[serde(default)]
    pub console_log_level: LogLevel,
}

fn default_visibility_threshold() -> f64 {
    0.8
}

fn default_swipe_threshold_px() -> f64 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_slot_selector() -> String {
    ".video-card".to_string()
}

fn default_media_selector() -> String {
    "video".to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            swipe_threshold_px: default_swipe_threshold_px(),
            scroll_behavior: ScrollBehavior::default(),
            suppress_native_wheel: true,
            keyboard_navigation: false,
            slot_selector: default_slot_selector(),
            media_selector: default_media_selector(),
            console_log_level: LogLevel::default(),
        }
    }
}

impl NavigatorConfig {
    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, NavigatorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can drive a navigator
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons
        if !(self.visibility_threshold > 0.0 && self.visibility_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.visibility_threshold));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold_px));
        }
        if self.slot_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("slot_selector"));
        }
        if self.media_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector("media_selector"));
        }
        Ok(())
    }
}
