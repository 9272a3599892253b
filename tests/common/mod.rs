// Common test utilities

pub mod tracing;

use feednav::{FeedNavigator, NavigatorConfig, RecordingHost};

/// Navigator over `slot_count` slots with default config and a recording host
#[allow(dead_code)]
pub fn recording_navigator(slot_count: usize) -> FeedNavigator<RecordingHost> {
    self::tracing::init_tracing_from_env();
    FeedNavigator::new(slot_count, NavigatorConfig::default(), RecordingHost::new())
        .expect("non-empty feed with default config")
}
