#![cfg(test)]

use std::sync::Once;

/// Install the navigator's log output for tests, filtered by `RUST_LOG`
/// (e.g. `RUST_LOG=feednav=debug` to watch index changes and observer corrections).
pub fn init_tracing_from_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .without_time();
        let _ = subscriber.try_init();
    });
}
