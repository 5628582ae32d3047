use std::str::FromStr;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable (`trace`,
/// `debug`, `info`, `warn`, `error`), defaulting to `info`. Safe to call more
/// than once; only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = std::env::var("LOGLEVEL")
            .ok()
            .and_then(|v| Level::from_str(&v).ok())
            .unwrap_or(Level::INFO);

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    });
}
