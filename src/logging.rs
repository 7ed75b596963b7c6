use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls, or a subscriber installed by
/// someone else, leave the existing one in place.
pub fn init(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

/// Only logs when `RUST_LOG` is set, so interactive output stays clean.
pub fn init_from_env() {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init(&filter);
    }
}
