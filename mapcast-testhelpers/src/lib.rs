//! Shared test setup for the mapcast crates.
//!
//! Call [`setup`] at the top of a test to get `tracing` output from the code
//! under test. The filter is read from `MAPCAST_LOG` (same syntax as
//! `tracing_subscriber::filter::Targets`, e.g. `mapcast=trace`) and defaults
//! to `debug`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Reference point for the timestamps on every log line.
static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Prints time since the first [`setup`] call as `seconds.millis`.
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Installs the subscriber on first access.
///
/// Every test binary runs its tests on several threads of one process, so the
/// global subscriber has to be set exactly once no matter which test calls
/// [`setup`] first.
static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    // start the uptime clock together with the subscriber
    let _ = *START_TIME;

    let filter = std::env::var("MAPCAST_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::DEBUG));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(Uptime)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the global tracing subscriber for tests.
///
/// Safe to call from every test: the subscriber is initialized exactly once
/// per process, and a subscriber installed by someone else is left in place.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_is_idempotent_and_uptime_is_padded() {
        setup();
        setup();
        tracing::debug!("subscriber installed");

        let mut line = String::new();
        Uptime.format_time(&mut Writer::new(&mut line)).unwrap();
        let (secs, millis) = line.trim_end_matches('s').split_once('.').unwrap();
        assert_eq!(secs.len(), 4);
        assert_eq!(millis.len(), 3);
        assert!(secs.trim_start().parse::<u64>().is_ok());
    }
}
