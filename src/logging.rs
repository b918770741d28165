//! Logging initialization
//!
//! Logs go to stderr so stdout stays reserved for the split report and
//! generated completions.
//!
//! ```bash
//! # Resolution decisions
//! dilu -v split --enter src/main.ts
//!
//! # Module-specific filtering
//! RUST_LOG=dilu::graph=trace dilu split --enter src/main.ts
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber (`RUST_LOG` takes precedence over `verbose`)
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests calling main paths) is harmless.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
