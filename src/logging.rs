//! Logging setup.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to
//! the embedding program. These helpers install a compact `fmt` subscriber
//! for tools and tests that have none of their own.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, EnvFilter};

use crate::runner::plugin::config::RuntimeConfig;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install a subscriber at the default level. `RUST_LOG` wins when set.
pub fn init() {
    init_with_config(&RuntimeConfig::from_env());
}

/// Install a subscriber at `config.log_level`. `RUST_LOG` wins when set.
///
/// Calling this more than once, or after another subscriber was installed,
/// leaves the existing one in place.
pub fn init_with_config(config: &RuntimeConfig) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("argconv={}", config.log_level)))
        .unwrap_or_else(|_| EnvFilter::new("argconv=info"));

    if fmt().with_env_filter(filter).compact().try_init().is_err() {
        tracing::debug!("subscriber already installed");
    }
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}
