//! Logging setup helpers
//!
//! The crate logs through `tracing` under the `gltex` target: storage
//! allocation and deletion at debug level, binds, evictions and uploads at
//! trace level. These helpers install a `tracing-subscriber` formatter for
//! applications that do not configure one themselves.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize a subscriber honouring `RUST_LOG`, defaulting to
/// `gltex=info,gltex-glow=info,warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gltex=info,gltex-glow=info,warn".into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize a subscriber with a custom filter directive
pub fn init_tracing_with_filter(filter: &str) {
    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize a verbose subscriber that shows every bind and upload
pub fn init_tracing_dev() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gltex=trace,gltex-glow=debug,info".into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}
