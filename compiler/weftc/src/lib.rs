//! Weft compiler front end.
//!
//! The binary (`weftc`) is a thin argument dispatcher over [`commands`].
//! Everything it does is reachable from here so it can be tested without
//! spawning processes.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=weft_scope=debug weftc check site/index.weft`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
