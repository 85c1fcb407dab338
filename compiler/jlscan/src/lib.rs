//! Reference host for the Julia external scanner.
//!
//! Drives [`jl_scanner::Scanner`] over whole source files the way a
//! generated parser would, and exposes the result through the `jlscan` CLI.

pub mod commands;
pub mod error;
pub mod tokenize;

pub use error::CliError;
pub use tokenize::{tokenize, Token, TokenKind, TokenizeError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=jlscan=debug` or `RUST_LOG=jl_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
