//! Tracing bootstrap for binaries and demos.
//!
//! The library itself only emits `tracing` events; it never installs a
//! subscriber. Call [`init`] from an application entry point to get EnvFilter
//! driven, span-aware console output. Honors `RUST_LOG`.

use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the default console subscriber and miette panic hook.
///
/// Safe to call at most once per process; a second call is a no-op because a
/// global subscriber is already installed.
pub fn init() {
    // Pick up RUST_LOG from a local .env before the filter reads it.
    dotenvy::dotenv().ok();

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::CLOSE);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,macroflow=debug"))
        .expect("static filter directive parses");

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init();

    miette::set_panic_hook();
}
