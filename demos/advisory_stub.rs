//! Drive a session with lifecycle events and a stubbed advisory provider.
//!
//! Run with:
//! ```bash
//! cargo run --example advisory_stub
//! ```
//!
//! Swap in the `llm` feature and `GeminiAdvisor::from_env()` for a live
//! provider (requires `GEMINI_API_KEY`).

use macroflow::advisory::StaticAdvisor;
use macroflow::events::event_channel;
use macroflow::input::Field;
use macroflow::session::{AdvisorySlot, Session};
use macroflow::telemetry;
use tracing::info;

#[tokio::main]
async fn main() {
    telemetry::init();

    let (emitter, tap) = event_channel();
    let mut session = Session::with_events(emitter);

    session.apply_scenario("inflation_shock").unwrap();
    session.set_field(Field::ExchangeRate, 6.0);

    let result = session.result();
    info!(stock = result.scores.stock, bond = result.scores.bond, "market view");
    for message in &result.insights {
        info!("insight: {message}");
    }

    let advisor = StaticAdvisor::new(
        "Inflation pressure with a soft currency argues for commodity exposure, \
         short-duration bonds, and exporters; trim long-duration bonds.",
    );
    session.request_advisory(&advisor).await;

    match session.advisory() {
        AdvisorySlot::Ready(text) => info!("advisory: {text}"),
        AdvisorySlot::Failed(placeholder) => info!("advisory failed: {placeholder}"),
        other => info!(?other, "advisory slot"),
    }

    for stamped in tap.drain() {
        info!(at = %stamped.at, event = ?stamped.event, "lifecycle");
    }
}
