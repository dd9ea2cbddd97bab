//! Walk every catalog scenario through the engine and print the resulting
//! node scores and insights.
//!
//! Run with:
//! ```bash
//! cargo run --example scenario_walkthrough
//! ```

use macroflow::engine::propagate;
use macroflow::insight::generate;
use macroflow::scenario::CATALOG;
use macroflow::telemetry;
use tracing::info;

fn main() {
    telemetry::init();

    for preset in &CATALOG {
        let scores = propagate(&preset.inputs);
        let insights = generate(&preset.inputs.impacts(), &scores);

        info!(scenario = preset.id, label = preset.label, "evaluating");
        for (id, score) in scores.iter() {
            info!("  {id:<12} {score:>+8.4}");
        }
        for (i, message) in insights.iter().enumerate() {
            info!("  insight {}: {message}", i + 1);
        }
    }
}
