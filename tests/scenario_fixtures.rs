//! The scenario catalog as a deterministic fixture set: every preset must
//! reproduce the same scores and insights on every run.

mod common;

use common::assert_close;
use macroflow::engine::propagate;
use macroflow::insight::{EQUILIBRIUM_MESSAGE, generate};
use macroflow::scenario::{self, CATALOG, DEFAULT_SCENARIO};

#[test]
fn every_preset_reproduces_identically() {
    for preset in &CATALOG {
        let first = propagate(&preset.inputs);
        let second = propagate(&preset.inputs);
        assert_eq!(first, second, "scenario {} not reproducible", preset.id);

        let insights_a = generate(&preset.inputs.impacts(), &first);
        let insights_b = generate(&preset.inputs.impacts(), &second);
        assert_eq!(insights_a, insights_b);
    }
}

#[test]
fn default_preset_is_the_equilibrium_fixpoint() {
    let neutral = scenario::find(DEFAULT_SCENARIO).unwrap();
    let scores = propagate(&neutral.inputs);
    assert!(scores.is_equilibrium());
    let insights = generate(&neutral.inputs.impacts(), &scores);
    assert_eq!(insights, vec![EQUILIBRIUM_MESSAGE.to_string()]);
}

#[test]
fn export_boom_matches_hand_worked_mapping() {
    // exchange 5 → 0.5, export 8 → 0.8, consumption 3 → 0.3,
    // employment 5 → 0.5, unemployment -1 → -0.2.
    let boom = scenario::find("export_boom").unwrap();
    let scores = propagate(&boom.inputs);

    assert_close(scores.price, 0.27, "price");
    assert_close(scores.consumption, 0.735, "consumption");
    assert_close(scores.investment, 0.894, "investment");
    assert_close(scores.stock, 0.8304, "stock");
    assert_close(scores.bond, -0.108, "bond");
    assert_close(scores.real_estate, 0.3205, "realEstate");
    assert_close(scores.export, 1.1, "export");
    assert_close(scores.interest, 0.081, "interest");
    assert_eq!(scores.oil, 0.0);
    assert_eq!(scores.exchange, 0.5);
}

#[test]
fn export_boom_fires_only_the_employment_rule() {
    let boom = scenario::find("export_boom").unwrap();
    let insights = generate(&boom.inputs.impacts(), &propagate(&boom.inputs));
    assert_eq!(insights.len(), 1);
    assert!(insights[0].contains("employment"));
}

#[test]
fn recession_preset_reads_as_a_downturn() {
    let recession = scenario::find("recession").unwrap();
    let scores = propagate(&recession.inputs);
    // Demand collapses while the accompanying rate cut props up bonds.
    assert!(scores.consumption < 0.0);
    assert!(scores.price < 0.0);
    assert!(scores.bond > 0.0);

    let insights = generate(&recession.inputs.impacts(), &scores);
    assert!(insights[0].contains("unemployment"));
}
