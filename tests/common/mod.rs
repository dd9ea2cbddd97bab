#![allow(dead_code)]

use macroflow::input::InputVector;

/// Absolute tolerance for hand-derived floating-point expectations.
///
/// Determinism checks still use exact equality; this is only for comparing
/// engine output against decimal literals worked out by hand.
pub const EPS: f64 = 1e-12;

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

/// An input vector that trips every insight rule at once: high unemployment
/// and employment readings, a strong rate and price shock, a weak currency,
/// and a collapsing equity score.
pub fn all_rules_firing() -> InputVector {
    InputVector {
        interest_rate: 2.0,
        inflation: 3.0,
        exchange_rate: 6.0,
        oil_price: 20.0,
        export_change: 0.0,
        consumption_change: 0.0,
        unemployment_rate: 2.0,
        employment_index: 3.0,
    }
}
