//! Named preset input vectors.
//!
//! The catalog is static and ordered; selecting a scenario replaces the whole
//! input vector atomically. Presets are also a convenient deterministic
//! fixture set for tests, since the engine evaluates them unmodified.

use crate::input::InputVector;
use serde::Serialize;

/// A named preset input vector.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    /// Stable identifier, unique within the catalog.
    pub id: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// The complete input vector this scenario loads.
    pub inputs: InputVector,
}

/// Identifier of the neutral catalog entry (all deltas zero).
pub const DEFAULT_SCENARIO: &str = "default";

/// The static scenario catalog, in display order.
///
/// The first entry is the neutral equilibrium; the rest load representative
/// macro situations.
pub const CATALOG: [Scenario; 5] = [
    Scenario {
        id: DEFAULT_SCENARIO,
        label: "Baseline (equilibrium)",
        inputs: InputVector {
            interest_rate: 0.0,
            inflation: 0.0,
            exchange_rate: 0.0,
            oil_price: 0.0,
            export_change: 0.0,
            consumption_change: 0.0,
            unemployment_rate: 0.0,
            employment_index: 0.0,
        },
    },
    Scenario {
        id: "high_interest",
        label: "Rate hike (monetary tightening)",
        inputs: InputVector {
            interest_rate: 1.5,
            inflation: -0.5,
            exchange_rate: 0.0,
            oil_price: 0.0,
            export_change: 0.0,
            consumption_change: -2.0,
            unemployment_rate: 0.5,
            employment_index: 0.0,
        },
    },
    Scenario {
        id: "inflation_shock",
        label: "Inflation shock (price surge)",
        inputs: InputVector {
            interest_rate: 0.5,
            inflation: 2.5,
            exchange_rate: 0.0,
            oil_price: 15.0,
            export_change: 0.0,
            consumption_change: -1.0,
            unemployment_rate: 0.0,
            employment_index: 0.0,
        },
    },
    Scenario {
        id: "export_boom",
        label: "Export boom (expansion)",
        inputs: InputVector {
            interest_rate: 0.0,
            inflation: 0.0,
            exchange_rate: 5.0,
            oil_price: 0.0,
            export_change: 8.0,
            consumption_change: 3.0,
            unemployment_rate: -1.0,
            employment_index: 5.0,
        },
    },
    Scenario {
        id: "recession",
        label: "Recession (compound downturn)",
        inputs: InputVector {
            interest_rate: -1.0,
            inflation: 0.0,
            exchange_rate: 0.0,
            oil_price: 0.0,
            export_change: -5.0,
            consumption_change: -8.0,
            unemployment_rate: 2.0,
            employment_index: -5.0,
        },
    },
];

/// Look up a scenario by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.id == id)
}
