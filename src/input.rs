//! Input snapshot types for the simulator.
//!
//! This module defines the [`InputVector`] (the eight macroeconomic deltas that
//! drive one evaluation), the declared slider domains for each field, and the
//! fixed-scale normalization into internal [`Impacts`] units shared by the
//! propagation engine and the insight generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight macroeconomic input deltas driving one evaluation.
///
/// Each field is a percentage or percentage-point delta relative to an assumed
/// baseline; the all-zero vector is the equilibrium state. The vector is plain
/// data: the engine borrows it immutably and never mutates it.
///
/// The declared `(min, max, step)` domains in [`Field::domain`] describe the
/// operating envelope presentation controls should enforce. The engine itself
/// accepts any finite value without validation; out-of-envelope inputs are
/// evaluated as-is rather than rejected.
///
/// # Examples
///
/// ```
/// use macroflow::input::InputVector;
///
/// // Equilibrium: every delta zero.
/// let baseline = InputVector::default();
/// assert_eq!(baseline.interest_rate, 0.0);
///
/// // A tightening shock.
/// let shock = InputVector {
///     interest_rate: 1.5,
///     consumption_change: -2.0,
///     ..InputVector::default()
/// };
/// assert_eq!(shock.impacts().interest, 1.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputVector {
    /// Policy rate change in percentage points.
    pub interest_rate: f64,
    /// Inflation rate change in percent.
    pub inflation: f64,
    /// Exchange rate change in percent (positive = weaker local currency).
    pub exchange_rate: f64,
    /// Crude oil price change in percent.
    pub oil_price: f64,
    /// Export volume change in percent.
    pub export_change: f64,
    /// Private consumption sentiment change in percent.
    pub consumption_change: f64,
    /// Unemployment rate change in percentage points.
    pub unemployment_rate: f64,
    /// Employment index change in index points.
    pub employment_index: f64,
}

impl InputVector {
    /// Normalize this vector into internal impact units.
    ///
    /// See [`Impacts`] for the fixed per-field scale factors.
    #[must_use]
    pub fn impacts(&self) -> Impacts {
        Impacts::from_input(self)
    }

    /// Read one field by its [`Field`] identifier.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::InterestRate => self.interest_rate,
            Field::Inflation => self.inflation,
            Field::ExchangeRate => self.exchange_rate,
            Field::OilPrice => self.oil_price,
            Field::ExportChange => self.export_change,
            Field::ConsumptionChange => self.consumption_change,
            Field::UnemploymentRate => self.unemployment_rate,
            Field::EmploymentIndex => self.employment_index,
        }
    }

    /// Write one field by its [`Field`] identifier.
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::InterestRate => self.interest_rate = value,
            Field::Inflation => self.inflation = value,
            Field::ExchangeRate => self.exchange_rate = value,
            Field::OilPrice => self.oil_price = value,
            Field::ExportChange => self.export_change = value,
            Field::ConsumptionChange => self.consumption_change = value,
            Field::UnemploymentRate => self.unemployment_rate = value,
            Field::EmploymentIndex => self.employment_index = value,
        }
    }
}

/// Identifies one of the eight [`InputVector`] fields.
///
/// Stable string keys match the serialized field names, so presentation layers
/// can address sliders and serialized snapshots with the same identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    InterestRate,
    Inflation,
    ExchangeRate,
    OilPrice,
    ExportChange,
    ConsumptionChange,
    UnemploymentRate,
    EmploymentIndex,
}

impl Field {
    /// All fields in declaration order (the order presentation controls list them).
    pub const ALL: [Field; 8] = [
        Field::InterestRate,
        Field::Inflation,
        Field::ExchangeRate,
        Field::OilPrice,
        Field::ExportChange,
        Field::ConsumptionChange,
        Field::UnemploymentRate,
        Field::EmploymentIndex,
    ];

    /// Stable string key for this field.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Field::InterestRate => "interestRate",
            Field::Inflation => "inflation",
            Field::ExchangeRate => "exchangeRate",
            Field::OilPrice => "oilPrice",
            Field::ExportChange => "exportChange",
            Field::ConsumptionChange => "consumptionChange",
            Field::UnemploymentRate => "unemploymentRate",
            Field::EmploymentIndex => "employmentIndex",
        }
    }

    /// Declared operating envelope for presentation controls.
    ///
    /// The envelope is advisory: the engine evaluates any finite value.
    #[must_use]
    pub fn domain(&self) -> FieldDomain {
        match self {
            Field::InterestRate => FieldDomain::new(-2.0, 2.0, 0.25),
            Field::Inflation => FieldDomain::new(-3.0, 3.0, 0.5),
            Field::ExchangeRate => FieldDomain::new(-10.0, 10.0, 1.0),
            Field::OilPrice => FieldDomain::new(-20.0, 20.0, 5.0),
            Field::ExportChange => FieldDomain::new(-10.0, 10.0, 1.0),
            Field::ConsumptionChange => FieldDomain::new(-10.0, 10.0, 1.0),
            Field::UnemploymentRate => FieldDomain::new(-2.0, 2.0, 0.1),
            Field::EmploymentIndex => FieldDomain::new(-10.0, 10.0, 1.0),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Declared `(min, max, step)` envelope for one input field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into this envelope. Used by presentation controls, never
    /// by the engine.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Raw inputs normalized into internal impact units.
///
/// Each field carries a fixed empirical scale factor encoding its relative
/// real-world sensitivity. The factors are illustrative weights, not estimated
/// parameters, and are preserved exactly for behavioral compatibility:
///
/// | input               | factor |
/// |---------------------|--------|
/// | interest_rate       | 1.0    |
/// | inflation           | 0.5    |
/// | exchange_rate       | 0.1    |
/// | oil_price           | 0.05   |
/// | export_change       | 0.1    |
/// | consumption_change  | 0.1    |
/// | unemployment_rate   | 0.2    |
/// | employment_index    | 0.1    |
///
/// Both the propagation engine and the insight generator consume this value,
/// so the two stages provably share one scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Impacts {
    pub interest: f64,
    pub inflation: f64,
    pub exchange: f64,
    pub oil: f64,
    pub export: f64,
    pub consumption: f64,
    pub unemployment: f64,
    pub employment: f64,
}

impl Impacts {
    /// Apply the fixed scale factors to a raw input vector.
    #[must_use]
    pub fn from_input(input: &InputVector) -> Self {
        Self {
            interest: input.interest_rate,
            inflation: input.inflation * 0.5,
            exchange: input.exchange_rate * 0.1,
            oil: input.oil_price * 0.05,
            export: input.export_change * 0.1,
            consumption: input.consumption_change * 0.1,
            unemployment: input.unemployment_rate * 0.2,
            employment: input.employment_index * 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_equilibrium() {
        let v = InputVector::default();
        for field in Field::ALL {
            assert_eq!(v.get(field), 0.0);
        }
    }

    #[test]
    fn impacts_apply_fixed_scales() {
        let v = InputVector {
            interest_rate: 2.0,
            inflation: 2.0,
            exchange_rate: 5.0,
            oil_price: 20.0,
            export_change: 10.0,
            consumption_change: -10.0,
            unemployment_rate: 1.0,
            employment_index: 5.0,
        };
        let n = v.impacts();
        assert_eq!(n.interest, 2.0);
        assert_eq!(n.inflation, 1.0);
        assert_eq!(n.exchange, 0.5);
        assert_eq!(n.oil, 1.0);
        assert_eq!(n.export, 1.0);
        assert_eq!(n.consumption, -1.0);
        assert_eq!(n.unemployment, 0.2);
        assert_eq!(n.employment, 0.5);
    }

    #[test]
    fn get_set_round_trip() {
        let mut v = InputVector::default();
        v.set(Field::OilPrice, 15.0);
        assert_eq!(v.get(Field::OilPrice), 15.0);
        assert_eq!(v.oil_price, 15.0);
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let v = InputVector {
            interest_rate: 1.5,
            ..InputVector::default()
        };
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["interestRate"], 1.5);
        assert_eq!(json["employmentIndex"], 0.0);
    }

    #[test]
    fn domain_clamp_is_presentation_only() {
        let d = Field::InterestRate.domain();
        assert_eq!(d.clamp(5.0), 2.0);
        // The engine path performs no clamping.
        let v = InputVector {
            interest_rate: 5.0,
            ..InputVector::default()
        };
        assert_eq!(v.impacts().interest, 5.0);
    }
}
