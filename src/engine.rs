//! The propagation engine: one deterministic pass over the causal graph.
//!
//! [`propagate`] turns an [`InputVector`] into a complete [`NodeScores`]
//! mapping. The function is pure, total, and deterministic: every finite input
//! produces a finite output, there is no I/O, no branching that can fail, and
//! repeated calls on the same input are bit-for-bit identical.
//!
//! # Evaluation model
//!
//! Evaluation is a single acyclic pass in a fixed dependency order. Each
//! derived formula references only normalized inputs and already-computed
//! upstream scores. The presentation layout draws a feedback edge from price
//! back to interest; that edge is cosmetic. The engine realizes it as a single
//! additive contribution into the interest output score and never iterates
//! toward a fixed point.

use crate::input::{Impacts, InputVector};
use crate::node::NodeScores;

/// Evaluate the full node-score mapping for one input vector.
///
/// Step 1 normalizes the raw inputs into impact units ([`Impacts`]); Step 2
/// evaluates the derived nodes in dependency order with fixed illustrative
/// coefficients approximating qualitative macro relationships (Phillips-curve
/// style unemployment/inflation trade-off, interest-rate transmission to asset
/// prices, import-price pass-through via the exchange rate).
///
/// Oil and exchange are input-echo nodes: their output scores are the
/// normalized inputs unchanged. The interest output is the normalized input
/// plus the one-way price feedback term.
///
/// # Examples
///
/// ```
/// use macroflow::engine::propagate;
/// use macroflow::input::InputVector;
///
/// // Equilibrium in, equilibrium out.
/// let scores = propagate(&InputVector::default());
/// assert!(scores.is_equilibrium());
///
/// // A pure rate shock transmits to bonds at full weight.
/// let scores = propagate(&InputVector {
///     interest_rate: 1.0,
///     ..InputVector::default()
/// });
/// assert_eq!(scores.bond, -1.0);
/// ```
#[must_use]
pub fn propagate(input: &InputVector) -> NodeScores {
    propagate_impacts(&input.impacts())
}

/// Evaluate from already-normalized impacts.
///
/// [`propagate`] is the usual entry point; this variant lets a caller that
/// already holds the [`Impacts`] (the session does, for the insight stage)
/// avoid normalizing twice.
#[must_use]
pub fn propagate_impacts(n: &Impacts) -> NodeScores {
    // Dependency order: price feeds consumption, consumption feeds investment
    // and the market nodes. Later formulas must only read earlier scores.
    let price =
        n.inflation + n.oil * 0.8 + n.exchange * 0.3 + n.consumption * 0.2 - n.unemployment * 0.3;

    let consumption = n.consumption - n.interest * 0.6 - price * 0.5 + n.export * 0.2
        - n.unemployment * 0.8
        + n.employment * 0.5;

    let investment =
        -n.interest * 0.8 + n.export * 0.5 + consumption * 0.4 + n.employment * 0.4;

    let stock = investment * 0.6 + consumption * 0.4 - n.oil * 0.3 - n.interest * 0.4;

    let bond = -n.interest * 1.0 - price * 0.4;

    let real_estate = -n.interest * 0.9 + consumption * 0.3 - n.unemployment * 0.5;

    let export = n.export + n.exchange * 0.6;

    // One-way feedback contribution; not a cycle.
    let interest = n.interest + price * 0.3;

    NodeScores {
        interest,
        oil: n.oil,
        exchange: n.exchange,
        price,
        export,
        consumption,
        investment,
        stock,
        bond,
        real_estate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_is_a_fixpoint() {
        assert!(propagate(&InputVector::default()).is_equilibrium());
    }

    #[test]
    fn oil_and_exchange_echo_through() {
        let scores = propagate(&InputVector {
            oil_price: 20.0,
            exchange_rate: -10.0,
            ..InputVector::default()
        });
        assert_eq!(scores.oil, 1.0);
        assert_eq!(scores.exchange, -1.0);
    }

    #[test]
    fn interest_output_carries_price_feedback() {
        // inflation 2.0 -> normalized 1.0 -> price 1.0 -> interest 0.3.
        let scores = propagate(&InputVector {
            inflation: 2.0,
            ..InputVector::default()
        });
        assert_eq!(scores.price, 1.0);
        assert_eq!(scores.interest, 0.3);
    }

    #[test]
    fn bond_formula_is_exact() {
        let scores = propagate(&InputVector {
            interest_rate: 1.0,
            ..InputVector::default()
        });
        assert_eq!(scores.bond, -1.0);
    }

    #[test]
    fn downstream_nodes_follow_dependency_chain() {
        let input = InputVector {
            interest_rate: 1.0,
            inflation: 1.0,
            unemployment_rate: 0.5,
            ..InputVector::default()
        };
        let n = input.impacts();
        let scores = propagate(&input);

        let price = n.inflation - n.unemployment * 0.3;
        let consumption = -n.interest * 0.6 - price * 0.5 - n.unemployment * 0.8;
        let investment = -n.interest * 0.8 + consumption * 0.4;

        assert_eq!(scores.price, price);
        assert_eq!(scores.consumption, consumption);
        assert_eq!(scores.investment, investment);
        assert_eq!(
            scores.stock,
            investment * 0.6 + consumption * 0.4 - n.interest * 0.4
        );
        assert_eq!(
            scores.real_estate,
            -n.interest * 0.9 + consumption * 0.3 - n.unemployment * 0.5
        );
    }

    #[test]
    fn engine_tolerates_out_of_envelope_inputs() {
        // Far past the declared slider domains; still finite, still linear.
        let scores = propagate(&InputVector {
            interest_rate: 100.0,
            oil_price: -500.0,
            ..InputVector::default()
        });
        assert!(scores.iter().all(|(_, s)| s.is_finite()));
        assert_eq!(scores.bond, -100.0 - scores.price * 0.4);
    }
}
