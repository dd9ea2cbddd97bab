//! # Macroflow: deterministic macroeconomic causal-graph simulator
//!
//! Macroflow is the core of an educational simulator: eight macroeconomic
//! input deltas propagate through a fixed causal graph into ten node scores,
//! and a rule-based generator turns thresholds on those scores into short
//! natural-language insights. An optional advisory collaborator forwards the
//! input snapshot to an external LLM and hands back opaque narrative text.
//!
//! ## Core concepts
//!
//! - **InputVector**: the 8-field snapshot of macro variable deltas driving
//!   one evaluation
//! - **Propagation engine**: a pure, single-pass evaluation of the ten node
//!   scores with fixed illustrative coefficients
//! - **Insight generator**: six ordered threshold rules, first-four
//!   truncation, one fallback message at equilibrium
//! - **Session**: presentation-owned state that recomputes on every change
//! - **Advisory**: a capability trait for external text generation, with a
//!   deterministic stub for tests
//!
//! ## Quick start
//!
//! ```
//! use macroflow::input::{Field, InputVector};
//! use macroflow::session::Session;
//!
//! let mut session = Session::new();
//!
//! // Load a preset, then nudge one slider.
//! session.apply_scenario("export_boom").unwrap();
//! session.set_field(Field::OilPrice, 10.0);
//!
//! let result = session.result();
//! assert_eq!(result.scores.oil, 0.5);
//! assert!(!result.insights.is_empty());
//! ```
//!
//! The engine is also usable standalone, without a session:
//!
//! ```
//! use macroflow::engine::propagate;
//! use macroflow::input::InputVector;
//!
//! let scores = propagate(&InputVector { oil_price: 20.0, ..Default::default() });
//! assert_eq!(scores.oil, 1.0); // input-echo node
//! ```
//!
//! ## Determinism
//!
//! Both core stages are pure and total over finite inputs: no I/O, no
//! branching that can fail, no stochasticity, and bit-for-bit identical
//! results on recomputation. The visual feedback edge from price to interest
//! is a one-way contribution inside a single pass, never an iterative solve.
//!
//! ## Module guide
//!
//! - [`input`] - Input snapshot, field domains, impact normalization
//! - [`node`] - Node identifiers and score mappings
//! - [`engine`] - The propagation engine
//! - [`insight`] - Rule-based insight generation
//! - [`scenario`] - Named preset catalog
//! - [`layout`] - Static presentation layout (renderers only)
//! - [`session`] - Presentation-owned state and recomputation
//! - [`advisory`] - External advisory-text collaborator
//! - [`events`] - Simulation lifecycle events
//! - [`telemetry`] - Tracing bootstrap for binaries

pub mod advisory;
pub mod engine;
pub mod events;
pub mod input;
pub mod insight;
pub mod layout;
pub mod node;
pub mod scenario;
pub mod session;
pub mod telemetry;
