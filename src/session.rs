//! Presentation-owned simulation state.
//!
//! A [`Session`] owns everything a rendering layer reads: the current
//! [`InputVector`], the selected scenario id, the cached [`SimulationResult`]
//! for that exact input vector, and the advisory display slot. The core
//! functions stay pure; the session is the single place where state changes.
//!
//! Every mutating operation recomputes the full result synchronously before
//! returning, so a reader never observes scores or insights that belong to a
//! previous input vector. Only the advisory exchange may suspend, and its
//! outcome lands in a display slot independent of the engine's own output.

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::advisory::{AdvisoryProvider, FAILURE_PLACEHOLDER};
use crate::engine::propagate_impacts;
use crate::events::{EventEmitterHandle, SimulationEvent};
use crate::input::{Field, InputVector};
use crate::insight;
use crate::node::NodeScores;
use crate::scenario::{self, DEFAULT_SCENARIO};

/// The engine and insight output for one input vector.
///
/// Immutable snapshot: readers may hold clones across later session changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub scores: NodeScores,
    pub insights: Vec<String>,
}

impl SimulationResult {
    /// Evaluate both stages for one input vector.
    ///
    /// Shares a single normalization pass between the engine and the insight
    /// generator.
    #[must_use]
    pub fn evaluate(input: &InputVector) -> Self {
        let impacts = input.impacts();
        let scores = propagate_impacts(&impacts);
        let insights = insight::generate(&impacts, &scores);
        Self { scores, insights }
    }
}

/// Display slot for the advisory collaborator's reply.
///
/// Independent of the engine output: advisory failures never disturb scores
/// or insights, and the slot never sticks in `Pending` once a request
/// resolves.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AdvisorySlot {
    /// No advisory requested for the current inputs.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The collaborator's narrative, displayed verbatim.
    Ready(String),
    /// The request failed; holds the placeholder message.
    Failed(String),
}

/// Errors from session operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    /// The requested scenario id is not in the catalog.
    #[error("unknown scenario id: {id}")]
    #[diagnostic(
        code(macroflow::session::unknown_scenario),
        help("Valid ids are listed in scenario::CATALOG.")
    )]
    UnknownScenario { id: String },
}

/// Owner of all mutable simulator state.
///
/// # Examples
///
/// ```
/// use macroflow::session::Session;
/// use macroflow::input::Field;
///
/// let mut session = Session::new();
/// session.set_field(Field::InterestRate, 1.0);
/// assert_eq!(session.result().scores.bond, -1.0);
///
/// session.reset();
/// assert!(session.result().scores.is_equilibrium());
/// ```
pub struct Session {
    id: String,
    inputs: InputVector,
    selected_scenario: &'static str,
    result: SimulationResult,
    advisory: AdvisorySlot,
    emitter: Option<EventEmitterHandle>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session at equilibrium, without an event channel.
    #[must_use]
    pub fn new() -> Self {
        let inputs = InputVector::default();
        Self {
            id: Uuid::new_v4().to_string(),
            result: SimulationResult::evaluate(&inputs),
            inputs,
            selected_scenario: DEFAULT_SCENARIO,
            advisory: AdvisorySlot::Idle,
            emitter: None,
        }
    }

    /// Create a session that emits [`SimulationEvent`]s on the given channel.
    #[must_use]
    pub fn with_events(emitter: EventEmitterHandle) -> Self {
        Self {
            emitter: Some(emitter),
            ..Self::new()
        }
    }

    /// Unique session identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current input vector.
    #[must_use]
    pub fn inputs(&self) -> &InputVector {
        &self.inputs
    }

    /// Currently selected scenario id. Manual edits fall back to the neutral
    /// catalog entry.
    #[must_use]
    pub fn selected_scenario(&self) -> &'static str {
        self.selected_scenario
    }

    /// Result for the current input vector. Always in sync with [`inputs`](Self::inputs).
    #[must_use]
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    /// Current advisory display slot.
    #[must_use]
    pub fn advisory(&self) -> &AdvisorySlot {
        &self.advisory
    }

    /// Adjust one input field.
    ///
    /// Deselects any active scenario and discards stale advisory text, then
    /// recomputes the result before returning.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn set_field(&mut self, field: Field, value: f64) {
        self.inputs.set(field, value);
        self.selected_scenario = DEFAULT_SCENARIO;
        self.clear_advisory();
        self.recompute();
        self.emit(SimulationEvent::FieldChanged { field, value });
    }

    /// Replace the whole input vector with a catalog preset.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn apply_scenario(&mut self, id: &str) -> Result<(), SessionError> {
        let scenario = scenario::find(id).ok_or_else(|| SessionError::UnknownScenario {
            id: id.to_string(),
        })?;
        self.inputs = scenario.inputs;
        self.selected_scenario = scenario.id;
        self.clear_advisory();
        self.recompute();
        self.emit(SimulationEvent::ScenarioApplied {
            id: scenario.id.to_string(),
        });
        Ok(())
    }

    /// Return to the equilibrium input vector.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn reset(&mut self) {
        self.inputs = InputVector::default();
        self.selected_scenario = DEFAULT_SCENARIO;
        self.clear_advisory();
        self.recompute();
        self.emit(SimulationEvent::Reset);
    }

    /// Drive one advisory exchange against the given provider.
    ///
    /// The outcome is delivered exactly once into the advisory slot: reply
    /// text verbatim on success, the fixed placeholder on failure. Scores and
    /// insights are untouched either way, and the slot never remains
    /// `Pending` after this call returns. Deduplication and cancellation of
    /// rapid repeated calls are the caller's policy, not the session's.
    #[instrument(skip(self, provider), fields(session = %self.id))]
    pub async fn request_advisory(&mut self, provider: &dyn AdvisoryProvider) {
        self.advisory = AdvisorySlot::Pending;
        self.emit(SimulationEvent::AdvisoryRequested);

        let snapshot = self.inputs;
        match provider.advise(&snapshot).await {
            Ok(text) => {
                debug!(chars = text.len(), "advisory delivered");
                self.advisory = AdvisorySlot::Ready(text);
                self.emit(SimulationEvent::AdvisoryDelivered { failed: false });
            }
            Err(error) => {
                warn!(%error, "advisory request failed");
                self.advisory = AdvisorySlot::Failed(FAILURE_PLACEHOLDER.to_string());
                self.emit(SimulationEvent::AdvisoryDelivered { failed: true });
            }
        }
    }

    fn clear_advisory(&mut self) {
        self.advisory = AdvisorySlot::Idle;
    }

    fn recompute(&mut self) {
        self.result = SimulationResult::evaluate(&self.inputs);
    }

    fn emit(&self, event: SimulationEvent) {
        if let Some(handle) = &self.emitter {
            handle.0.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{FailingAdvisor, StaticAdvisor};
    use crate::insight::EQUILIBRIUM_MESSAGE;

    #[test]
    fn new_session_sits_at_equilibrium() {
        let session = Session::new();
        assert!(session.result().scores.is_equilibrium());
        assert_eq!(session.result().insights, vec![EQUILIBRIUM_MESSAGE]);
        assert_eq!(session.selected_scenario(), DEFAULT_SCENARIO);
        assert_eq!(*session.advisory(), AdvisorySlot::Idle);
    }

    #[test]
    fn set_field_recomputes_and_deselects_scenario() {
        let mut session = Session::new();
        session.apply_scenario("export_boom").unwrap();
        assert_eq!(session.selected_scenario(), "export_boom");

        session.set_field(Field::InterestRate, 1.0);
        assert_eq!(session.selected_scenario(), DEFAULT_SCENARIO);
        assert_eq!(session.inputs().interest_rate, 1.0);
        // Scenario fields survive the single-field edit.
        assert_eq!(session.inputs().export_change, 8.0);
        assert_eq!(
            session.result().scores,
            SimulationResult::evaluate(session.inputs()).scores
        );
    }

    #[test]
    fn unknown_scenario_is_rejected_without_state_change() {
        let mut session = Session::new();
        session.set_field(Field::OilPrice, 10.0);
        let before = session.result().clone();

        let err = session.apply_scenario("stagflation").unwrap_err();
        assert!(matches!(err, SessionError::UnknownScenario { .. }));
        assert_eq!(*session.result(), before);
        assert_eq!(session.inputs().oil_price, 10.0);
    }

    #[tokio::test]
    async fn advisory_success_lands_in_slot_only() {
        let mut session = Session::new();
        session.set_field(Field::InterestRate, 1.0);
        let scores_before = session.result().scores;

        let advisor = StaticAdvisor::new("Overweight bonds.");
        session.request_advisory(&advisor).await;

        assert_eq!(
            *session.advisory(),
            AdvisorySlot::Ready("Overweight bonds.".to_string())
        );
        assert_eq!(session.result().scores, scores_before);
    }

    #[tokio::test]
    async fn advisory_failure_becomes_placeholder() {
        let mut session = Session::new();
        session.request_advisory(&FailingAdvisor).await;

        assert_eq!(
            *session.advisory(),
            AdvisorySlot::Failed(FAILURE_PLACEHOLDER.to_string())
        );
        // Session remains fully usable.
        session.set_field(Field::Inflation, 2.0);
        assert_eq!(*session.advisory(), AdvisorySlot::Idle);
        assert!(session.result().scores.price > 0.0);
    }

    #[test]
    fn input_changes_discard_stale_advisory() {
        let mut session = Session::new();
        session.advisory = AdvisorySlot::Ready("stale".to_string());
        session.apply_scenario("recession").unwrap();
        assert_eq!(*session.advisory(), AdvisorySlot::Idle);
    }
}
