//! External advisory-text collaborator.
//!
//! The advisory feature sends the current input snapshot to an external
//! text-generation service and displays the reply verbatim. The core never
//! parses the response: it is opaque display text. The collaborator sits
//! behind the minimal [`AdvisoryProvider`] capability trait so the session
//! and its tests never depend on a concrete provider.
//!
//! A failed call surfaces as an [`AdvisoryError`], which the session converts
//! into a single placeholder message. Failures never propagate through the
//! propagation or insight computation.
//!
//! Enable the `llm` feature for the `rig`-backed Gemini provider; tests and
//! demos use the deterministic [`StaticAdvisor`].

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

use crate::input::InputVector;

mod prompt;
#[cfg(feature = "llm")]
pub mod rig;

pub use prompt::build_prompt;

/// Placeholder display text substituted when an advisory call fails.
pub const FAILURE_PLACEHOLDER: &str =
    "The advisory analysis could not be completed. Please try again in a moment.";

/// Errors from the external advisory collaborator.
#[derive(Debug, Error, Diagnostic)]
pub enum AdvisoryError {
    /// The provider rejected or failed the request.
    #[error("advisory provider error ({provider}): {message}")]
    #[diagnostic(
        code(macroflow::advisory::provider),
        help("Check provider credentials and connectivity; the simulator core is unaffected.")
    )]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// The provider answered, but with nothing displayable.
    #[error("advisory provider ({provider}) returned an empty response")]
    #[diagnostic(code(macroflow::advisory::empty_response))]
    EmptyResponse { provider: &'static str },
}

/// Capability trait for the external advisory collaborator.
///
/// One operation: turn an input snapshot into free-form narrative text.
/// Asynchronous, fallible, no latency bound. Implementations must not block
/// the caller's recomputation path; the session awaits the future on its own
/// terms.
///
/// # Examples
///
/// ```
/// use macroflow::advisory::{AdvisoryProvider, StaticAdvisor};
/// use macroflow::input::InputVector;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let advisor = StaticAdvisor::new("Hold bonds; trim equities.");
/// let text = advisor.advise(&InputVector::default()).await.unwrap();
/// assert_eq!(text, "Hold bonds; trim equities.");
/// # });
/// ```
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    /// Produce narrative advisory text for the given snapshot.
    async fn advise(&self, snapshot: &InputVector) -> Result<String, AdvisoryError>;
}

/// Deterministic in-process provider returning a fixed reply.
///
/// The substitute used by tests and demos so nothing depends on a live
/// external service.
#[derive(Clone, Debug)]
pub struct StaticAdvisor {
    reply: String,
}

impl StaticAdvisor {
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AdvisoryProvider for StaticAdvisor {
    async fn advise(&self, _snapshot: &InputVector) -> Result<String, AdvisoryError> {
        Ok(self.reply.clone())
    }
}

/// Provider that always fails. Exercises the placeholder path in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingAdvisor;

#[async_trait]
impl AdvisoryProvider for FailingAdvisor {
    async fn advise(&self, _snapshot: &InputVector) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::Provider {
            provider: "failing-advisor",
            message: "simulated outage".to_string(),
        })
    }
}
