//! Simulation lifecycle events.
//!
//! The session emits a [`SimulationEvent`] for every discrete state change
//! (field edits, scenario application, reset, advisory lifecycle) over a
//! flume channel. Observers such as logging or UI layers subscribe through an
//! [`EventTap`]; the session keeps working if every receiver is dropped, so
//! emission is strictly fire-and-forget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::Field;

/// One discrete simulation lifecycle event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A single input field changed through manual adjustment.
    FieldChanged { field: Field, value: f64 },
    /// A scenario preset replaced the whole input vector.
    ScenarioApplied { id: String },
    /// The input vector returned to equilibrium.
    Reset,
    /// An advisory exchange started.
    AdvisoryRequested,
    /// An advisory exchange delivered text into the display slot.
    AdvisoryDelivered { failed: bool },
}

/// A [`SimulationEvent`] stamped with its emission time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StampedEvent {
    pub at: DateTime<Utc>,
    pub event: SimulationEvent,
}

impl StampedEvent {
    /// Structured JSON form for log sinks and UI bridges.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Sender half owned by the session.
#[derive(Clone, Debug)]
pub(crate) struct EventEmitter {
    sender: flume::Sender<StampedEvent>,
}

impl EventEmitter {
    /// Emit one event. Disconnected receivers are ignored.
    pub(crate) fn emit(&self, event: SimulationEvent) {
        let _ = self.sender.send(StampedEvent {
            at: Utc::now(),
            event,
        });
    }
}

/// Receiver half handed to observers.
///
/// # Examples
///
/// ```
/// use macroflow::events::{event_channel, SimulationEvent};
///
/// let (emitter, tap) = event_channel();
/// # let _ = &emitter;
/// assert!(tap.try_next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EventTap {
    receiver: flume::Receiver<StampedEvent>,
}

impl EventTap {
    /// Pop the next pending event without blocking.
    #[must_use]
    pub fn try_next(&self) -> Option<StampedEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drain all pending events.
    #[must_use]
    pub fn drain(&self) -> Vec<StampedEvent> {
        self.receiver.try_iter().collect()
    }
}

/// Create a connected emitter/tap pair over an unbounded channel.
#[must_use]
pub fn event_channel() -> (EventEmitterHandle, EventTap) {
    let (sender, receiver) = flume::unbounded();
    (
        EventEmitterHandle(EventEmitter { sender }),
        EventTap { receiver },
    )
}

/// Public wrapper so sessions can be wired to an externally created channel.
#[derive(Clone, Debug)]
pub struct EventEmitterHandle(pub(crate) EventEmitter);
