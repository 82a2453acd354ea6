//! Event types for verification progress
//!
//! The sequencer reports stage changes and countdown ticks to an
//! `EventSink` so a host UI can re-render without polling.

use serde::{Deserialize, Serialize};

use crate::error::VerificationStep;
use crate::sequencer::VerificationStage;

/// Trait for receiving verification events
///
/// Abstracts over the transport (UI channel, mpsc, test collector).
pub trait EventSink: Send + Sync {
    /// Returns an error if the event could not be delivered
    fn send(&self, event: VerificationEvent) -> Result<(), EventError>;
}

/// Error when delivering an event fails
#[derive(Debug, Clone, thiserror::Error)]
#[error("Event error: {message}")]
pub struct EventError {
    pub message: String,
}

impl EventError {
    pub fn channel_closed() -> Self {
        Self {
            message: "Channel closed".to_string(),
        }
    }
}

/// Events emitted by the verification sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VerificationEvent {
    /// The stage moved
    StageChanged { stage: VerificationStage },

    /// The countdown decremented
    CountdownTick { remaining: u32 },

    /// The countdown reached zero; the code can no longer be verified
    CodeExpired,

    /// A step failed and was converted to a field message
    StepFailed { step: VerificationStep, message: String },
}

/// A no-op sink that discards all events
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn send(&self, _event: VerificationEvent) -> Result<(), EventError> {
        Ok(())
    }
}

/// Collects events in memory; used by tests and headless hosts
pub struct VecEventSink {
    events: parking_lot::Mutex<Vec<VerificationEvent>>,
}

impl VecEventSink {
    pub fn new() -> Self {
        Self {
            events: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<VerificationEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Default for VecEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecEventSink {
    fn send(&self, event: VerificationEvent) -> Result<(), EventError> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Forwards events over a tokio unbounded channel
pub struct ChannelEventSink {
    tx: tokio::sync::mpsc::UnboundedSender<VerificationEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: tokio::sync::mpsc::UnboundedSender<VerificationEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn send(&self, event: VerificationEvent) -> Result<(), EventError> {
        self.tx.send(event).map_err(|_| EventError::channel_closed())
    }
}

/// Deliver `event`, logging instead of failing when the sink is gone
pub(crate) fn emit(sink: &dyn EventSink, event: VerificationEvent) {
    if let Err(e) = sink.send(event) {
        log::warn!("Dropped verification event: {}", e);
    }
}
