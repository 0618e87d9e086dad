//! Outbound status events.
//!
//! The [`BreathingService`](super::service::BreathingService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use super::ports::{Channel, PwmError};

/// Structured events emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathEvent {
    /// Initialisation finished; the bridge sits at the neutral duty.
    Started {
        carrier_hz: u32,
        top: u8,
        neutral_duty: u8,
    },

    /// The phase index wrapped back to the start of the table.
    CycleWrapped { cycles: u32 },

    /// A steady-state compare-register write failed.
    DutyWriteFailed { channel: Channel, error: PwmError },
}
