//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing generator events to the ESP-IDF
//! logger (UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::BreathEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`BreathEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &BreathEvent) {
        match event {
            BreathEvent::Started {
                carrier_hz,
                top,
                neutral_duty,
            } => {
                info!(
                    "START | carrier={}Hz | top={} | neutral A/B={}",
                    carrier_hz, top, neutral_duty
                );
            }
            BreathEvent::CycleWrapped { cycles } => {
                debug!("CYCLE | #{}", cycles);
            }
            BreathEvent::DutyWriteFailed { channel, error } => {
                warn!("DUTY  | write to {:?} failed: {}", channel, error);
            }
        }
    }
}
