//! Application service — the breathing generator.
//!
//! [`BreathingService`] owns the bridge configuration and the little
//! bookkeeping the loop keeps for status reporting.  The PWM engine,
//! the clock and the event sink are injected at call sites, so the
//! whole sequence runs against mocks on the host.
//!
//! ```text
//!   TimePort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                │   BreathingService   │
//!   PwmPort  ◀── │  init · tick · run   │
//!                └──────────────────────┘
//! ```

use log::info;

use crate::config::BridgeConfig;
use crate::error::{Error, Result};
use crate::waveform::{self, DutyPair};

use super::events::BreathEvent;
use super::ports::{Channel, EventSink, Polarity, PwmPort, TimePort};

/// Drives the two bridge outputs through the breathing waveform.
pub struct BreathingService {
    config: BridgeConfig,
    /// Phase index applied by the previous tick, for wrap detection.
    last_index: Option<u8>,
    cycles: u32,
    write_failures: u32,
}

impl BreathingService {
    /// Construct the service.  Does **not** touch hardware — call
    /// [`init`](Self::init) next.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            last_index: None,
            cycles: 0,
            write_failures: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring both outputs into the neutral complementary state.
    ///
    /// Order matters: polarity first, then clock and period, then the
    /// neutral compare values.  Any failure aborts initialisation.
    pub fn init(&mut self, pwm: &mut impl PwmPort, sink: &mut impl EventSink) -> Result<()> {
        self.config.validate().map_err(Error::Config)?;

        // A and B feed opposite bridge legs; they must never share polarity.
        pwm.configure(Channel::A, Polarity::Inverted)?;
        pwm.configure(Channel::B, Polarity::Normal)?;

        pwm.select_clock(self.config.clock_divider)?;
        pwm.set_period(self.config.period_top)?;

        for channel in Channel::ALL {
            pwm.set_duty(channel, self.config.neutral_duty)?;
        }

        self.last_index = None;
        self.cycles = 0;
        self.write_failures = 0;

        let carrier_hz = self.config.carrier_hz();
        sink.emit(&BreathEvent::Started {
            carrier_hz,
            top: self.config.period_top,
            neutral_duty: self.config.neutral_duty,
        });
        info!(
            "BreathingService initialised: carrier={}Hz top={} neutral={}",
            carrier_hz, self.config.period_top, self.config.neutral_duty
        );
        Ok(())
    }

    /// One generator iteration: sample the clock, look up the waveform
    /// and write both compare registers.  Returns the pair applied.
    ///
    /// Write failures are reported through `sink` and counted; the next
    /// tick simply tries again.
    pub fn tick(
        &mut self,
        pwm: &mut impl PwmPort,
        clock: &impl TimePort,
        sink: &mut impl EventSink,
    ) -> DutyPair {
        let now = clock.now_millis();
        let index = waveform::phase_index(now);
        let duty = waveform::duty_pair(waveform::brightness(index));

        for (channel, value) in [(Channel::A, duty.a), (Channel::B, duty.b)] {
            if let Err(error) = pwm.set_duty(channel, value) {
                self.write_failures = self.write_failures.wrapping_add(1);
                sink.emit(&BreathEvent::DutyWriteFailed { channel, error });
            }
        }

        if matches!(self.last_index, Some(prev) if index < prev) {
            self.cycles = self.cycles.wrapping_add(1);
            sink.emit(&BreathEvent::CycleWrapped {
                cycles: self.cycles,
            });
        }
        self.last_index = Some(index);

        duty
    }

    /// Tick forever, sleeping `frame_delay_ms` between iterations.
    pub fn run(
        &mut self,
        pwm: &mut impl PwmPort,
        clock: &mut impl TimePort,
        sink: &mut impl EventSink,
    ) -> ! {
        info!(
            "BreathingService entering loop ({}ms frame delay)",
            self.config.frame_delay_ms
        );
        loop {
            self.tick(&mut *pwm, &*clock, &mut *sink);
            clock.sleep_millis(self.config.frame_delay_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Completed breathing cycles since [`init`](Self::init).
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Failed compare-register writes since [`init`](Self::init).
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }
}
