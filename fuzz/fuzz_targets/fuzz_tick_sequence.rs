//! Fuzz target: `BreathingService::tick`
//!
//! Feeds the generator an arbitrary sequence of clock readings (each
//! 4 bytes, little-endian) after a normal bridge initialisation and
//! asserts that it never panics, never writes a duty above the period
//! and always writes the pair the waveform prescribes for that instant.
//!
//! cargo fuzz run fuzz_tick_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use nicelights::app::events::BreathEvent;
use nicelights::app::ports::{Channel, EventSink, Polarity, PwmError, PwmPort, TimePort};
use nicelights::app::service::BreathingService;
use nicelights::config::BridgeConfig;
use nicelights::waveform;

struct Regs {
    top: u8,
    duty: [u8; 2],
}

impl PwmPort for Regs {
    fn configure(&mut self, _channel: Channel, _polarity: Polarity) -> Result<(), PwmError> {
        Ok(())
    }
    fn select_clock(&mut self, _divider: u16) -> Result<(), PwmError> {
        Ok(())
    }
    fn set_period(&mut self, top: u8) -> Result<(), PwmError> {
        self.top = top;
        Ok(())
    }
    fn set_duty(&mut self, channel: Channel, duty: u8) -> Result<(), PwmError> {
        assert!(duty <= self.top, "duty {duty} above top {}", self.top);
        self.duty[channel as usize] = duty;
        Ok(())
    }
}

struct At(u32);

impl TimePort for At {
    fn now_millis(&self) -> u32 {
        self.0
    }
    fn sleep_millis(&mut self, ms: u32) {
        self.0 = self.0.wrapping_add(ms);
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &BreathEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut regs = Regs { top: 0, duty: [0; 2] };
    svc.init(&mut regs, &mut Discard).expect("default config must initialise");

    for chunk in data.chunks_exact(4) {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let pair = svc.tick(&mut regs, &At(t), &mut Discard);
        assert_eq!(pair, waveform::duty_at(t));
        assert_eq!(regs.duty, [pair.a, pair.b]);
    }
});
