//! Integration tests for the generator loop: BreathingService → PwmPort.
//!
//! The loop is driven by hand (tick, then sleep the configured frame
//! delay) against a simulated clock, which is exactly what `run` does
//! forever on the device.

use super::mock_hw::{MockBridge, RecordingSink, SimClock};

use nicelights::adapters::ledc::LedcBridge;
use nicelights::app::events::BreathEvent;
use nicelights::app::ports::{Channel, PwmError, PwmPort, TimePort};
use nicelights::app::service::BreathingService;
use nicelights::config::BridgeConfig;
use nicelights::waveform::{self, CYCLE_MS, DutyPair};

fn started() -> (BreathingService, MockBridge, RecordingSink) {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut hw = MockBridge::new();
    let mut sink = RecordingSink::new();
    svc.init(&mut hw, &mut sink).unwrap();
    sink.events.clear();
    (svc, hw, sink)
}

/// `iterations` rounds of tick + frame delay; returns every applied pair.
fn drive(
    svc: &mut BreathingService,
    pwm: &mut impl PwmPort,
    clock: &mut SimClock,
    sink: &mut RecordingSink,
    iterations: usize,
) -> Vec<DutyPair> {
    let delay = svc.config().frame_delay_ms;
    (0..iterations)
        .map(|_| {
            let pair = svc.tick(&mut *pwm, &*clock, &mut *sink);
            clock.sleep_millis(delay);
            pair
        })
        .collect()
}

#[test]
fn first_tick_at_boot() {
    let (mut svc, mut hw, mut sink) = started();
    let pair = svc.tick(&mut hw, &SimClock::at(0), &mut sink);

    assert_eq!(pair, DutyPair { a: 80, b: 57 });
    assert_eq!(hw.duty(Channel::A), Some(80));
    assert_eq!(hw.duty(Channel::B), Some(57));
}

#[test]
fn peak_brightness_at_256ms() {
    let (mut svc, mut hw, mut sink) = started();
    let pair = svc.tick(&mut hw, &SimClock::at(256), &mut sink);

    assert_eq!(pair, DutyPair { a: 110, b: 87 });
}

#[test]
fn near_peak_plateau_at_766ms() {
    let (mut svc, mut hw, mut sink) = started();
    let pair = svc.tick(&mut hw, &SimClock::at(766), &mut sink);

    assert_eq!(waveform::phase_index(766), 127);
    assert_eq!(pair, DutyPair { a: 110, b: 87 });
}

#[test]
fn one_ms_frames_sweep_full_cycle() {
    let (mut svc, mut hw, mut sink) = started();
    let mut clock = SimClock::at(0);

    let pairs = drive(&mut svc, &mut hw, &mut clock, &mut sink, CYCLE_MS as usize);

    assert_eq!(clock.now, CYCLE_MS);
    assert!(clock.slept.iter().all(|&ms| ms == 1));
    assert!(pairs.iter().all(|p| (50..=110).contains(&p.a)));
    assert!(pairs.iter().all(|p| (27..=87).contains(&p.b)));
    assert_eq!(pairs.iter().map(|p| p.a).max(), Some(110));
    // Two neutral writes from init, then two per tick.
    assert_eq!(hw.duty_writes(), 2 + 2 * CYCLE_MS as usize);
}

#[test]
fn output_repeats_every_cycle() {
    let (mut svc, mut hw, mut sink) = started();
    let mut clock = SimClock::at(0);

    let first = drive(&mut svc, &mut hw, &mut clock, &mut sink, CYCLE_MS as usize);
    let second = drive(&mut svc, &mut hw, &mut clock, &mut sink, CYCLE_MS as usize);

    assert_eq!(first, second);
}

#[test]
fn cycle_events_once_per_512ms() {
    let (mut svc, mut hw, mut sink) = started();
    let mut clock = SimClock::at(0);

    drive(&mut svc, &mut hw, &mut clock, &mut sink, 3 * CYCLE_MS as usize);

    assert_eq!(svc.cycles(), 2, "wraps at 512 and 1024");
    assert_eq!(sink.cycle_events(), 2);
    assert!(sink.events.contains(&BreathEvent::CycleWrapped { cycles: 2 }));
}

#[test]
fn counter_wrap_is_tolerated() {
    let (mut svc, mut hw, mut sink) = started();
    let mut clock = SimClock::at(u32::MAX - 3);

    let pairs = drive(&mut svc, &mut hw, &mut clock, &mut sink, 8);

    assert_eq!(clock.now, 4);
    assert_eq!(pairs[4], waveform::duty_at(0));
    assert_eq!(svc.write_failures(), 0);
}

#[test]
fn failing_channel_does_not_stop_the_loop() {
    let (mut svc, mut hw, mut sink) = started();
    hw.fail_channel = Some(Channel::B);
    let mut clock = SimClock::at(0);

    drive(&mut svc, &mut hw, &mut clock, &mut sink, 10);

    assert_eq!(svc.write_failures(), 10);
    assert_eq!(hw.duty(Channel::A), Some(waveform::duty_at(9).a));
    assert_eq!(
        sink.events[0],
        BreathEvent::DutyWriteFailed {
            channel: Channel::B,
            error: PwmError::Hardware(-2),
        }
    );
}

#[test]
fn ledc_bridge_tracks_generator() {
    let cfg = BridgeConfig::default();
    let mut bridge = LedcBridge::new(cfg.pwm_clock_hz);
    let mut svc = BreathingService::new(cfg);
    let mut sink = RecordingSink::new();
    svc.init(&mut bridge, &mut sink).unwrap();

    let mut clock = SimClock::at(250);
    let pairs = drive(&mut svc, &mut bridge, &mut clock, &mut sink, 7);

    let last = *pairs.last().unwrap();
    assert_eq!(bridge.channel(Channel::A).duty(), last.a);
    assert_eq!(bridge.channel(Channel::B).duty(), last.b);
    assert_eq!(svc.write_failures(), 0);
}
