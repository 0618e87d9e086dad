//! Integration tests for the bridge initialisation sequence.
//!
//! Verifies that `BreathingService::init` programs the PWM port in the
//! required order and leaves the bridge in the neutral state, and that
//! any port failure aborts the sequence.

use super::mock_hw::{MockBridge, PwmCall, RecordingSink};

use nicelights::adapters::ledc::LedcBridge;
use nicelights::app::events::BreathEvent;
use nicelights::app::ports::{Channel, Polarity, PwmError};
use nicelights::app::service::BreathingService;
use nicelights::config::BridgeConfig;
use nicelights::error::Error;

#[test]
fn init_issues_calls_in_order() {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut hw = MockBridge::new();
    let mut sink = RecordingSink::new();

    svc.init(&mut hw, &mut sink).expect("init should succeed");

    assert_eq!(
        hw.calls,
        vec![
            PwmCall::Configure { channel: Channel::A, polarity: Polarity::Inverted },
            PwmCall::Configure { channel: Channel::B, polarity: Polarity::Normal },
            PwmCall::SelectClock { divider: 1 },
            PwmCall::SetPeriod { top: 127 },
            PwmCall::SetDuty { channel: Channel::A, duty: 127 },
            PwmCall::SetDuty { channel: Channel::B, duty: 127 },
        ]
    );
}

#[test]
fn both_channels_neutral_before_first_tick() {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut hw = MockBridge::new();
    let mut sink = RecordingSink::new();

    svc.init(&mut hw, &mut sink).unwrap();

    assert_eq!(hw.duty(Channel::A), Some(127));
    assert_eq!(hw.duty(Channel::B), Some(127));
    assert_ne!(
        hw.polarity(Channel::A),
        hw.polarity(Channel::B),
        "bridge legs must have opposite polarity"
    );
}

#[test]
fn started_event_reports_carrier() {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut hw = MockBridge::new();
    let mut sink = RecordingSink::new();

    svc.init(&mut hw, &mut sink).unwrap();

    assert_eq!(
        sink.events,
        vec![BreathEvent::Started {
            carrier_hz: 7_812,
            top: 127,
            neutral_duty: 127,
        }]
    );
}

#[test]
fn port_failure_aborts_init() {
    let mut svc = BreathingService::new(BridgeConfig::default());
    let mut hw = MockBridge::new();
    // Fail set_period (fourth call).
    hw.fail_at_call = Some(3);
    let mut sink = RecordingSink::new();

    let err = svc.init(&mut hw, &mut sink).unwrap_err();

    assert_eq!(err, Error::Pwm(PwmError::Hardware(-1)));
    assert_eq!(hw.duty_writes(), 0, "no duty writes after a failed step");
    assert!(sink.events.is_empty(), "no Started event on failure");
}

#[test]
fn invalid_config_never_reaches_hardware() {
    let cfg = BridgeConfig {
        clock_divider: 64,
        ..BridgeConfig::default()
    };
    let mut svc = BreathingService::new(cfg);
    let mut hw = MockBridge::new();
    let mut sink = RecordingSink::new();

    assert!(matches!(svc.init(&mut hw, &mut sink), Err(Error::Config(_))));
    assert!(hw.calls.is_empty());
}

#[test]
fn init_against_simulated_ledc_bridge() {
    let cfg = BridgeConfig::default();
    let mut bridge = LedcBridge::new(cfg.pwm_clock_hz);
    let mut svc = BreathingService::new(cfg);
    let mut sink = RecordingSink::new();

    svc.init(&mut bridge, &mut sink).unwrap();

    assert_eq!(bridge.carrier_hz(), Some(7_812));
    assert_eq!(bridge.channel(Channel::A).polarity(), Some(Polarity::Inverted));
    assert_eq!(bridge.channel(Channel::B).polarity(), Some(Polarity::Normal));
    assert_eq!(bridge.channel(Channel::A).duty(), 127);
    assert_eq!(bridge.channel(Channel::B).duty(), 127);
}
