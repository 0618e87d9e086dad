//! NiceLights Firmware — Main Entry Point
//!
//! H-bridge breathing driver for mini solar LED strings.  The string is
//! wired directly across two complementary PWM outputs; the generator
//! loop sweeps both duty cycles through a lookup table so the string
//! "breathes" at a carrier well above visible flicker.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │   LedcBridge        Esp32TimeAdapter      LogEventSink     │
//! │   (PwmPort)         (TimePort)            (EventSink)      │
//! │                                                            │
//! │  ─────────────────── Port Trait Boundary ───────────────   │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │        BreathingService (pure logic)                 │  │
//! │  │        init · tick · run  ─▶  waveform               │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::{Context, Result};
use log::info;

use nicelights::adapters::ledc::LedcBridge;
use nicelights::adapters::log_sink::LogEventSink;
use nicelights::adapters::time::Esp32TimeAdapter;
use nicelights::app::service::BreathingService;
use nicelights::config::BridgeConfig;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  NiceLights v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (compile-time defaults) ──────────────
    let config = BridgeConfig::default();

    // ── 3. Construct adapters ─────────────────────────────────
    let mut bridge = LedcBridge::new(config.pwm_clock_hz);
    let mut clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();

    // ── 4. Bridge initialisation ──────────────────────────────
    // There is no degraded mode for a lighting-only device: any
    // failure here aborts startup.
    let mut service = BreathingService::new(config);
    service
        .init(&mut bridge, &mut log_sink)
        .context("bridge initialisation failed")?;

    info!("System ready. Entering generator loop.");

    // ── 5. Generator loop ─────────────────────────────────────
    service.run(&mut bridge, &mut clock, &mut log_sink)
}
