//! Bridge configuration parameters
//!
//! Compile-time tunables for the H-bridge PWM engine and the generator
//! loop.  There is no runtime reconfiguration: the firmware always runs
//! with [`BridgeConfig::default()`], validated once at boot.

use serde::{Deserialize, Serialize};

use crate::waveform;

/// H-bridge PWM configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    // --- Carrier ---
    /// Reference tick feeding the PWM counter before the divider (Hz)
    pub pwm_clock_hz: u32,
    /// PWM input clock divider (1 = no prescaling)
    pub clock_divider: u16,
    /// Counter top value; compare registers range over `0..=period_top`
    pub period_top: u8,
    /// Lowest acceptable carrier frequency (Hz)
    pub min_carrier_hz: u32,

    // --- Startup ---
    /// Compare value written to both channels before the loop starts
    pub neutral_duty: u8,

    // --- Timing ---
    /// Delay at the end of every generator iteration (milliseconds)
    pub frame_delay_ms: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            // Carrier: 1 MHz / 1 / 128 ≈ 7.8 kHz
            pwm_clock_hz: 1_000_000,
            clock_divider: 1,
            period_top: 127,
            min_carrier_hz: 4_000,

            // Startup
            neutral_duty: 127,

            // Timing
            frame_delay_ms: 1,
        }
    }
}

impl BridgeConfig {
    /// Carrier frequency produced by this configuration.
    pub fn carrier_hz(&self) -> u32 {
        waveform::carrier_hz(self.pwm_clock_hz, self.clock_divider, self.period_top)
    }

    /// Range-check every field.  Rejects rather than clamps.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.clock_divider == 0 {
            return Err("clock_divider must be non-zero");
        }
        if self.period_top == 0 {
            return Err("period_top must be non-zero");
        }
        if self.neutral_duty > self.period_top {
            return Err("neutral_duty exceeds period_top");
        }
        if self.frame_delay_ms == 0 {
            return Err("frame_delay_ms must be non-zero");
        }
        if self.carrier_hz() < self.min_carrier_hz {
            return Err("carrier frequency below min_carrier_hz");
        }
        Ok(())
    }
}
