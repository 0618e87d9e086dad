//! One leg of the H-bridge: a single LEDC channel.
//!
//! Exposed as an [`embedded_hal::pwm::SetDutyCycle`] so the bridge
//! adapter (and anything else) can drive it through the standard trait.
//! Duty values are in counter units, `0..=top`.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real LEDC channel via hw_init.
//! On host/test: tracks state in-memory only.

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::app::ports::{Channel, Polarity, PwmError};
use crate::drivers::hw_init::{self, HwInitError};

pub struct BridgeChannel {
    channel: Channel,
    ledc: u32,
    timer: u32,
    gpio: i32,
    polarity: Option<Polarity>,
    /// Counter top once attached to a configured timer.
    top: Option<u8>,
    duty: u8,
}

impl BridgeChannel {
    pub fn new(channel: Channel, ledc: u32, timer: u32, gpio: i32) -> Self {
        Self {
            channel,
            ledc,
            timer,
            gpio,
            polarity: None,
            top: None,
            duty: 0,
        }
    }

    /// Drive the pin as an output and remember the polarity for
    /// [`attach`](Self::attach).
    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<(), HwInitError> {
        hw_init::init_output(self.gpio)?;
        self.polarity = Some(polarity);
        Ok(())
    }

    /// Bind the channel to the (already configured) timer counting
    /// `0..=top`.  Starts at duty 0.  No-op until a polarity is set.
    pub fn attach(&mut self, top: u8) -> Result<(), HwInitError> {
        let Some(polarity) = self.polarity else {
            return Ok(());
        };
        let inverted = polarity == Polarity::Inverted;
        hw_init::init_channel(self.ledc, self.timer, self.gpio, inverted, 0)?;
        self.top = Some(top);
        self.duty = 0;
        Ok(())
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    pub fn is_attached(&self) -> bool {
        self.top.is_some()
    }

    /// Last compare value successfully written.
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Counter units → LEDC duty units at the timer's resolution.
    fn hw_duty(top: u8, duty: u8) -> u32 {
        let bits = hw_init::resolution_bits(top);
        (u32::from(duty) << bits) / (u32::from(top) + 1)
    }
}

impl ErrorType for BridgeChannel {
    type Error = PwmError;
}

impl SetDutyCycle for BridgeChannel {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(self.top.unwrap_or(0))
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), PwmError> {
        let top = self.top.ok_or(PwmError::NotConfigured(self.channel))?;
        if duty > u16::from(top) {
            return Err(PwmError::DutyOutOfRange {
                duty: duty.min(255) as u8,
                top,
            });
        }
        let duty = duty as u8;
        hw_init::ledc_set(self.ledc, Self::hw_duty(top, duty)).map_err(PwmError::Hardware)?;
        self.duty = duty;
        Ok(())
    }
}
