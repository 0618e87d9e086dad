//! LEDC bridge adapter — the two bridge legs behind [`PwmPort`].
//!
//! Owns both [`BridgeChannel`]s and the shared LEDC timer.  This is the
//! only module that turns port calls into peripheral configuration; on
//! non-espidf targets the underlying hw_init calls are simulation stubs.
//!
//! The LEDC timer is configured when the period is set, using the
//! divider chosen by [`select_clock`](PwmPort::select_clock) and the
//! reference tick passed to [`LedcBridge::new`].  Channels configured
//! before that are attached to the timer at the same moment.

use embedded_hal::pwm::SetDutyCycle;
use log::info;

use crate::app::ports::{Channel, Polarity, PwmError, PwmPort};
use crate::drivers::bridge_channel::BridgeChannel;
use crate::drivers::hw_init::{self, HwInitError};
use crate::pins;
use crate::waveform;

/// Concrete [`PwmPort`] over two LEDC channels sharing one timer.
pub struct LedcBridge {
    a: BridgeChannel,
    b: BridgeChannel,
    clock_hz: u32,
    divider: u16,
    top: Option<u8>,
}

impl LedcBridge {
    /// Bridge on the board's default pins and LEDC slots.
    pub fn new(clock_hz: u32) -> Self {
        Self::with_channels(
            clock_hz,
            BridgeChannel::new(Channel::A, pins::LEDC_CH_A, pins::LEDC_TIMER, pins::BRIDGE_A_GPIO),
            BridgeChannel::new(Channel::B, pins::LEDC_CH_B, pins::LEDC_TIMER, pins::BRIDGE_B_GPIO),
        )
    }

    pub fn with_channels(clock_hz: u32, a: BridgeChannel, b: BridgeChannel) -> Self {
        Self {
            a,
            b,
            clock_hz,
            divider: 1,
            top: None,
        }
    }

    pub fn channel(&self, channel: Channel) -> &BridgeChannel {
        match channel {
            Channel::A => &self.a,
            Channel::B => &self.b,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut BridgeChannel {
        match channel {
            Channel::A => &mut self.a,
            Channel::B => &mut self.b,
        }
    }

    /// Carrier the timer runs at once the period is set.
    pub fn carrier_hz(&self) -> Option<u32> {
        self.top
            .map(|top| waveform::carrier_hz(self.clock_hz, self.divider, top))
    }
}

fn hw_err(e: HwInitError) -> PwmError {
    PwmError::Hardware(e.code())
}

impl PwmPort for LedcBridge {
    fn configure(&mut self, channel: Channel, polarity: Polarity) -> Result<(), PwmError> {
        let top = self.top;
        let ch = self.channel_mut(channel);
        ch.set_polarity(polarity).map_err(hw_err)?;
        // Late configuration joins an already running timer.
        if let Some(top) = top {
            ch.attach(top).map_err(hw_err)?;
        }
        Ok(())
    }

    fn select_clock(&mut self, divider: u16) -> Result<(), PwmError> {
        if divider == 0 {
            return Err(PwmError::InvalidPeriod);
        }
        self.divider = divider;
        Ok(())
    }

    fn set_period(&mut self, top: u8) -> Result<(), PwmError> {
        if top == 0 {
            return Err(PwmError::InvalidPeriod);
        }
        let freq_hz = waveform::carrier_hz(self.clock_hz, self.divider, top);
        if freq_hz == 0 {
            return Err(PwmError::InvalidPeriod);
        }
        hw_init::init_timer(pins::LEDC_TIMER, freq_hz, hw_init::resolution_bits(top))
            .map_err(hw_err)?;
        self.a.attach(top).map_err(hw_err)?;
        self.b.attach(top).map_err(hw_err)?;
        self.top = Some(top);
        info!("LedcBridge: period top={} carrier={}Hz", top, freq_hz);
        Ok(())
    }

    fn set_duty(&mut self, channel: Channel, duty: u8) -> Result<(), PwmError> {
        self.channel_mut(channel).set_duty_cycle(u16::from(duty))
    }
}
