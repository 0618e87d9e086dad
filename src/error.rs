//! Unified error type for the NiceLights firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping
//! the boot path's error handling uniform.  All variants are `Copy`.
//! Steady-state duty writes never surface here: the generator loop
//! reports those as events and keeps running.

use core::fmt;

use crate::app::ports::PwmError;
use crate::drivers::hw_init::HwInitError;

/// Every fallible boot-time operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A PWM port operation failed.
    Pwm(PwmError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm(e) => write!(f, "pwm: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
