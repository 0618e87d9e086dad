//! Port traits — the boundary between the breathing logic and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BreathingService (domain)
//! ```
//!
//! The PWM engine, the millisecond clock and the event sink are all
//! platform services.  [`BreathingService`](super::service::BreathingService)
//! consumes them via generics, so the waveform logic never touches a
//! register directly and runs unchanged against mocks on the host.

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → bridge outputs)
// ───────────────────────────────────────────────────────────────

/// One of the two bridge outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    A,
    B,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];
}

/// Output polarity relative to the raw compare value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// High while the counter is below the compare value.
    Normal,
    /// Low while the counter is below the compare value.
    Inverted,
}

/// Write-side port over a two-channel PWM engine sharing one counter.
pub trait PwmPort {
    /// Drive the channel's pin as an output and attach it to the PWM
    /// engine with the given polarity.
    fn configure(&mut self, channel: Channel, polarity: Polarity) -> Result<(), PwmError>;

    /// Select the counter input clock divider (1 = no prescaling).
    fn select_clock(&mut self, divider: u16) -> Result<(), PwmError>;

    /// Fix the counting range to `0..=top` for both channels.
    fn set_period(&mut self, top: u8) -> Result<(), PwmError>;

    /// Write one compare register.  Must reject `duty` above the period.
    fn set_duty(&mut self, channel: Channel, duty: u8) -> Result<(), PwmError>;
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: platform timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock plus a blocking delay.
pub trait TimePort {
    /// Milliseconds since boot.  Wraps at `u32::MAX`.
    fn now_millis(&self) -> u32;

    /// Block the caller for `ms` milliseconds.
    fn sleep_millis(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`BreathEvent`](super::events::BreathEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::BreathEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`PwmPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Zero divider or zero period requested.
    InvalidPeriod,
    /// Compare value above the configured period.
    DutyOutOfRange { duty: u8, top: u8 },
    /// Duty written before the channel was configured.
    NotConfigured(Channel),
    /// The platform PWM driver returned an error code.
    Hardware(i32),
}

impl core::fmt::Display for PwmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPeriod => write!(f, "invalid PWM period or clock divider"),
            Self::DutyOutOfRange { duty, top } => {
                write!(f, "duty {} exceeds period top {}", duty, top)
            }
            Self::NotConfigured(ch) => write!(f, "channel {:?} not configured", ch),
            Self::Hardware(rc) => write!(f, "PWM driver error (rc={})", rc),
        }
    }
}

impl embedded_hal::pwm::Error for PwmError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}
