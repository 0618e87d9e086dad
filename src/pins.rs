//! GPIO / peripheral assignments for the NiceLights bridge board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers or LEDC slots.
//!
//! ```text
//!   OUT A (GPIO 7) ──┤>|──┤>|── ... ──┤>|── OUT B (GPIO 3)
//!                    LED string wired directly across the bridge
//! ```

// ---------------------------------------------------------------------------
// Bridge outputs
// ---------------------------------------------------------------------------

/// Output A: inverted PWM leg of the bridge.
pub const BRIDGE_A_GPIO: i32 = 7;
/// Output B: non-inverted PWM leg of the bridge.
pub const BRIDGE_B_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// LEDC allocation
// ---------------------------------------------------------------------------

/// Both bridge channels share one timer so their counters stay in phase.
pub const LEDC_TIMER: u32 = 0;
pub const LEDC_CH_A: u32 = 0;
pub const LEDC_CH_B: u32 = 1;
