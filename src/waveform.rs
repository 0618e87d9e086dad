//! Breathing waveform: lookup table, phase index and duty-cycle mapping.
//!
//! Everything in here is a pure function of the elapsed-millisecond
//! counter.  The generator loop calls [`duty_at`] once per iteration and
//! writes the resulting [`DutyPair`] to the two bridge compare registers.
//!
//! ```text
//!  elapsed_ms ──▶ phase_index ──▶ WAVE_TABLE ──▶ duty_pair ──▶ (A, B)
//!               (>>1, & 0xFF)     [0, 120]       (>>1 each)
//! ```
//!
//! The phase index only depends on `elapsed_ms % 512`, so the output
//! repeats exactly every [`CYCLE_MS`] milliseconds and a wrapping
//! millisecond counter is harmless.

/// Number of entries in [`WAVE_TABLE`]; one per phase index.
pub const TABLE_LEN: usize = 256;

/// Largest value stored in [`WAVE_TABLE`].
pub const TABLE_PEAK: u8 = 120;

/// Length of one breathing cycle in milliseconds of elapsed time.
pub const CYCLE_MS: u32 = 512;

/// Brightness offset added before halving for output A.
const OFFSET: u8 = 100;

/// Brightness curve, `round(60 * sin(pi * i / 256) + 60)` for `i` in `0..256`.
///
/// Precomputed so the firmware never touches floating point at run time.
pub static WAVE_TABLE: [u8; TABLE_LEN] = [
     60,  61,  61,  62,  63,  64,  64,  65,  66,  67,  67,  68,  69,  70,  70,  71,
     72,  72,  73,  74,  75,  75,  76,  77,  77,  78,  79,  80,  80,  81,  82,  82,
     83,  84,  84,  85,  86,  86,  87,  88,  88,  89,  90,  90,  91,  91,  92,  93,
     93,  94,  95,  95,  96,  96,  97,  97,  98,  99,  99, 100, 100, 101, 101, 102,
    102, 103, 103, 104, 104, 105, 105, 106, 106, 107, 107, 108, 108, 109, 109, 109,
    110, 110, 111, 111, 111, 112, 112, 113, 113, 113, 114, 114, 114, 115, 115, 115,
    115, 116, 116, 116, 116, 117, 117, 117, 117, 118, 118, 118, 118, 118, 119, 119,
    119, 119, 119, 119, 119, 119, 120, 120, 120, 120, 120, 120, 120, 120, 120, 120,
    120, 120, 120, 120, 120, 120, 120, 120, 120, 120, 120, 119, 119, 119, 119, 119,
    119, 119, 119, 118, 118, 118, 118, 118, 117, 117, 117, 117, 116, 116, 116, 116,
    115, 115, 115, 115, 114, 114, 114, 113, 113, 113, 112, 112, 111, 111, 111, 110,
    110, 109, 109, 109, 108, 108, 107, 107, 106, 106, 105, 105, 104, 104, 103, 103,
    102, 102, 101, 101, 100, 100,  99,  99,  98,  97,  97,  96,  96,  95,  95,  94,
     93,  93,  92,  91,  91,  90,  90,  89,  88,  88,  87,  86,  86,  85,  84,  84,
     83,  82,  82,  81,  80,  80,  79,  78,  77,  77,  76,  75,  75,  74,  73,  72,
     72,  71,  70,  70,  69,  68,  67,  67,  66,  65,  64,  64,  63,  62,  61,  61,
];

/// Compare-register values for the two bridge outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyPair {
    /// Output A (inverted channel).
    pub a: u8,
    /// Output B (normal channel).
    pub b: u8,
}

/// Phase index for a millisecond counter value.
///
/// Halves the advance rate, then truncates to the table domain.
#[inline]
pub const fn phase_index(elapsed_ms: u32) -> u8 {
    ((elapsed_ms >> 1) & 0xFF) as u8
}

/// Table lookup.  Every `u8` is a valid index.
#[inline]
pub const fn brightness(index: u8) -> u8 {
    WAVE_TABLE[index as usize]
}

/// Map a table value onto the two compare registers.
///
/// `a = (100 + x) / 2` and `b = (255 - (100 + (100 - x))) / 2`, i.e.
/// `b = (55 + x) / 2`.  The pair is deliberately not mirrored around the
/// midpoint; see DESIGN.md.  Values above [`TABLE_PEAK`] are clamped so
/// the 8-bit arithmetic cannot wrap.
#[inline]
pub const fn duty_pair(x: u8) -> DutyPair {
    let x = if x > TABLE_PEAK { TABLE_PEAK } else { x };
    let i = OFFSET + x;
    // 255 - (100 + (100 - x)), reassociated so no u8 step underflows.
    let j = 255 - (2 * OFFSET - x);
    DutyPair { a: i >> 1, b: j >> 1 }
}

/// Duty pair to apply at `elapsed_ms`.
#[inline]
pub const fn duty_at(elapsed_ms: u32) -> DutyPair {
    duty_pair(brightness(phase_index(elapsed_ms)))
}

/// PWM carrier frequency for a counter clocked at `clock_hz / divider`
/// counting `0..=top`.  Returns 0 for a zero divider.
pub const fn carrier_hz(clock_hz: u32, divider: u16, top: u8) -> u32 {
    if divider == 0 {
        return 0;
    }
    clock_hz / (divider as u32 * (top as u32 + 1))
}
