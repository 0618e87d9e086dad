//! One-shot LEDC peripheral configuration for the bridge outputs.
//!
//! Raw ESP-IDF sys calls for the output pins, the shared LEDC timer and
//! the two LEDC channels.  Called during bridge initialisation, before
//! the generator loop starts.  On host targets every call is a logged
//! no-op so the adapters above can be exercised in tests.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
}

impl HwInitError {
    /// Underlying ESP-IDF return code.
    pub const fn code(self) -> i32 {
        match self {
            Self::GpioConfigFailed(rc) | Self::LedcTimerFailed(rc) | Self::LedcChannelFailed(rc) => rc,
        }
    }
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc)  => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcTimerFailed(rc)   => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
        }
    }
}

/// Smallest LEDC duty resolution (bits) that covers the counting range
/// `0..=top`.
pub const fn resolution_bits(top: u8) -> u32 {
    let counts = top as u32 + 1;
    let mut bits = 1;
    while (1u32 << bits) < counts {
        bits += 1;
    }
    bits
}

// ── GPIO outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_output(pin: i32) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: called from the single main task during bridge init.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    // Hold the leg low until the LEDC channel takes over the pin.
    unsafe { gpio_set_level(pin, 0) };
    info!("hw_init: GPIO{} configured as output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_output(pin: i32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): GPIO{} output", pin);
    Ok(())
}

// ── LEDC timer ────────────────────────────────────────────────

/// Configure the shared bridge timer off the undivided APB clock.
#[cfg(target_os = "espidf")]
pub fn init_timer(timer: u32, freq_hz: u32, resolution_bits: u32) -> Result<(), HwInitError> {
    let cfg = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: timer,
        duty_resolution: resolution_bits,
        freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_USE_APB_CLK,
        ..Default::default()
    };
    // SAFETY: plain config struct, main task only.
    let ret = unsafe { ledc_timer_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::LedcTimerFailed(ret)); }
    info!("hw_init: LEDC timer {} at {} Hz, {}-bit", timer, freq_hz, resolution_bits);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_timer(timer: u32, freq_hz: u32, resolution_bits: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): LEDC timer {} at {} Hz, {}-bit", timer, freq_hz, resolution_bits);
    Ok(())
}

// ── LEDC channels ─────────────────────────────────────────────

/// Route `pin` to LEDC `channel` on `timer`, optionally inverting the
/// output in the GPIO matrix.
#[cfg(target_os = "espidf")]
pub fn init_channel(
    channel: u32,
    timer: u32,
    pin: i32,
    inverted: bool,
    duty: u32,
) -> Result<(), HwInitError> {
    let mut cfg = ledc_channel_config_t {
        gpio_num: pin,
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel,
        intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
        timer_sel: timer,
        duty,
        hpoint: 0,
        ..Default::default()
    };
    cfg.flags.set_output_invert(u32::from(inverted));
    // SAFETY: timer was configured by init_timer(); main task only.
    let ret = unsafe { ledc_channel_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::LedcChannelFailed(ret)); }
    info!(
        "hw_init: LEDC CH{} -> GPIO{} ({})",
        channel,
        pin,
        if inverted { "inverted" } else { "normal" }
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_channel(
    channel: u32,
    _timer: u32,
    pin: i32,
    inverted: bool,
    _duty: u32,
) -> Result<(), HwInitError> {
    log::info!(
        "hw_init(sim): LEDC CH{} -> GPIO{} ({})",
        channel,
        pin,
        if inverted { "inverted" } else { "normal" }
    );
    Ok(())
}

// ── Duty writes ───────────────────────────────────────────────

/// Latch a new compare value; takes effect on the next counter period.
#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u32) -> Result<(), i32> {
    // SAFETY: channel was configured in init_channel(); only the main
    // loop writes duty registers.
    unsafe {
        let ret = ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty);
        if ret != ESP_OK as i32 { return Err(ret); }
        let ret = ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
        if ret != ESP_OK as i32 { return Err(ret); }
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u32) -> Result<(), i32> {
    Ok(())
}
