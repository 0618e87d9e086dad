//! NiceLights firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod waveform;

// The hardware modules compile on every target; their ESP-IDF calls
// are swapped for simulation stubs off-device.
pub mod adapters;
pub mod drivers;
