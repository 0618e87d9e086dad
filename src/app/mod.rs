//! Application core — pure breathing logic, zero I/O.
//!
//! The bridge initialisation sequence and the generator loop live in
//! [`service`].  All interaction with hardware happens through the
//! **port traits** in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
