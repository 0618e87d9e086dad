//! Bridge peripheral drivers and one-shot hardware initialisation.

pub mod bridge_channel;
pub mod hw_init;
