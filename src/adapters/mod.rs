//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to                  |
//! |------------|------------|------------------------------|
//! | `ledc`     | PwmPort    | ESP32 LEDC timer + channels  |
//! | `log_sink` | EventSink  | Serial log output            |
//! | `time`     | TimePort   | ESP32 system timer, FreeRTOS |

pub mod ledc;
pub mod log_sink;
pub mod time;
