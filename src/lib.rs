//! Application core of the wristtemp thermometer.
//!
//! Everything here is hardware-independent and runs on the host:
//!
//! - [`stabilizer`] - 1 Hz sampling, stability window, lock + fever
//!   classification, hold/auto-reset timing
//! - [`ui`] - display mode, unit preference, label rendering, buzzer
//!   countdown
//! - [`session`] - the single owned device state and the event-flag pass
//! - [`hal`] - traits the firmware implements for LEDs, buzzer, display,
//!   sensor, mode storage and watchdog
//!
//! Usage: `cargo test --lib --tests`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is shared by the firmware and the host-based tests.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod error;
pub mod hal;
pub mod history;
pub mod session;
pub mod stabilizer;
pub mod temperature;
pub mod ui;

pub use error::{Error, Result};
pub use session::{DeviceSession, EventFlags};
pub use stabilizer::{LockedReading, Phase, Stabilizer, TickOutcome};
pub use temperature::{Classification, TemperatureSample, TemperatureUnit};
pub use ui::{ButtonEvent, DisplayMode, Symbol};
