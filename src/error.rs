//! Unified error type for wristtemp.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensor
    /// The I²C transaction to the IR thermometer failed.
    Sensor,

    /// The sensor returned a value that is not a finite temperature.
    InvalidSample,

    // Storage
    /// Flash read/write/erase failed.
    Storage,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::Sensor => "sensor read failed",
            Error::InvalidSample => "sensor returned a non-finite sample",
            Error::Storage => "flash storage failed",
            Error::Display => "display write failed",
        };
        f.write_str(msg)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
