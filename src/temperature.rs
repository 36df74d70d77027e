//! Temperature samples, units and fever classification.
//!
//! All stabilization math runs in degrees Celsius. Fahrenheit only shows up
//! when rendering and when classifying a locked reading against the clinical
//! fever threshold.

use crate::config::{FEVER_THRESHOLD_F, WRIST_TO_CORE_OFFSET_F};
use crate::error::{Error, Result};

/// One sensor conversion: die (ambient) and target (object) temperature.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureSample {
    /// Sensor die temperature (°C).
    pub ambient_c: f32,
    /// Temperature of whatever the sensor is pointed at (°C).
    pub object_c: f32,
}

impl TemperatureSample {
    pub const fn new(ambient_c: f32, object_c: f32) -> Self {
        Self {
            ambient_c,
            object_c,
        }
    }

    /// Reject readings that are not real temperatures (NaN / ±inf).
    pub fn validate(self) -> Result<Self> {
        if self.ambient_c.is_finite() && self.object_c.is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidSample)
        }
    }
}

/// Unit used when showing a live reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// The other unit.
    pub const fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    /// Express a Celsius value in this unit.
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

/// Fever classification of a locked reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Classification {
    Normal,
    Elevated,
}

impl Classification {
    /// Classify a wrist reading (°C) against the core-temperature threshold.
    ///
    /// Strictly above the threshold is elevated; exactly on it is normal.
    pub fn of(wrist_c: f32) -> Self {
        if core_fahrenheit(wrist_c) > FEVER_THRESHOLD_F {
            Classification::Elevated
        } else {
            Classification::Normal
        }
    }

    pub const fn is_elevated(self) -> bool {
        matches!(self, Classification::Elevated)
    }
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    (celsius * 9.0) / 5.0 + 32.0
}

/// Estimated core temperature (°F) for a wrist-adjacent reading (°C).
pub fn core_fahrenheit(wrist_c: f32) -> f32 {
    celsius_to_fahrenheit(wrist_c) + WRIST_TO_CORE_OFFSET_F
}
