//! User interface - 8-character display, buzzer feedback and two buttons.
//!
//! The controller keeps the display mode and unit preference and renders
//! the current engine state once per main-loop pass.
//!
//! ## Buttons
//!
//! - **MODE**: cycle production demo ↔ raw debug
//! - **UNIT**: toggle °C / °F (raw debug only)

pub mod controller;
pub mod label;

pub use controller::ModeController;
pub use label::Label;

/// Screens the device can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// READY / MEASURE / locked core temperature.
    #[default]
    ProductionDemo,
    /// Live object temperature, unit selectable.
    RawDebug,
}

impl DisplayMode {
    /// Number of modes in the cycle.
    pub const COUNT: u8 = 2;

    /// Next mode in the fixed cycle.
    pub const fn next(self) -> Self {
        Self::from_u8((self.as_u8() + 1) % Self::COUNT)
    }

    /// Stable encoding handed to the persistence hook.
    pub const fn as_u8(self) -> u8 {
        match self {
            DisplayMode::ProductionDemo => 0,
            DisplayMode::RawDebug => 1,
        }
    }

    /// Decode a persisted value. Unknown values fall back to the demo.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => DisplayMode::RawDebug,
            _ => DisplayMode::ProductionDemo,
        }
    }
}

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Mode,
    Unit,
}

/// Fixed glyphs next to the text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Thermometer icon.
    Probe,
    /// Warning triangle.
    Alert,
    /// Decimal point between the integer and fraction digits.
    Point,
}
