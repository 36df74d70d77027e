//! Interfaces to the board-specific collaborators.
//!
//! The core never touches peripherals directly. The firmware implements
//! these traits on top of Embassy drivers; tests implement them with
//! recording fakes.

use crate::error::Result;
use crate::temperature::TemperatureSample;
use crate::ui::{DisplayMode, Symbol};

/// Source of ambient/object temperature pairs.
pub trait TemperatureSensor {
    /// Pull the latest conversion.
    fn read(&mut self) -> Result<TemperatureSample>;
}

/// The red/green result LEDs plus the presence heartbeat LED.
pub trait Indicators {
    fn set_red(&mut self, on: bool);
    fn set_green(&mut self, on: bool);
    /// Heartbeat LED: blinks while measuring, steady while a reading is
    /// held, off when idle.
    fn set_status(&mut self, on: bool);

    /// Set both LEDs at once.
    fn set_pattern(&mut self, red: bool, green: bool) {
        self.set_red(red);
        self.set_green(green);
    }
}

/// Piezo buzzer. How long it sounds is decided by the caller.
pub trait Buzzer {
    fn start(&mut self);
    fn stop(&mut self);
    /// Short bounded pulse ("still measuring"). Must not block for longer
    /// than a few tens of milliseconds.
    fn chirp(&mut self);
}

/// Character display with a handful of fixed symbols.
pub trait SegmentDisplay {
    /// Show `text` (at most `DISPLAY_TEXT_WIDTH` characters).
    fn write_text(&mut self, text: &str);
    fn set_symbol(&mut self, symbol: Symbol, on: bool);
    /// Blank every segment.
    fn clear(&mut self);
}

/// Durable storage for the selected mode. Fire-and-forget.
pub trait ModeStore {
    fn persist(&mut self, mode: DisplayMode);
}

/// Hardware watchdog.
pub trait Watchdog {
    fn feed(&mut self);
}

/// Everything a [`DeviceSession`](crate::session::DeviceSession) drives.
pub trait Board:
    TemperatureSensor + Indicators + Buzzer + SegmentDisplay + ModeStore + Watchdog
{
}

impl<T> Board for T where
    T: TemperatureSensor + Indicators + Buzzer + SegmentDisplay + ModeStore + Watchdog
{
}
