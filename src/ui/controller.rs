//! Mode/UI controller.
//!
//! Owns the display mode, the unit preference and the buzzer countdown.
//! Reads the stabilization engine but never mutates it.

use crate::hal::{Buzzer, ModeStore, SegmentDisplay};
use crate::stabilizer::{Phase, Stabilizer};
use crate::temperature::{core_fahrenheit, TemperatureUnit};
use crate::ui::label::{self, Label};
use crate::ui::{DisplayMode, Symbol};

/// Symbols shown in every mode, with their state.
const SYMBOLS: [(Symbol, bool); 3] = [
    (Symbol::Probe, true),
    (Symbol::Alert, false),
    (Symbol::Point, true),
];

pub struct ModeController {
    mode: DisplayMode,
    unit: TemperatureUnit,
    /// Render passes left to count down; the pass that finds it at zero
    /// stops the buzzer.
    beep_countdown: u8,
    buzzing: bool,
}

impl ModeController {
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::ProductionDemo,
            unit: TemperatureUnit::Fahrenheit,
            beep_countdown: 0,
            buzzing: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[inline]
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Render passes the buzzer still has to run.
    #[inline]
    pub fn beep_remaining(&self) -> u8 {
        self.beep_countdown
    }

    /// Advance to the next mode, persist it and blank the display so no
    /// symbols from the previous mode linger.
    pub fn on_mode_button<H>(&mut self, hw: &mut H) -> DisplayMode
    where
        H: ModeStore + SegmentDisplay,
    {
        self.mode = self.mode.next();
        info!("Mode -> {}", self.mode);
        hw.persist(self.mode);
        hw.clear();
        self.mode
    }

    /// Toggle °C/°F. Only meaningful in raw debug; returns whether the
    /// unit changed.
    pub fn on_unit_button(&mut self) -> bool {
        match self.mode {
            DisplayMode::RawDebug => {
                self.unit = self.unit.toggled();
                info!("Unit -> {}", self.unit);
                true
            }
            DisplayMode::ProductionDemo => false,
        }
    }

    /// Sound the buzzer for `renders` render passes.
    pub fn start_beep(&mut self, renders: u8, buzzer: &mut impl Buzzer) {
        self.beep_countdown = renders;
        if renders == 0 {
            return;
        }
        buzzer.start();
        self.buzzing = true;
    }

    /// Text for the current mode and engine state.
    pub fn label(&self, engine: &Stabilizer) -> Label {
        match self.mode {
            DisplayMode::RawDebug => {
                label::reading(self.unit.from_celsius(engine.latest_object_c()))
            }
            DisplayMode::ProductionDemo => match (engine.phase(), engine.locked()) {
                (Phase::Locked, Some(reading)) => {
                    label::reading(core_fahrenheit(reading.celsius))
                }
                (Phase::Accumulating, _) => label::text("MEASURE"),
                _ => label::text("READY"),
            },
        }
    }

    /// Draw the current state and run the buzzer countdown.
    pub fn render<H>(&mut self, engine: &Stabilizer, hw: &mut H)
    where
        H: SegmentDisplay + Buzzer,
    {
        let text = self.label(engine);
        hw.write_text(text.as_str());
        for (symbol, on) in SYMBOLS {
            hw.set_symbol(symbol, on);
        }

        if self.beep_countdown > 0 {
            self.beep_countdown -= 1;
        } else if self.buzzing {
            hw.stop();
            self.buzzing = false;
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
