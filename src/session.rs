//! Device session - the single long-lived owner of all application state.
//!
//! Interrupt handlers and timer/button tasks only raise [`EventFlags`].
//! The main loop drains them through [`DeviceSession::run_pass`] in a fixed
//! order: tick, mode button, unit button, then an unconditional render.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::{FEVER_BEEP_RENDERS, NORMAL_BEEP_RENDERS};
use crate::hal::Board;
use crate::stabilizer::{Stabilizer, TickOutcome};
use crate::temperature::Classification;
use crate::ui::{DisplayMode, ModeController};

/// Sticky wake-up flags set from interrupt context.
///
/// Raising a flag that is already set coalesces the events (last edge
/// wins); there is no queue.
pub struct EventFlags {
    tick: AtomicBool,
    mode_button: AtomicBool,
    unit_button: AtomicBool,
}

impl EventFlags {
    pub const fn new() -> Self {
        Self {
            tick: AtomicBool::new(false),
            mode_button: AtomicBool::new(false),
            unit_button: AtomicBool::new(false),
        }
    }

    pub fn raise_tick(&self) {
        self.tick.store(true, Ordering::Release);
    }

    pub fn raise_mode_button(&self) {
        self.mode_button.store(true, Ordering::Release);
    }

    pub fn raise_unit_button(&self) {
        self.unit_button.store(true, Ordering::Release);
    }

    /// Clear and return the tick flag in one step.
    pub fn take_tick(&self) -> bool {
        self.tick.swap(false, Ordering::AcqRel)
    }

    pub fn take_mode_button(&self) -> bool {
        self.mode_button.swap(false, Ordering::AcqRel)
    }

    pub fn take_unit_button(&self) -> bool {
        self.unit_button.swap(false, Ordering::AcqRel)
    }

    /// Whether any flag is waiting to be drained.
    pub fn pending(&self) -> bool {
        self.tick.load(Ordering::Acquire)
            || self.mode_button.load(Ordering::Acquire)
            || self.unit_button.load(Ordering::Acquire)
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Stabilization engine plus UI controller.
#[derive(Default)]
pub struct DeviceSession {
    engine: Stabilizer,
    ui: ModeController,
    status_led: bool,
}

impl DeviceSession {
    pub const fn new() -> Self {
        Self {
            engine: Stabilizer::new(),
            ui: ModeController::new(),
            status_led: false,
        }
    }

    /// Power-on state: both LEDs lit, buzzer silent, READY on screen.
    pub fn start<B: Board>(&mut self, board: &mut B) {
        info!("Session start, mode {}", self.ui.mode());
        board.set_pattern(true, true);
        self.set_status(false, board);
        board.stop();
        board.clear();
        self.render(board);
    }

    /// Drain pending events in order and redraw.
    pub fn run_pass<B: Board>(&mut self, flags: &EventFlags, board: &mut B) {
        if flags.take_tick() {
            self.on_tick(board);
        }
        if flags.take_mode_button() {
            self.on_mode_button(board);
        }
        if flags.take_unit_button() {
            self.on_unit_button();
        }
        self.render(board);
    }

    /// One stabilization pass. Always feeds the watchdog, even when the
    /// sensor read fails.
    pub fn on_tick<B: Board>(&mut self, board: &mut B) {
        board.feed();

        let sample = match board.read().and_then(|s| s.validate()) {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Skipping tick: {}", e);
                return;
            }
        };

        let outcome = self.engine.on_tick(sample);
        self.apply(outcome, board);
    }

    pub fn on_mode_button<B: Board>(&mut self, board: &mut B) -> DisplayMode {
        self.ui.on_mode_button(board)
    }

    pub fn on_unit_button(&mut self) -> bool {
        self.ui.on_unit_button()
    }

    pub fn render<B: Board>(&mut self, board: &mut B) {
        self.ui.render(&self.engine, board);
    }

    /// Turn an engine outcome into LED / buzzer activity.
    fn apply<B: Board>(&mut self, outcome: TickOutcome, board: &mut B) {
        match outcome {
            TickOutcome::Idle => {
                board.set_pattern(true, true);
                self.set_status(false, board);
            }
            TickOutcome::Released => {
                board.set_pattern(true, true);
                self.set_status(true, board);
            }
            TickOutcome::Measuring { .. } => {
                board.set_pattern(false, false);
                self.set_status(!self.status_led, board);
                board.chirp();
            }
            TickOutcome::Locked(reading) => {
                self.set_status(!self.status_led, board);
                board.chirp();
                let renders = match reading.classification {
                    Classification::Elevated => {
                        board.set_pattern(true, false);
                        FEVER_BEEP_RENDERS
                    }
                    Classification::Normal => {
                        board.set_pattern(false, true);
                        NORMAL_BEEP_RENDERS
                    }
                };
                self.ui.start_beep(renders, board);
            }
            TickOutcome::Holding { .. } => self.set_status(true, board),
        }
    }

    fn set_status<B: Board>(&mut self, on: bool, board: &mut B) {
        self.status_led = on;
        board.set_status(on);
    }

    pub fn engine(&self) -> &Stabilizer {
        &self.engine
    }

    pub fn ui(&self) -> &ModeController {
        &self.ui
    }
}
