//! Stabilization engine.
//!
//! Consumes one object-temperature sample per tick and decides when the
//! signal has settled enough to lock a reading:
//!
//! ```text
//!            object present                 4 settled samples
//!   Idle ─────────────────────▶ Accumulating ─────────────────▶ Locked
//!    ▲                               │                            │
//!    │       object removed          │     hold expired           │
//!    └───────────────────────────────┴────────────────────────────┘
//! ```
//!
//! Only samples from the current presence run are compared: the window is
//! emptied whenever the engine falls back to idle without an object, so a
//! fresh measurement can lock on its fourth in-range sample.
//!
//! A locked reading stays on screen for [`HOLD_AFTER_LOCK_TICKS`] while the
//! object is still present, or [`HOLD_AFTER_LOSS_TICKS`] once it is gone.
//! The engine is pure state; the session turns each [`TickOutcome`] into
//! LED / buzzer activity.

use crate::config::{
    HOLD_AFTER_LOCK_TICKS, HOLD_AFTER_LOSS_TICKS, OBJECT_DETECT_THRESHOLD_C,
    STABLE_READINGS_REQUIRED, STABLE_TOLERANCE_C,
};
use crate::history::SampleHistory;
use crate::temperature::{Classification, TemperatureSample};

/// Where the measurement cycle currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Nothing in range and nothing held - ready for a measurement.
    #[default]
    Idle,
    /// Object in range, waiting for the readings to settle.
    Accumulating,
    /// A reading has been locked and is being shown.
    Locked,
}

/// Reading captured at the lock event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockedReading {
    /// Wrist temperature at the moment of locking (°C).
    pub celsius: f32,
    pub classification: Classification,
}

impl LockedReading {
    fn capture(celsius: f32) -> Self {
        Self {
            celsius,
            classification: Classification::of(celsius),
        }
    }
}

/// What a single tick did, for the caller to act on.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Nothing in range, nothing shown.
    Idle,
    /// Object in range, not settled yet. Carries the current streak.
    Measuring { stable_count: u16 },
    /// A new reading was locked on this tick.
    Locked(LockedReading),
    /// Still showing the last locked reading.
    Holding { hold_count: u16 },
    /// The hold just expired; back to idle.
    Released,
}

/// Time-windowed consensus over the object temperature.
#[derive(Clone, Debug, Default)]
pub struct Stabilizer {
    history: SampleHistory,
    latest_object_c: f32,
    phase: Phase,
    stable_count: u16,
    hold_count: u16,
    locked: Option<LockedReading>,
}

impl Stabilizer {
    pub const fn new() -> Self {
        Self {
            history: SampleHistory::new(),
            latest_object_c: 0.0,
            phase: Phase::Idle,
            stable_count: 0,
            hold_count: 0,
            locked: None,
        }
    }

    /// Run one stabilization pass over a fresh sample.
    pub fn on_tick(&mut self, sample: TemperatureSample) -> TickOutcome {
        let object_c = sample.object_c;
        self.latest_object_c = object_c;

        if object_c > OBJECT_DETECT_THRESHOLD_C {
            self.history.push(object_c);
            self.object_present(object_c)
        } else {
            self.object_absent(object_c)
        }
    }

    fn object_present(&mut self, object_c: f32) -> TickOutcome {
        if self.phase == Phase::Locked {
            return self.hold(HOLD_AFTER_LOCK_TICKS);
        }

        self.phase = Phase::Accumulating;
        if self.history.is_settled(STABLE_TOLERANCE_C) {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.stable_count = 0;
        }

        if self.stable_count >= STABLE_READINGS_REQUIRED {
            let reading = LockedReading::capture(object_c);
            self.locked = Some(reading);
            self.phase = Phase::Locked;
            self.hold_count = 0;
            info!(
                "Locked {} C ({})",
                reading.celsius,
                reading.classification
            );
            return TickOutcome::Locked(reading);
        }

        debug!("Measuring: stable streak {}", self.stable_count);
        TickOutcome::Measuring {
            stable_count: self.stable_count,
        }
    }

    fn object_absent(&mut self, object_c: f32) -> TickOutcome {
        if self.phase == Phase::Locked {
            self.history.push(object_c);
            let outcome = self.hold(HOLD_AFTER_LOSS_TICKS);
            if outcome == TickOutcome::Released {
                self.history.clear();
            }
            return outcome;
        }

        self.reset();
        self.history.clear();
        TickOutcome::Idle
    }

    fn hold(&mut self, limit: u16) -> TickOutcome {
        self.hold_count = self.hold_count.saturating_add(1);
        if self.hold_count > limit {
            debug!("Hold expired after {} ticks", self.hold_count);
            self.reset();
            return TickOutcome::Released;
        }
        TickOutcome::Holding {
            hold_count: self.hold_count,
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.stable_count = 0;
        self.hold_count = 0;
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn stable_count(&self) -> u16 {
        self.stable_count
    }

    #[inline]
    pub fn hold_count(&self) -> u16 {
        self.hold_count
    }

    /// The last locked reading. Kept after the hold expires until the next
    /// lock replaces it.
    #[inline]
    pub fn locked(&self) -> Option<LockedReading> {
        self.locked
    }

    /// Live (unlocked) object temperature from the last tick (°C).
    #[inline]
    pub fn latest_object_c(&self) -> f32 {
        self.latest_object_c
    }

    pub fn history(&self) -> &SampleHistory {
        &self.history
    }
}
