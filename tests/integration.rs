//! Integration tests for wristtemp host-testable logic.
//!
//! Drives a `DeviceSession` through `EventFlags` against a recording board.

use wristtemp::hal::{Buzzer, Indicators, ModeStore, SegmentDisplay, TemperatureSensor, Watchdog};
use wristtemp::{
    Classification, DeviceSession, DisplayMode, Error, EventFlags, Phase, Symbol,
    TemperatureSample,
};

#[derive(Default)]
struct FakeBoard {
    next_object_c: f32,
    fail_reads: bool,
    red: bool,
    green: bool,
    status: bool,
    status_changes: usize,
    buzzer_on: bool,
    chirps: usize,
    text: String,
    symbols: Vec<(Symbol, bool)>,
    clears: usize,
    persisted: Vec<DisplayMode>,
    feeds: usize,
}

impl TemperatureSensor for FakeBoard {
    fn read(&mut self) -> wristtemp::Result<TemperatureSample> {
        if self.fail_reads {
            return Err(Error::Sensor);
        }
        Ok(TemperatureSample::new(23.0, self.next_object_c))
    }
}

impl Indicators for FakeBoard {
    fn set_red(&mut self, on: bool) {
        self.red = on;
    }
    fn set_green(&mut self, on: bool) {
        self.green = on;
    }
    fn set_status(&mut self, on: bool) {
        if on != self.status {
            self.status_changes += 1;
        }
        self.status = on;
    }
}

impl Buzzer for FakeBoard {
    fn start(&mut self) {
        self.buzzer_on = true;
    }
    fn stop(&mut self) {
        self.buzzer_on = false;
    }
    fn chirp(&mut self) {
        self.chirps += 1;
    }
}

impl SegmentDisplay for FakeBoard {
    fn write_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
    fn set_symbol(&mut self, symbol: Symbol, on: bool) {
        self.symbols.retain(|(s, _)| *s != symbol);
        self.symbols.push((symbol, on));
    }
    fn clear(&mut self) {
        self.clears += 1;
        self.text.clear();
        self.symbols.clear();
    }
}

impl ModeStore for FakeBoard {
    fn persist(&mut self, mode: DisplayMode) {
        self.persisted.push(mode);
    }
}

impl Watchdog for FakeBoard {
    fn feed(&mut self) {
        self.feeds += 1;
    }
}

struct Rig {
    session: DeviceSession,
    flags: EventFlags,
    board: FakeBoard,
}

impl Rig {
    fn new() -> Self {
        let mut rig = Rig {
            session: DeviceSession::new(),
            flags: EventFlags::new(),
            board: FakeBoard::default(),
        };
        rig.session.start(&mut rig.board);
        rig
    }

    fn tick(&mut self, object_c: f32) {
        self.board.next_object_c = object_c;
        self.flags.raise_tick();
        self.session.run_pass(&self.flags, &mut self.board);
    }

    fn ticks(&mut self, object_c: f32, n: usize) {
        for _ in 0..n {
            self.tick(object_c);
        }
    }

    fn press_mode(&mut self) {
        self.flags.raise_mode_button();
        self.session.run_pass(&self.flags, &mut self.board);
    }

    fn press_unit(&mut self) {
        self.flags.raise_unit_button();
        self.session.run_pass(&self.flags, &mut self.board);
    }
}

#[test]
fn boots_ready_with_both_leds() {
    let rig = Rig::new();
    assert_eq!(rig.board.text, "READY");
    assert!(rig.board.red && rig.board.green);
    assert!(!rig.board.buzzer_on);
    assert!(!rig.board.status);
    assert!(rig.board.symbols.contains(&(Symbol::Probe, true)));
    assert!(rig.board.symbols.contains(&(Symbol::Alert, false)));
}

#[test]
fn normal_measurement_cycle() {
    let mut rig = Rig::new();

    rig.tick(30.0);
    assert_eq!(rig.board.text, "MEASURE");
    assert!(!rig.board.red && !rig.board.green);
    assert_eq!(rig.board.chirps, 1);

    rig.ticks(30.0, 3);
    assert_eq!(rig.session.engine().phase(), Phase::Locked);
    // 30 °C -> 86 °F + 13 °F wrist offset.
    assert_eq!(rig.board.text, "T 99.00");
    assert!(!rig.board.red && rig.board.green);
    // Progress chirp on every accumulating tick, lock tick included.
    assert_eq!(rig.board.chirps, 4);

    // Short beep: on through the lock pass and the next one.
    assert!(rig.board.buzzer_on);
    rig.tick(30.0);
    assert!(rig.board.buzzer_on);
    rig.tick(30.0);
    assert!(!rig.board.buzzer_on);
    assert_eq!(rig.board.chirps, 4);
}

#[test]
fn fever_measurement_lights_red_and_beeps_long() {
    let mut rig = Rig::new();
    rig.ticks(36.0, 4);

    let reading = rig.session.engine().locked().unwrap();
    assert_eq!(reading.classification, Classification::Elevated);
    assert!(rig.board.red && !rig.board.green);

    rig.ticks(36.0, 19);
    assert!(rig.board.buzzer_on);
    rig.tick(36.0);
    assert!(!rig.board.buzzer_on);
}

#[test]
fn classification_boundary() {
    // 30.77 °C -> 100.386 °F core, 30.78 °C -> 100.404 °F core.
    let mut rig = Rig::new();
    rig.ticks(30.77, 4);
    assert_eq!(
        rig.session.engine().locked().unwrap().classification,
        Classification::Normal
    );
    assert!(!rig.board.red && rig.board.green);

    let mut rig = Rig::new();
    rig.ticks(30.78, 4);
    assert_eq!(
        rig.session.engine().locked().unwrap().classification,
        Classification::Elevated
    );
    assert!(rig.board.red && !rig.board.green);
}

#[test]
fn cold_lead_in_then_lock_on_fourth_present_tick() {
    let mut rig = Rig::new();
    rig.ticks(22.0, 5);
    rig.ticks(33.0, 3);
    assert_eq!(rig.session.engine().phase(), Phase::Accumulating);

    rig.tick(33.0);
    assert_eq!(rig.session.engine().phase(), Phase::Locked);
    assert_eq!(rig.board.text, "T 104.40");
}

#[test]
fn status_led_follows_presence() {
    let mut rig = Rig::new();
    rig.ticks(22.0, 2);
    assert!(!rig.board.status);

    // Blinks once per accumulating tick.
    rig.tick(33.0);
    assert!(rig.board.status);
    rig.tick(33.0);
    assert!(!rig.board.status);
    rig.ticks(33.0, 2);
    assert_eq!(rig.board.status_changes, 4);

    // Steady while the reading is held.
    rig.ticks(33.0, 3);
    assert!(rig.board.status);
    rig.ticks(20.0, 3);
    assert!(rig.board.status);

    // Off once the hold has run out and nothing is in range.
    rig.ticks(20.0, 13);
    assert_eq!(rig.session.engine().phase(), Phase::Idle);
    rig.tick(20.0);
    assert!(!rig.board.status);
}

#[test]
fn idle_decay_after_removal() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 4);

    rig.ticks(20.0, 15);
    assert_eq!(rig.session.engine().phase(), Phase::Locked);
    assert_eq!(rig.board.text, "T 104.40");

    rig.tick(20.0);
    assert_eq!(rig.session.engine().phase(), Phase::Idle);
    assert_eq!(rig.session.engine().stable_count(), 0);
    assert_eq!(rig.session.engine().hold_count(), 0);
    assert_eq!(rig.board.text, "READY");
    assert!(rig.board.red && rig.board.green);
}

#[test]
fn held_lock_decays_with_object_present() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 4);
    rig.ticks(33.0, 20);
    assert_eq!(rig.session.engine().phase(), Phase::Locked);

    rig.tick(33.0);
    assert_eq!(rig.session.engine().phase(), Phase::Idle);
    assert_eq!(rig.board.text, "READY");
}

#[test]
fn unit_toggle_has_no_effect_in_demo() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 4);
    let before = rig.board.text.clone();

    rig.press_unit();
    assert_eq!(rig.board.text, before);
    assert_eq!(rig.session.ui().mode(), DisplayMode::ProductionDemo);
    assert!(rig.board.persisted.is_empty());
}

#[test]
fn raw_debug_shows_live_reading_and_toggles_unit() {
    let mut rig = Rig::new();
    rig.press_mode();
    rig.tick(25.0);
    assert_eq!(rig.board.text, "T 77.00");

    rig.press_unit();
    assert_eq!(rig.board.text, "T 25.00");

    rig.tick(20.0);
    assert_eq!(rig.board.text, "T 20.00");
}

#[test]
fn mode_button_cycles_and_clears_once_per_press() {
    let mut rig = Rig::new();
    let clears_at_boot = rig.board.clears;

    let expected = [
        DisplayMode::RawDebug,
        DisplayMode::ProductionDemo,
        DisplayMode::RawDebug,
        DisplayMode::ProductionDemo,
    ];
    for (presses, mode) in expected.iter().enumerate() {
        rig.press_mode();
        assert_eq!(rig.session.ui().mode(), *mode);
        assert_eq!(rig.board.clears, clears_at_boot + presses + 1);
    }
    assert_eq!(rig.board.persisted, expected);
}

#[test]
fn coalesced_presses_count_once() {
    let mut rig = Rig::new();
    rig.flags.raise_mode_button();
    rig.flags.raise_mode_button();
    rig.session.run_pass(&rig.flags, &mut rig.board);

    assert_eq!(rig.session.ui().mode(), DisplayMode::RawDebug);
    assert!(!rig.flags.pending());
}

#[test]
fn tick_is_processed_before_buttons() {
    let mut rig = Rig::new();
    rig.board.next_object_c = 26.5;
    rig.flags.raise_mode_button();
    rig.flags.raise_unit_button();
    rig.flags.raise_tick();
    rig.session.run_pass(&rig.flags, &mut rig.board);

    // Tick sampled, mode switched, then unit toggled in raw debug.
    assert_eq!(rig.session.ui().mode(), DisplayMode::RawDebug);
    assert_eq!(rig.board.text, "T 26.50");
}

#[test]
fn render_without_tick_leaves_engine_alone() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 3);
    let streak = rig.session.engine().stable_count();
    let feeds = rig.board.feeds;

    for _ in 0..5 {
        rig.session.run_pass(&rig.flags, &mut rig.board);
    }
    assert_eq!(rig.session.engine().stable_count(), streak);
    assert_eq!(rig.board.feeds, feeds);
    assert_eq!(rig.board.text, "MEASURE");
}

#[test]
fn sensor_failure_skips_pass_but_feeds_watchdog() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 2);
    let streak = rig.session.engine().stable_count();

    rig.board.fail_reads = true;
    rig.tick(33.0);
    assert_eq!(rig.board.feeds, 3);
    assert_eq!(rig.session.engine().stable_count(), streak);

    rig.board.fail_reads = false;
    rig.ticks(33.0, 2);
    assert_eq!(rig.session.engine().phase(), Phase::Locked);
}

#[test]
fn non_finite_sample_is_ignored() {
    let mut rig = Rig::new();
    rig.ticks(33.0, 2);
    rig.tick(f32::NAN);
    assert_eq!(rig.session.engine().latest_object_c(), 33.0);
    assert_eq!(rig.session.engine().phase(), Phase::Accumulating);
}

#[test]
fn every_tick_feeds_watchdog() {
    let mut rig = Rig::new();
    rig.ticks(22.0, 10);
    assert_eq!(rig.board.feeds, 10);
}
