//! Application-wide constants and compile-time configuration.
//!
//! All measurement thresholds, hold timings, hardware pin assignments and
//! storage parameters live here so they can be tuned in one place.

// Measurement

/// Period of the measurement tick (ms). One stabilization pass per tick.
pub const TICK_PERIOD_MS: u64 = 1000;

/// Object temperature above which something is in front of the sensor (°C).
pub const OBJECT_DETECT_THRESHOLD_C: f32 = 28.5;

/// Maximum spread between the newest sample and each older one (°C).
pub const STABLE_TOLERANCE_C: f32 = 1.0;

/// Consecutive stable windows needed before a reading is locked.
pub const STABLE_READINGS_REQUIRED: u16 = 4;

/// Number of object-temperature samples kept for the stability window.
pub const HISTORY_LEN: usize = 4;

/// Wrist-to-core correction added to the Fahrenheit reading (°F).
pub const WRIST_TO_CORE_OFFSET_F: f32 = 13.0;

/// Core temperature above which a reading counts as a fever (°F).
pub const FEVER_THRESHOLD_F: f32 = 100.4;

/// Ticks a locked result stays on screen after the object is removed.
pub const HOLD_AFTER_LOSS_TICKS: u16 = 15;

/// Ticks a locked result stays on screen while the object is still present.
pub const HOLD_AFTER_LOCK_TICKS: u16 = 20;

// Feedback

/// Render passes the buzzer sounds for an elevated reading.
pub const FEVER_BEEP_RENDERS: u8 = 20;

/// Render passes the buzzer sounds for a normal reading.
pub const NORMAL_BEEP_RENDERS: u8 = 2;

/// Length of the "still measuring" chirp (ms).
pub const CHIRP_MS: u64 = 20;

/// Piezo drive frequency (Hz).
pub const BUZZER_FREQ_HZ: u32 = 6000;

/// Characters the display can show.
pub const DISPLAY_TEXT_WIDTH: usize = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button MODE    → P0.11
//   Button UNIT    → P0.12
//   Red LED        → P0.13 (active-low)
//   Green LED      → P0.14 (active-low)
//   Status LED     → P0.15 (active-low)
//   Buzzer (PWM0)  → P0.03
//   Display SDA    → P0.26  (TWIM0)
//   Display SCL    → P0.27  (TWIM0)
//   Sensor SDA     → P0.30  (TWIM1)
//   Sensor SCL     → P0.31  (TWIM1)

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Watchdog timeout (seconds). Fed once per tick.
pub const WATCHDOG_TIMEOUT_SECS: u32 = 2;

/// SMBus address of the IR thermometer.
pub const SENSOR_I2C_ADDR: u8 = 0x5A;

// Mode storage

/// Flash page index where mode storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for mode storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;
