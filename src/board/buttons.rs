//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - MODE - cycle production demo / raw debug
//!   - UNIT - toggle °C / °F in raw debug
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, raises the matching event flag and wakes the main loop.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use wristtemp::config::BUTTON_DEBOUNCE_MS;
use wristtemp::{ButtonEvent, EventFlags};

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, raises the flag,
/// then waits for release before repeating.
pub async fn button_loop(
    pin: AnyPin,
    event: ButtonEvent,
    flags: &'static EventFlags,
    wake: &'static Signal<CriticalSectionRawMutex, ()>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: {}", event);
            match event {
                ButtonEvent::Mode => flags.raise_mode_button(),
                ButtonEvent::Unit => flags.raise_unit_button(),
            }
            wake.signal(());

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
