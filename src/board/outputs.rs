//! Indicator LEDs, piezo buzzer and watchdog handle.

use embassy_nrf::gpio::Output;
use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use embassy_nrf::wdt::WatchdogHandle;
use embassy_time::{block_for, Duration};
use wristtemp::config::{BUZZER_FREQ_HZ, CHIRP_MS};
use wristtemp::hal::{Buzzer, Indicators, Watchdog};

/// PWM base clock with `Prescaler::Div1`.
const PWM_CLOCK_HZ: u32 = 16_000_000;

/// Red / green result LEDs and the status LED, all active-low.
pub struct Leds<'d> {
    red: Output<'d>,
    green: Output<'d>,
    status: Output<'d>,
}

impl<'d> Leds<'d> {
    pub fn new(red: Output<'d>, green: Output<'d>, status: Output<'d>) -> Self {
        Self { red, green, status }
    }
}

fn drive(pin: &mut Output<'_>, on: bool) {
    if on {
        pin.set_low();
    } else {
        pin.set_high();
    }
}

impl Indicators for Leds<'_> {
    fn set_red(&mut self, on: bool) {
        drive(&mut self.red, on);
    }

    fn set_green(&mut self, on: bool) {
        drive(&mut self.green, on);
    }

    fn set_status(&mut self, on: bool) {
        drive(&mut self.status, on);
    }
}

/// Square wave on one PWM channel.
pub struct Piezo<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> Piezo<'d, T> {
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        let top = (PWM_CLOCK_HZ / BUZZER_FREQ_HZ) as u16;
        pwm.set_prescaler(Prescaler::Div1);
        pwm.set_max_duty(top);
        pwm.set_duty(0, top / 2);
        pwm.disable();
        Self { pwm }
    }
}

impl<T: Instance> Buzzer for Piezo<'_, T> {
    fn start(&mut self) {
        self.pwm.enable();
    }

    fn stop(&mut self) {
        self.pwm.disable();
    }

    fn chirp(&mut self) {
        self.start();
        block_for(Duration::from_millis(CHIRP_MS));
        self.stop();
    }
}

/// Handle of the single watchdog reload register in use.
pub struct Dog {
    handle: WatchdogHandle,
}

impl Dog {
    pub fn new(handle: WatchdogHandle) -> Self {
        Self { handle }
    }
}

impl Watchdog for Dog {
    fn feed(&mut self) {
        self.handle.pet();
    }
}
