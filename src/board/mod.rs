//! nRF52840 board support - the concrete collaborators behind `wristtemp::hal`.
//!
//! ## Components
//!
//! - **Sensor**: IR thermometer on TWIM1
//! - **Display**: SSD1306 128×64 OLED on TWIM0
//! - **Outputs**: red/green/status LEDs, PWM piezo, watchdog
//! - **Buttons**: 2 tactile switches with debouncing (MODE, UNIT)
//! - **Storage**: display mode in internal flash

pub mod buttons;
pub mod display;
pub mod outputs;
pub mod sensor;
pub mod storage;

use embassy_nrf::pwm::Instance;
use wristtemp::hal::{
    Buzzer, Indicators, ModeStore, SegmentDisplay, TemperatureSensor, Watchdog,
};
use wristtemp::{DisplayMode, Result, Symbol, TemperatureSample};

use self::display::Panel;
use self::outputs::{Dog, Leds, Piezo};
use self::sensor::IrThermometer;
use self::storage::ModeRecorder;

/// Every peripheral the session drives, bundled so it satisfies
/// [`wristtemp::hal::Board`].
pub struct Hardware<'d, S, D, P: Instance> {
    pub sensor: IrThermometer<S>,
    pub panel: Panel<D>,
    pub leds: Leds<'d>,
    pub piezo: Piezo<'d, P>,
    pub dog: Dog,
    pub modes: ModeRecorder,
}

impl<S, D, P> TemperatureSensor for Hardware<'_, S, D, P>
where
    S: embedded_hal::i2c::I2c,
    P: Instance,
{
    fn read(&mut self) -> Result<TemperatureSample> {
        self.sensor.read()
    }
}

impl<S, D, P: Instance> Indicators for Hardware<'_, S, D, P> {
    fn set_red(&mut self, on: bool) {
        self.leds.set_red(on);
    }

    fn set_green(&mut self, on: bool) {
        self.leds.set_green(on);
    }

    fn set_status(&mut self, on: bool) {
        self.leds.set_status(on);
    }
}

impl<S, D, P: Instance> Buzzer for Hardware<'_, S, D, P> {
    fn start(&mut self) {
        self.piezo.start();
    }

    fn stop(&mut self) {
        self.piezo.stop();
    }

    fn chirp(&mut self) {
        self.piezo.chirp();
    }
}

impl<S, D, P> SegmentDisplay for Hardware<'_, S, D, P>
where
    D: embedded_hal::i2c::I2c,
    P: Instance,
{
    fn write_text(&mut self, text: &str) {
        self.panel.write_text(text);
    }

    fn set_symbol(&mut self, symbol: Symbol, on: bool) {
        self.panel.set_symbol(symbol, on);
    }

    fn clear(&mut self) {
        self.panel.clear();
    }
}

impl<S, D, P: Instance> ModeStore for Hardware<'_, S, D, P> {
    fn persist(&mut self, mode: DisplayMode) {
        self.modes.persist(mode);
    }
}

impl<S, D, P: Instance> Watchdog for Hardware<'_, S, D, P> {
    fn feed(&mut self) {
        self.dog.feed();
    }
}
