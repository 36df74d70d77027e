//! wristtemp firmware for nRF52840.
//!
//! # Architecture
//!
//! Interrupt-driven cooperative loop:
//! - Tick task: raises the tick flag once per second
//! - Button tasks: raise the MODE / UNIT flags on debounced presses
//! - Storage task: writes the selected mode to flash in the background
//! - Main task: sleeps until woken, then runs one `DeviceSession::run_pass`
//!   (tick → mode → unit → render)
//!
//! The watchdog is fed on every tick pass; a stuck main loop resets the
//! chip.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::wdt::{self, Watchdog};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use wristtemp::config::{SENSOR_I2C_ADDR, TICK_PERIOD_MS, WATCHDOG_TIMEOUT_SECS};
use wristtemp::{ButtonEvent, DeviceSession, EventFlags};
use {defmt_rtt as _, panic_probe as _};

use crate::board::display::Panel;
use crate::board::outputs::{Dog, Leds, Piezo};
use crate::board::sensor::IrThermometer;
use crate::board::storage::ModeRecorder;
use crate::board::Hardware;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

/// Watchdog clock (32.768 kHz LFCLK).
const WDT_TICKS_PER_SEC: u32 = 32_768;

/// Event flags shared between the wake sources and the main loop.
static FLAGS: EventFlags = EventFlags::new();

/// Wakes the main loop after any flag is raised.
static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::task]
async fn tick_task() -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    loop {
        ticker.next().await;
        FLAGS.raise_tick();
        WAKE.signal(());
    }
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(pin: AnyPin, event: ButtonEvent) -> ! {
    board::buttons::button_loop(pin, event, &FLAGS, &WAKE).await
}

#[embassy_executor::task]
async fn storage_task(flash: BlockingAsync<Nvmc<'static>>) -> ! {
    board::storage::storage_loop(flash).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("wristtemp starting");

    // Watchdog first so a hang anywhere below still resets the chip.
    let mut wdt_config = wdt::Config::default();
    wdt_config.timeout_ticks = WDT_TICKS_PER_SEC * WATCHDOG_TIMEOUT_SECS;
    let (_wdt, [wdt_handle]) = match Watchdog::try_new(p.WDT, wdt_config) {
        Ok(parts) => parts,
        Err(_) => {
            // Already running from before a soft reset; wait for it to fire.
            info!("Watchdog already active, waiting for reset");
            loop {
                cortex_m::asm::wfe();
            }
        }
    };

    let display_i2c = twim::Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_26,
        p.P0_27,
        twim::Config::default(),
    );
    let sensor_i2c = twim::Twim::new(
        p.TWISPI1,
        Irqs,
        p.P0_30,
        p.P0_31,
        twim::Config::default(),
    );

    let mut hw = Hardware {
        sensor: IrThermometer::new(sensor_i2c, SENSOR_I2C_ADDR),
        panel: Panel::init(display_i2c),
        leds: Leds::new(
            Output::new(p.P0_13, Level::High, OutputDrive::Standard),
            Output::new(p.P0_14, Level::High, OutputDrive::Standard),
            Output::new(p.P0_15, Level::High, OutputDrive::Standard),
        ),
        piezo: Piezo::new(SimplePwm::new_1ch(p.PWM0, p.P0_03)),
        dog: Dog::new(wdt_handle),
        modes: ModeRecorder,
    };

    unwrap!(spawner.spawn(tick_task()));
    unwrap!(spawner.spawn(button_task(p.P0_11.degrade(), ButtonEvent::Mode)));
    unwrap!(spawner.spawn(button_task(p.P0_12.degrade(), ButtonEvent::Unit)));
    unwrap!(spawner.spawn(storage_task(BlockingAsync::new(Nvmc::new(p.NVMC)))));

    let mut session = DeviceSession::new();
    session.start(&mut hw);

    loop {
        WAKE.wait().await;
        session.run_pass(&FLAGS, &mut hw);
    }
}
