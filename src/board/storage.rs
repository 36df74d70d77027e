//! Persistent storage for the selected display mode.
//!
//! Uses the nRF52840's internal flash via `sequential-storage` crate.
//! The session hands the mode over through a signal; the storage task
//! writes it in the background so the main loop never waits on flash.
//!
//! Storage layout:
//!   - One map item under `KEY_DISPLAY_MODE` holding `DisplayMode::as_u8`.
//!   - Flash pages are managed by `sequential-storage`, which handles wear
//!     levelling and GC.

use defmt::{debug, error, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use wristtemp::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use wristtemp::hal::ModeStore;
use wristtemp::{DisplayMode, Error};

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the display mode in the map storage.
const KEY_DISPLAY_MODE: u8 = 0x01;

/// Scratch buffer for `sequential-storage` item (de)serialisation.
const SCRATCH_SIZE: usize = 32;

/// Latest mode waiting to be written. A newer mode overwrites an older one.
static PENDING_MODE: Signal<CriticalSectionRawMutex, DisplayMode> = Signal::new();

/// [`ModeStore`] handed to the session.
pub struct ModeRecorder;

impl ModeStore for ModeRecorder {
    fn persist(&mut self, mode: DisplayMode) {
        debug!("ModeRecorder: queue {}", mode);
        PENDING_MODE.signal(mode);
    }
}

/// Write one mode record to flash.
async fn store_mode(
    flash: &mut impl embedded_storage_async::nor_flash::NorFlash,
    mode: DisplayMode,
) -> Result<(), Error> {
    let mut buf = [0u8; SCRATCH_SIZE];

    sequential_storage::map::store_item::<u8, u8, _>(
        flash,
        STORAGE_START..STORAGE_END,
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &KEY_DISPLAY_MODE,
        &mode.as_u8(),
    )
    .await
    .map_err(|e| {
        error!("Flash write error: {:?}", defmt::Debug2Format(&e));
        Error::Storage
    })
}

/// Drain queued modes into flash forever.
pub async fn storage_loop(mut flash: impl embedded_storage_async::nor_flash::NorFlash) -> ! {
    loop {
        let mode = PENDING_MODE.wait().await;
        if store_mode(&mut flash, mode).await.is_ok() {
            info!("Saved mode {} to flash", mode);
        }
    }
}
