//! SMBus IR thermometer (MLX90614-compatible RAM map).
//!
//! Each register read returns LSB, MSB and a PEC byte. Temperatures are
//! 0.02 K per LSB; bit 15 flags an invalid conversion.

use wristtemp::hal::TemperatureSensor;
use wristtemp::{Error, Result, TemperatureSample};

const REG_AMBIENT: u8 = 0x06;
const REG_OBJECT: u8 = 0x07;

const KELVIN_PER_LSB: f32 = 0.02;
const KELVIN_OFFSET: f32 = 273.15;
const ERROR_FLAG: u16 = 0x8000;

pub struct IrThermometer<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> IrThermometer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    fn read_celsius(&mut self, register: u8) -> Result<f32> {
        let mut buf = [0u8; 3];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|_| Error::Sensor)?;

        let raw = u16::from_le_bytes([buf[0], buf[1]]);
        if raw & ERROR_FLAG != 0 {
            return Err(Error::InvalidSample);
        }
        Ok(f32::from(raw) * KELVIN_PER_LSB - KELVIN_OFFSET)
    }
}

impl<I2C> TemperatureSensor for IrThermometer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn read(&mut self) -> Result<TemperatureSample> {
        let ambient_c = self.read_celsius(REG_AMBIENT)?;
        let object_c = self.read_celsius(REG_OBJECT)?;
        Ok(TemperatureSample::new(ambient_c, object_c))
    }
}
