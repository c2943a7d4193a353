use core::fmt;

use super::peripheral::{Features, Peripheral};

/// Pin and bus address assignments. Each value only matters when the
/// peripheral it belongs to is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pins {
    // DHT22 single-wire data line
    pub dht22: u8,

    // MH-Z19 UART lines, named from the sensor's side
    pub mhz19_tx: u8,
    pub mhz19_rx: u8,

    // Shared I2C bus (BME280, Si7021, SSD1306)
    pub i2c_sda: u8,
    pub i2c_scl: u8,

    // 7-bit BME280 address
    pub bme280_i2c_address: u8,
}

impl Pins {
    pub const DEFAULT: Pins = Pins {
        dht22: 2,
        mhz19_tx: 12,
        mhz19_rx: 13,
        i2c_sda: 4,
        i2c_scl: 5,
        bme280_i2c_address: 0x76,
    };

    /// GPIOs in use for the given set of peripherals. The I2C lines are
    /// listed once even when several I2C devices share them.
    pub fn assignments(&self, features: Features) -> impl Iterator<Item = (PinRole, u8)> {
        let dht22 = features.contains(Peripheral::Dht22);
        let mhz19 = features.contains(Peripheral::MhZ19);
        let i2c = features.uses_i2c();

        [
            (PinRole::Dht22Data, self.dht22, dht22),
            (PinRole::MhZ19Tx, self.mhz19_tx, mhz19),
            (PinRole::MhZ19Rx, self.mhz19_rx, mhz19),
            (PinRole::I2cSda, self.i2c_sda, i2c),
            (PinRole::I2cScl, self.i2c_scl, i2c),
        ]
        .into_iter()
        .filter(|(_, _, used)| *used)
        .map(|(role, gpio, _)| (role, gpio))
    }
}

impl Default for Pins {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Signal carried by an assigned GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    Dht22Data,
    MhZ19Tx,
    MhZ19Rx,
    I2cSda,
    I2cScl,
}

impl PinRole {
    pub const fn name(self) -> &'static str {
        match self {
            PinRole::Dht22Data => "dht22",
            PinRole::MhZ19Tx => "mhz19_tx",
            PinRole::MhZ19Rx => "mhz19_rx",
            PinRole::I2cSda => "i2c_sda",
            PinRole::I2cScl => "i2c_scl",
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
