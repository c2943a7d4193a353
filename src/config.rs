use log::info;

use crate::peripheral::{Features, Peripheral};
use crate::pins::Pins;
use crate::validate::{self, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to associate with
    pub wifi_ssid: &'static str,

    // Wi-Fi password, empty for an open network
    pub wifi_password: &'static str,

    // Pin and bus address assignments
    pub pins: Pins,
}

impl Config {
    /// Validates against the peripherals enabled in this build.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_for(Features::current())
    }

    pub fn validate_for(&self, features: Features) -> Result<(), Error> {
        validate::validate(self.wifi_ssid, self.wifi_password, &self.pins, features)
    }

    pub fn log_summary(&self) {
        self.log_summary_for(Features::current());
    }

    pub fn log_summary_for(&self, features: Features) {
        if features.is_empty() {
            info!("No peripherals enabled");
            return;
        }

        for peripheral in features.iter() {
            info!("Peripheral enabled: {} ({:?})", peripheral, peripheral.bus());
        }

        if features.contains(Peripheral::Esp8266) {
            info!("Wi-Fi SSID: {}", self.wifi_ssid);
        }

        if features.contains(Peripheral::Bme280) {
            info!("BME280 address: {:#04x}", self.pins.bme280_i2c_address);
        }

        for (role, gpio) in self.pins.assignments(features) {
            info!("Pin {}: GPIO{}", role, gpio);
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
