use core::fmt;

use super::constants::{
    BME280_ADDRESS_PRIMARY, BME280_ADDRESS_SECONDARY, FLASH_GPIO_FIRST, FLASH_GPIO_LAST,
    GPIO_MAX, PLACEHOLDER_WIFI_PASSWORD, PLACEHOLDER_WIFI_SSID, WIFI_PASSWORD_MAX_LEN,
    WIFI_PASSWORD_MIN_LEN, WIFI_PSK_HEX_LEN, WIFI_SSID_MAX_LEN,
};
use super::peripheral::{Features, Peripheral};
use super::pins::{PinRole, Pins};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    MissingWifiSsid,
    WifiSsidTooLong(usize),
    InvalidWifiPassword(usize),
    InvalidGpio(PinRole, u8),
    FlashGpio(PinRole, u8),
    InvalidBme280Address(u8),
    PinConflict(PinRole, PinRole, u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingWifiSsid => write!(f, "wifi_ssid is empty"),
            Error::WifiSsidTooLong(len) => write!(
                f,
                "wifi_ssid is {} bytes, at most {} allowed",
                len, WIFI_SSID_MAX_LEN
            ),
            Error::InvalidWifiPassword(len) => write!(
                f,
                "wifi_password is {} bytes, expected empty, {}-{} characters or {} hex digits",
                len, WIFI_PASSWORD_MIN_LEN, WIFI_PASSWORD_MAX_LEN, WIFI_PSK_HEX_LEN
            ),
            Error::InvalidGpio(role, gpio) => {
                write!(f, "{} uses GPIO{}, highest is GPIO{}", role, gpio, GPIO_MAX)
            }
            Error::FlashGpio(role, gpio) => {
                write!(f, "{} uses GPIO{} which is reserved for flash", role, gpio)
            }
            Error::InvalidBme280Address(address) => write!(
                f,
                "bme280_i2c_address {:#04x} is neither {:#04x} nor {:#04x}",
                address, BME280_ADDRESS_PRIMARY, BME280_ADDRESS_SECONDARY
            ),
            Error::PinConflict(a, b, gpio) => write!(f, "{} and {} both use GPIO{}", a, b, gpio),
        }
    }
}

pub fn validate_wifi_ssid(ssid: &str) -> Result<(), Error> {
    match ssid.len() {
        0 => Err(Error::MissingWifiSsid),
        len if len > WIFI_SSID_MAX_LEN => Err(Error::WifiSsidTooLong(len)),
        _ => Ok(()),
    }
}

// Empty means an open network.
pub fn validate_wifi_password(password: &str) -> Result<(), Error> {
    let len = password.len();
    let passphrase = (WIFI_PASSWORD_MIN_LEN..=WIFI_PASSWORD_MAX_LEN).contains(&len)
        && password.bytes().all(|b| (0x20..=0x7e).contains(&b));
    let hex_psk = len == WIFI_PSK_HEX_LEN && password.bytes().all(|b| b.is_ascii_hexdigit());

    if len == 0 || passphrase || hex_psk {
        Ok(())
    } else {
        Err(Error::InvalidWifiPassword(len))
    }
}

/// True when either credential is still the value shipped in the example
/// `cfg.toml`.
pub fn is_placeholder_credentials(ssid: &str, password: &str) -> bool {
    ssid == PLACEHOLDER_WIFI_SSID || password == PLACEHOLDER_WIFI_PASSWORD
}

pub fn validate_gpio(role: PinRole, gpio: u8) -> Result<(), Error> {
    if gpio > GPIO_MAX {
        Err(Error::InvalidGpio(role, gpio))
    } else if (FLASH_GPIO_FIRST..=FLASH_GPIO_LAST).contains(&gpio) {
        Err(Error::FlashGpio(role, gpio))
    } else {
        Ok(())
    }
}

pub fn validate_bme280_address(address: u8) -> Result<(), Error> {
    if address == BME280_ADDRESS_PRIMARY || address == BME280_ADDRESS_SECONDARY {
        Ok(())
    } else {
        Err(Error::InvalidBme280Address(address))
    }
}

/// Checks every pin in use for `features`. Pins of disabled peripherals
/// are ignored.
pub fn validate_pins(pins: &Pins, features: Features) -> Result<(), Error> {
    for (i, (role, gpio)) in pins.assignments(features).enumerate() {
        validate_gpio(role, gpio)?;

        if let Some((other, _)) = pins
            .assignments(features)
            .take(i)
            .find(|(_, used)| *used == gpio)
        {
            return Err(Error::PinConflict(other, role, gpio));
        }
    }

    if features.contains(Peripheral::Bme280) {
        validate_bme280_address(pins.bme280_i2c_address)?;
    }

    Ok(())
}

/// Full check of a configuration. Credentials are only required when the
/// Wi-Fi module is enabled.
pub fn validate(
    wifi_ssid: &str,
    wifi_password: &str,
    pins: &Pins,
    features: Features,
) -> Result<(), Error> {
    if features.contains(Peripheral::Esp8266) {
        validate_wifi_ssid(wifi_ssid)?;
        validate_wifi_password(wifi_password)?;
    }

    validate_pins(pins, features)
}
