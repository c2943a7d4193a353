/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest GPIO number exposed by the ESP8266
pub const GPIO_MAX: u8 = 16;
/// First GPIO wired to the SPI flash
pub const FLASH_GPIO_FIRST: u8 = 6;
/// Last GPIO wired to the SPI flash
pub const FLASH_GPIO_LAST: u8 = 11;

/// Maximum SSID length in bytes (802.11)
pub const WIFI_SSID_MAX_LEN: usize = 32;
/// Minimum WPA2 passphrase length
pub const WIFI_PASSWORD_MIN_LEN: usize = 8;
/// Maximum WPA2 passphrase length
pub const WIFI_PASSWORD_MAX_LEN: usize = 63;
/// Length of a raw hex-encoded PSK
pub const WIFI_PSK_HEX_LEN: usize = 64;

/// BME280 address with SDO tied to GND
pub const BME280_ADDRESS_PRIMARY: u8 = 0x76;
/// BME280 address with SDO tied to VDDIO
pub const BME280_ADDRESS_SECONDARY: u8 = 0x77;

/// SSID shipped in the example `cfg.toml`
pub const PLACEHOLDER_WIFI_SSID: &str = "wifi_ssid";
/// Password shipped in the example `cfg.toml`
pub const PLACEHOLDER_WIFI_PASSWORD: &str = "wifi_key";
