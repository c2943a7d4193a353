// Parsing of `cfg.toml`. Compiled into the build script, and into the
// library only for tests since `toml` and `serde` are not runtime
// dependencies.

use serde::Deserialize;

use super::pins::Pins;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_password: String,
    #[serde(default)]
    pins: RawPins,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPins {
    dht22: u8,
    mhz19_tx: u8,
    mhz19_rx: u8,
    i2c_sda: u8,
    i2c_scl: u8,
    bme280_i2c_address: u8,
}

impl Default for RawPins {
    fn default() -> Self {
        let pins = Pins::DEFAULT;
        Self {
            dht22: pins.dht22,
            mhz19_tx: pins.mhz19_tx,
            mhz19_rx: pins.mhz19_rx,
            i2c_sda: pins.i2c_sda,
            i2c_scl: pins.i2c_scl,
            bme280_i2c_address: pins.bme280_i2c_address,
        }
    }
}

impl RawConfig {
    pub fn pins(&self) -> Pins {
        let raw = &self.pins;
        Pins {
            dht22: raw.dht22,
            mhz19_tx: raw.mhz19_tx,
            mhz19_rx: raw.mhz19_rx,
            i2c_sda: raw.i2c_sda,
            i2c_scl: raw.i2c_scl,
            bme280_i2c_address: raw.bme280_i2c_address,
        }
    }
}

pub fn parse(toml_str: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_table_is_optional() {
        let raw = parse("wifi_ssid = \"home\"\nwifi_password = \"\"\n").unwrap();
        assert_eq!(raw.wifi_ssid, "home");
        assert_eq!(raw.pins(), Pins::DEFAULT);
    }

    #[test]
    fn partial_pins_table_keeps_defaults() {
        let raw = parse(
            "wifi_ssid = \"home\"\nwifi_password = \"\"\n\n[pins]\ndht22 = 14\nbme280_i2c_address = 0x77\n",
        )
        .unwrap();
        assert_eq!(
            raw.pins(),
            Pins {
                dht22: 14,
                bme280_i2c_address: 0x77,
                ..Pins::DEFAULT
            }
        );
    }

    #[test]
    fn misspelled_table_is_rejected() {
        let err = parse("wifi_ssid = \"home\"\nwifi_password = \"\"\n\n[pin]\ndht22 = 14\n")
            .unwrap_err();
        assert!(err.to_string().contains("pin"), "{}", err);
    }

    #[test]
    fn misspelled_pin_is_rejected() {
        assert!(parse("wifi_ssid = \"home\"\nwifi_password = \"\"\n\n[pins]\ndht = 14\n").is_err());
    }

    #[test]
    fn missing_credentials_are_rejected() {
        assert!(parse("wifi_ssid = \"home\"\n").is_err());
    }

    #[test]
    fn shipped_cfg_toml_parses() {
        let raw = parse(include_str!("../cfg.toml")).unwrap();
        assert_eq!(raw.pins(), Pins::DEFAULT);
    }
}
