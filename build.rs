use std::{env, error::Error, fs, path::Path};

#[path = "src/cfg_file.rs"]
mod cfg_file;
#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;
#[allow(dead_code)]
#[path = "src/peripheral.rs"]
mod peripheral;
#[allow(dead_code)]
#[path = "src/pins.rs"]
mod pins;
#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

use peripheral::{Features, Peripheral};

// Build scripts don't see the crate's cfg(feature), only CARGO_FEATURE_* variables
fn enabled_features() -> Features {
    Peripheral::ALL
        .into_iter()
        .filter(|p| env::var_os(p.cargo_env_var()).is_some())
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw = cfg_file::parse(&toml_str)?;
    let pins = raw.pins();

    let features = enabled_features();
    validate::validate(&raw.wifi_ssid, &raw.wifi_password, &pins, features)
        .map_err(|e| format!("invalid cfg.toml: {}", e))?;

    if features.contains(Peripheral::Esp8266)
        && validate::is_placeholder_credentials(&raw.wifi_ssid, &raw.wifi_password)
    {
        println!("cargo:warning=cfg.toml still holds the example Wi-Fi credentials");
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: {password:?},
            pins: Pins {{
                dht22: {dht22},
                mhz19_tx: {tx},
                mhz19_rx: {rx},
                i2c_sda: {sda},
                i2c_scl: {scl},
                bme280_i2c_address: {addr:#04x},
            }},
        }};
    "#,
        ssid = raw.wifi_ssid,
        password = raw.wifi_password,
        dht22 = pins.dht22,
        tx = pins.mhz19_tx,
        rx = pins.mhz19_rx,
        sda = pins.i2c_sda,
        scl = pins.i2c_scl,
        addr = pins.bme280_i2c_address,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
