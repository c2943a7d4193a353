//! Build-time configuration for the home sensor firmware.
//!
//! Peripherals are selected with Cargo features, while credentials and pin
//! assignments come from `cfg.toml` and are baked into [`CONFIG`] by the
//! build script.
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod cfg_file;
pub mod config;
pub mod constants;
pub mod peripheral;
pub mod pins;
pub mod validate;

pub use config::{Config, CONFIG};
pub use peripheral::{Bus, Features, Peripheral};
pub use pins::{PinRole, Pins};
pub use validate::Error;

/// Peripherals enabled in this build, in declaration order
pub fn enabled_peripherals() -> heapless::Vec<Peripheral, 6> {
    Features::current().iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_peripherals_follow_features() {
        let enabled = enabled_peripherals();
        assert_eq!(enabled.len(), Features::current().iter().count());
        assert_eq!(
            enabled.contains(&Peripheral::Esp8266),
            cfg!(feature = "esp8266")
        );
    }
}
