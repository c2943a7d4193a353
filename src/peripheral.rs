use core::fmt;

/// Optional hardware the firmware can be built with. Each variant maps to
/// a Cargo feature of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peripheral {
    Esp8266,
    Dht22,
    Bme280,
    Si7021,
    MhZ19,
    Ssd1306,
}

/// Interface a peripheral is wired through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Radio,
    Gpio,
    I2c,
    Uart,
}

impl Peripheral {
    pub const ALL: [Peripheral; 6] = [
        Peripheral::Esp8266,
        Peripheral::Dht22,
        Peripheral::Bme280,
        Peripheral::Si7021,
        Peripheral::MhZ19,
        Peripheral::Ssd1306,
    ];

    /// Cargo feature name
    pub const fn name(self) -> &'static str {
        match self {
            Peripheral::Esp8266 => "esp8266",
            Peripheral::Dht22 => "dht22",
            Peripheral::Bme280 => "bme280",
            Peripheral::Si7021 => "si7021",
            Peripheral::MhZ19 => "mh-z19",
            Peripheral::Ssd1306 => "ssd1306",
        }
    }

    /// Variable Cargo sets for build scripts when this feature is enabled
    pub const fn cargo_env_var(self) -> &'static str {
        match self {
            Peripheral::Esp8266 => "CARGO_FEATURE_ESP8266",
            Peripheral::Dht22 => "CARGO_FEATURE_DHT22",
            Peripheral::Bme280 => "CARGO_FEATURE_BME280",
            Peripheral::Si7021 => "CARGO_FEATURE_SI7021",
            Peripheral::MhZ19 => "CARGO_FEATURE_MH_Z19",
            Peripheral::Ssd1306 => "CARGO_FEATURE_SSD1306",
        }
    }

    pub const fn bus(self) -> Bus {
        match self {
            Peripheral::Esp8266 => Bus::Radio,
            Peripheral::Dht22 => Bus::Gpio,
            Peripheral::Bme280 | Peripheral::Si7021 | Peripheral::Ssd1306 => Bus::I2c,
            Peripheral::MhZ19 => Bus::Uart,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features(u8);

impl Features {
    pub const NONE: Features = Features(0);

    /// Peripherals enabled through this crate's Cargo features
    pub const fn current() -> Self {
        let mut features = Features::NONE;
        if cfg!(feature = "esp8266") {
            features = features.with(Peripheral::Esp8266);
        }
        if cfg!(feature = "dht22") {
            features = features.with(Peripheral::Dht22);
        }
        if cfg!(feature = "bme280") {
            features = features.with(Peripheral::Bme280);
        }
        if cfg!(feature = "si7021") {
            features = features.with(Peripheral::Si7021);
        }
        if cfg!(feature = "mh-z19") {
            features = features.with(Peripheral::MhZ19);
        }
        if cfg!(feature = "ssd1306") {
            features = features.with(Peripheral::Ssd1306);
        }
        features
    }

    pub const fn with(self, peripheral: Peripheral) -> Self {
        Features(self.0 | peripheral.bit())
    }

    pub const fn contains(self, peripheral: Peripheral) -> bool {
        self.0 & peripheral.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when any enabled peripheral sits on the I2C bus
    pub fn uses_i2c(self) -> bool {
        self.iter().any(|p| p.bus() == Bus::I2c)
    }

    /// Enabled peripherals in declaration order
    pub fn iter(self) -> impl Iterator<Item = Peripheral> {
        Peripheral::ALL
            .into_iter()
            .filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Peripheral> for Features {
    fn from_iter<I: IntoIterator<Item = Peripheral>>(iter: I) -> Self {
        iter.into_iter().fold(Features::NONE, Features::with)
    }
}
