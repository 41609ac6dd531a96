use serde::{
    Deserialize,
    Serialize
};

/// Offset between the Celsius and Kelvin scales.
pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(f64);

impl Celsius {
    pub const fn new(temp: f64) -> Celsius {
        Celsius(temp)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + ZERO_CELSIUS_IN_KELVIN)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(f64);

impl Kelvin {
    pub const fn new(temp: f64) -> Kelvin {
        Kelvin(temp)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn to_celsius(self) -> Celsius {
        Celsius(self.0 - ZERO_CELSIUS_IN_KELVIN)
    }
}

/// Scale in which a [`Thermocouple`](crate::thermocouple::thermocouple::Thermocouple)
/// accepts and reports temperatures. Calibration data is always in Celsius.
pub trait TemperatureUnit {
    /// Cold-junction temperature assumed when the caller has no measurement.
    const DEFAULT_COLD_JUNCTION: f64;

    /// Reads a plain value expressed in this unit.
    fn celsius_from_unit(temp: f64) -> Celsius;

    /// Expresses a Celsius temperature as a plain value in this unit.
    fn unit_from_celsius(temp: Celsius) -> f64;
}

impl TemperatureUnit for Celsius {
    const DEFAULT_COLD_JUNCTION: f64 = 20.0;

    fn celsius_from_unit(temp: f64) -> Celsius {
        Celsius::new(temp)
    }

    fn unit_from_celsius(temp: Celsius) -> f64 {
        temp.value()
    }
}

impl TemperatureUnit for Kelvin {
    const DEFAULT_COLD_JUNCTION: f64 = 20.0 + ZERO_CELSIUS_IN_KELVIN;

    fn celsius_from_unit(temp: f64) -> Celsius {
        Kelvin::new(temp).to_celsius()
    }

    fn unit_from_celsius(temp: Celsius) -> f64 {
        temp.to_kelvin().value()
    }
}
