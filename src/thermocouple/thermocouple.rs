use std::marker::PhantomData;

use tracing::{
    debug,
    warn
};

use crate::temperature::unit::{
    Celsius,
    TemperatureUnit
};

use super::coefficient::{
    CoefficientTable,
    HotSegment
};
use super::conversionerror::ConversionError;

/// Voltage ↔ temperature conversion over one coefficient table.
///
/// Voltages are in millivolts. Temperatures are read and reported in `U`;
/// the table itself is always in Celsius.
///
/// The plain methods never fail: out-of-range inputs extrapolate with the
/// highest calibrated segment, an uncalibrated table yields the all-zero
/// segment, and a vanishing denominator propagates as infinity or NaN. The
/// `try_*` methods report those cases as [`ConversionError`].
#[derive(Debug, Clone, Copy)]
pub struct Thermocouple<'a, U = Celsius> {
    table: &'a CoefficientTable,
    unit: PhantomData<fn() -> U>,
}

impl<'a, U> Thermocouple<'a, U>
where
    U: TemperatureUnit {
    pub const fn new(table: &'a CoefficientTable) -> Thermocouple<'a, U> {
        Thermocouple { table, unit: PhantomData }
    }

    pub fn table(&self) -> &'a CoefficientTable {
        self.table
    }

    pub fn within_max_temp(temp: f64, segment: &HotSegment) -> bool {
        temp <= segment.max_temp
    }

    pub fn within_max_volt(voltage: f64, segment: &HotSegment) -> bool {
        voltage <= segment.max_volt
    }

    // ─────────────────────────────────────────────
    // Segment selection
    // ─────────────────────────────────────────────

    /// Slot index of the first calibrated segment accepted by `contains`,
    /// else of the last calibrated segment. `None` only for an uncalibrated
    /// table.
    pub fn segment_index_where<F>(&self, value: f64, contains: F) -> Option<usize>
    where
        F: Fn(f64, &HotSegment) -> bool {
        let mut last_valid = None;
        for (index, segment) in self.table.hot().iter().enumerate() {
            if !segment.is_set() {
                continue;
            }
            if contains(value, segment) {
                return Some(index);
            }
            last_valid = Some(index);
        }
        if let Some(index) = last_valid {
            debug!(value = value, index = index, "value beyond calibrated range, extrapolating");
        }
        last_valid
    }

    /// Returns `HotSegment::default()` when the table has no calibrated segment.
    pub fn search_segment_where<F>(&self, value: f64, contains: F) -> HotSegment
    where
        F: Fn(f64, &HotSegment) -> bool {
        self.segment_index_where(value, contains)
            .map_or(HotSegment::default(), |index| self.table.hot()[index])
    }

    #[doc(alias = "coefficients_from_temp")]
    pub fn segment_from_temp(&self, temp: f64) -> HotSegment {
        let celsius = U::celsius_from_unit(temp);
        self.search_segment_where(celsius.value(), Self::within_max_temp)
    }

    #[doc(alias = "coefficients_from_volt")]
    pub fn segment_from_volt(&self, voltage: f64) -> HotSegment {
        self.search_segment_where(voltage, Self::within_max_volt)
    }

    // ─────────────────────────────────────────────
    // Polynomial evaluation
    // ─────────────────────────────────────────────

    /// Equivalent voltage of the cold junction at `temp`.
    pub fn cold_temp_to_volt(&self, temp: f64) -> f64 {
        let celsius = U::celsius_from_unit(temp);
        self.table.cold().voltage_at(celsius.value())
    }

    /// Hot-junction temperature for an already compensated voltage.
    pub fn hot_volt_to_temp(&self, voltage: f64) -> f64 {
        let segment = self.segment_from_volt(voltage);
        U::unit_from_celsius(Celsius::new(segment.temperature_at(voltage)))
    }

    /// Cold-junction compensated temperature for a measured voltage.
    pub fn temperature(&self, voltage: f64, cold_junction_temp: f64) -> f64 {
        let cold_junction_volt = self.cold_temp_to_volt(cold_junction_temp);
        self.hot_volt_to_temp(voltage + cold_junction_volt)
    }

    /// [`temperature`](Self::temperature) with the cold junction assumed at
    /// `U::DEFAULT_COLD_JUNCTION` (20 °C).
    pub fn temperature_at_default_cold_junction(&self, voltage: f64) -> f64 {
        self.temperature(voltage, U::DEFAULT_COLD_JUNCTION)
    }

    // ─────────────────────────────────────────────
    // Checked variants
    // ─────────────────────────────────────────────

    pub fn try_segment_from_temp(&self, temp: f64) -> Result<&'a HotSegment, ConversionError> {
        let celsius = U::celsius_from_unit(finite_input(temp)?);
        self.try_segment_where(celsius.value(), Self::within_max_temp)
    }

    pub fn try_segment_from_volt(&self, voltage: f64) -> Result<&'a HotSegment, ConversionError> {
        self.try_segment_where(finite_input(voltage)?, Self::within_max_volt)
    }

    pub fn try_cold_temp_to_volt(&self, temp: f64) -> Result<f64, ConversionError> {
        let celsius = U::celsius_from_unit(finite_input(temp)?).value();
        let cold = self.table.cold();
        let (pj, qj) = cold.rational_terms(celsius);
        check_denominator(qj, celsius - cold.t0)?;
        finite_result(cold.v0 + pj / qj)
    }

    pub fn try_hot_volt_to_temp(&self, voltage: f64) -> Result<f64, ConversionError> {
        let segment = self.try_segment_from_volt(voltage)?;
        let (pj, qj) = segment.rational_terms(voltage);
        check_denominator(qj, voltage - segment.v0)?;
        finite_result(U::unit_from_celsius(Celsius::new(segment.t0 + pj / qj)))
    }

    pub fn try_temperature(&self, voltage: f64, cold_junction_temp: f64) -> Result<f64, ConversionError> {
        let voltage = finite_input(voltage)?;
        let cold_junction_volt = self.try_cold_temp_to_volt(cold_junction_temp)?;
        self.try_hot_volt_to_temp(voltage + cold_junction_volt)
    }

    fn try_segment_where<F>(&self, value: f64, contains: F) -> Result<&'a HotSegment, ConversionError>
    where
        F: Fn(f64, &HotSegment) -> bool {
        match self.segment_index_where(value, contains) {
            Some(index) => Ok(&self.table.hot()[index]),
            None => {
                warn!(value = value, "conversion requested on uncalibrated table");
                Err(ConversionError::Uncalibrated)
            }
        }
    }
}

fn finite_input(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::NonFiniteInput(value))
    }
}

fn finite_result(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::NonFiniteResult(value))
    }
}

fn check_denominator(qj: f64, offset: f64) -> Result<(), ConversionError> {
    if qj == 0.0 {
        warn!(offset = offset, "rational polynomial denominator vanishes");
        Err(ConversionError::DegenerateDenominator { offset })
    } else {
        Ok(())
    }
}
