use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

/// Number of hot-junction segment slots in every table.
pub const HOT_SEGMENT_SLOTS: usize = 5;

// ─────────────────────────────────────────────
// ColdSegment
// ─────────────────────────────────────────────

/// Forward fit (°C → mV) used for cold-junction compensation.
///
/// `V = Vo + P(Dt) / Q(Dt)` with `Dt = T - To`, a quartic numerator without
/// constant term and a quadratic denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColdSegment {
    pub min_temp: f64,
    pub max_temp: f64,
    #[serde(rename = "To")]
    pub t0: f64,
    #[serde(rename = "Vo")]
    pub v0: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub q1: f64,
    pub q2: f64,
}

impl ColdSegment {
    /// Numerator and denominator of the fit at `temp` (°C).
    pub fn rational_terms(&self, temp: f64) -> (f64, f64) {
        let dt = temp - self.t0;
        let pj = dt * (self.p1 + dt * (self.p2 + dt * (self.p3 + dt * self.p4)));
        let qj = 1.0 + dt * (self.q1 + dt * self.q2);
        (pj, qj)
    }

    /// Thermoelectric voltage (mV) of a junction at `temp` (°C).
    pub fn voltage_at(&self, temp: f64) -> f64 {
        let (pj, qj) = self.rational_terms(temp);
        self.v0 + pj / qj
    }
}

// ─────────────────────────────────────────────
// HotSegment
// ─────────────────────────────────────────────

/// Inverse fit (mV → °C) valid over one voltage sub-range.
///
/// `T = To + P(Dv) / Q(Dv)` with `Dv = V - Vo`. The denominator is one order
/// higher than the cold-junction fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HotSegment {
    pub min_volt: f64,
    pub max_volt: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    #[serde(rename = "To")]
    pub t0: f64,
    #[serde(rename = "Vo")]
    pub v0: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl HotSegment {
    /// Placeholder for an empty slot. Equal to `HotSegment::default()`.
    pub const UNSET: HotSegment = HotSegment {
        min_volt: 0.0,
        max_volt: 0.0,
        min_temp: 0.0,
        max_temp: 0.0,
        t0: 0.0,
        v0: 0.0,
        p1: 0.0,
        p2: 0.0,
        p3: 0.0,
        p4: 0.0,
        q1: 0.0,
        q2: 0.0,
        q3: 0.0,
    };

    /// A slot is a hole in the table when its temperature range is empty.
    pub fn is_set(&self) -> bool {
        self.min_temp != self.max_temp
    }

    pub fn rational_terms(&self, voltage: f64) -> (f64, f64) {
        let dv = voltage - self.v0;
        let pj = dv * (self.p1 + dv * (self.p2 + dv * (self.p3 + dv * self.p4)));
        let qj = 1.0 + dv * (self.q1 + dv * (self.q2 + dv * self.q3));
        (pj, qj)
    }

    /// Hot-junction temperature (°C) for a compensated voltage (mV).
    pub fn temperature_at(&self, voltage: f64) -> f64 {
        let (pj, qj) = self.rational_terms(voltage);
        self.t0 + pj / qj
    }
}

// ─────────────────────────────────────────────
// CoefficientTable
// ─────────────────────────────────────────────

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TableError {
    #[error("table has no calibrated hot segment")]
    NoCalibratedSegment,
    #[error("hot segment {index} has an empty or inverted range")]
    InvertedRange { index: usize },
    #[error("hot segment {index} does not extend past the previous calibrated segment")]
    UnorderedSegments { index: usize },
    #[error("cold segment has an empty or inverted temperature range")]
    InvertedColdRange,
    #[error("table declares {0} hot segments, at most {max} are supported", max = HOT_SEGMENT_SLOTS)]
    TooManySegments(usize),
}

/// Calibration data for one thermocouple type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    cold: ColdSegment,
    hot: [HotSegment; HOT_SEGMENT_SLOTS],
}

impl CoefficientTable {
    pub const fn new(cold: ColdSegment, hot: [HotSegment; HOT_SEGMENT_SLOTS]) -> CoefficientTable {
        CoefficientTable { cold, hot }
    }

    /// Builds a table from up to five segments, padding the rest with unset slots.
    pub fn from_segments(cold: ColdSegment, segments: &[HotSegment]) -> Result<CoefficientTable, TableError> {
        if segments.len() > HOT_SEGMENT_SLOTS {
            return Err(TableError::TooManySegments(segments.len()));
        }
        let mut hot = [HotSegment::UNSET; HOT_SEGMENT_SLOTS];
        hot[..segments.len()].copy_from_slice(segments);
        Ok(CoefficientTable { cold, hot })
    }

    pub fn cold(&self) -> &ColdSegment {
        &self.cold
    }

    pub fn hot(&self) -> &[HotSegment; HOT_SEGMENT_SLOTS] {
        &self.hot
    }

    pub fn is_calibrated(&self) -> bool {
        self.hot.iter().any(HotSegment::is_set)
    }

    pub fn calibrated_segment_count(&self) -> usize {
        self.hot.iter().filter(|segment| segment.is_set()).count()
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if !(self.cold.min_temp < self.cold.max_temp) {
            return Err(TableError::InvertedColdRange);
        }
        if !self.is_calibrated() {
            return Err(TableError::NoCalibratedSegment);
        }
        let mut previous: Option<&HotSegment> = None;
        for (index, segment) in self.hot.iter().enumerate() {
            if !segment.is_set() {
                continue;
            }
            if !(segment.min_volt < segment.max_volt && segment.min_temp < segment.max_temp) {
                return Err(TableError::InvertedRange { index });
            }
            if let Some(prev) = previous {
                if !(segment.max_volt > prev.max_volt && segment.max_temp > prev.max_temp) {
                    return Err(TableError::UnorderedSegments { index });
                }
            }
            previous = Some(segment);
        }
        Ok(())
    }
}
