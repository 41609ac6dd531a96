use thiserror::Error;

/// Failures reported by the checked `try_*` conversions.
///
/// The unchecked conversions never fail; they return whatever the arithmetic
/// produces for these cases.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConversionError {
    #[error("coefficient table has no calibrated hot segment")]
    Uncalibrated,
    #[error("polynomial denominator vanishes at offset {offset} from the reference point")]
    DegenerateDenominator { offset: f64 },
    #[error("input {0} is not a finite number")]
    NonFiniteInput(f64),
    #[error("conversion produced non-finite result {0}")]
    NonFiniteResult(f64),
}
