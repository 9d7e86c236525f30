//! Error types for the solar almanac.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sunrise/sunset calculations.
///
/// A day on which the sun never crosses the horizon is not an error; it is reported
/// through [`EventResult::AllDay`](crate::EventResult::AllDay) and
/// [`EventResult::AllNight`](crate::EventResult::AllNight).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid elevation angle for a custom horizon.
    #[error("invalid elevation angle {value}° (must be between -90° and +90°)")]
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid calendar date, or a date at the edge of the representable range.
    #[error("invalid date/time: {message}")]
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g. a non-finite intermediate value).
    #[error("computation error: {message}")]
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl Error {
    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates an elevation angle is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` for out-of-range or non-finite values.
pub fn check_elevation_angle(elevation: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(elevation)
}

/// Passes a finite intermediate value through, or fails with `message`.
///
/// # Errors
/// Returns `ComputationError` if `value` is NaN or infinite.
pub fn check_finite(value: f64, message: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::computation_error(message));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_angle_validation() {
        assert!(check_elevation_angle(0.0).is_ok());
        assert!(check_elevation_angle(-0.833).is_ok());
        assert!(check_elevation_angle(90.0).is_ok());
        assert!(check_elevation_angle(-90.0).is_ok());

        assert!(check_elevation_angle(90.5).is_err());
        assert!(check_elevation_angle(-91.0).is_err());
        assert!(check_elevation_angle(f64::NAN).is_err());
        assert!(check_elevation_angle(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(1.5, "x"), Ok(1.5));
        assert_eq!(
            check_finite(f64::NAN, "hour angle is not finite"),
            Err(Error::computation_error("hour angle is not finite"))
        );
        assert!(check_finite(f64::INFINITY, "x").is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_elevation_angle(95.0);
        assert_eq!(
            err.to_string(),
            "invalid elevation angle 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );

        let err = Error::computation_error("hour angle is not finite");
        assert_eq!(err.to_string(), "computation error: hour angle is not finite");
    }
}
