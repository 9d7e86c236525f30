//! Core data types for sunrise/sunset calculations.

use crate::error::check_elevation_angle;
use crate::math::floor;
use crate::Result;

/// Predefined elevation angles for sunrise/sunset and twilight calculations.
///
/// The event happens when the sun's center crosses this elevation. The zenith angle used by
/// the almanac algorithm is `90° - elevation`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Official sunrise/sunset (zenith 90°50', accounting for refraction and the sun's radius)
    #[default]
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the solar zenith angle in degrees for this horizon definition.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation_angle()
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_almanac::Horizon;
    /// let golden_hour = Horizon::custom(6.0).unwrap();
    /// assert_eq!(golden_hour.zenith_angle(), 84.0);
    /// assert!(Horizon::custom(-95.0).is_err());
    /// ```
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees).map(Self::Custom)
    }
}

/// Direction in which the sun crosses the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// Morning crossing (sunrise, dawn).
    Rising,
    /// Evening crossing (sunset, dusk).
    Setting,
}

impl Crossing {
    /// Approximate local solar hour of the event, used to seed the calculation.
    #[must_use]
    pub const fn approximate_hour(self) -> f64 {
        match self {
            Self::Rising => 6.0,
            Self::Setting => 18.0,
        }
    }
}

/// Hours since midnight UTC (0 UT) on the calculation date.
///
/// Used for event times without the chrono dependency. Values produced by the almanac are
/// always normalized to `0.0..24.0`.
///
/// # Example
/// ```
/// # use solar_almanac::HoursUtc;
/// let time = HoursUtc::from_hours(22.858);
/// assert_eq!(time.to_hms(), (22, 51, 28));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whole seconds since midnight UTC; the sub-second fraction is truncated.
    #[must_use]
    pub fn whole_seconds(&self) -> i64 {
        floor(self.0 * 3600.0) as i64
    }

    /// Splits into whole hours, minutes and seconds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn to_hms(&self) -> (u32, u32, u32) {
        let seconds = self.whole_seconds().max(0) as u32;
        (seconds / 3600, seconds / 60 % 60, seconds % 60)
    }
}

/// Result of a single sunrise or sunset calculation.
///
/// At high latitudes the sun may stay above or below the horizon for the whole day; those
/// days carry no event time at all rather than a fabricated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult<T> {
    /// The sun crosses the horizon at the given time.
    Occurs(T),
    /// Polar day - the sun stays above the horizon all day.
    AllDay,
    /// Polar night - the sun stays below the horizon all day.
    AllNight,
}

impl<T> EventResult<T> {
    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Converts into the event time, discarding the kind of polar day.
    pub fn into_time(self) -> Option<T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if the event occurs on this day.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Maps the event time, keeping polar results as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventResult<U> {
        match self {
            Self::Occurs(time) => EventResult::Occurs(f(time)),
            Self::AllDay => EventResult::AllDay,
            Self::AllNight => EventResult::AllNight,
        }
    }

    /// Maps the event time with a fallible conversion.
    ///
    /// # Errors
    /// Propagates the error returned by `f`.
    pub fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<EventResult<U>> {
        Ok(match self {
            Self::Occurs(time) => EventResult::Occurs(f(time)?),
            Self::AllDay => EventResult::AllDay,
            Self::AllNight => EventResult::AllNight,
        })
    }
}
