//! Almanac sunrise/sunset algorithm.
//!
//! Low-precision solar event times from the "Almanac for Computers" (Nautical Almanac Office,
//! United States Naval Observatory, 1990). Accuracy is typically within a minute or two for
//! latitudes between the polar circles.
//!
//! All functions are pure: results depend only on the local calendar date, the time zone, the
//! coordinates and the horizon. Latitude and longitude are not range-checked; values outside
//! ±90°/±180° run through the formulas unchanged.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::error::check_finite;
use crate::math::{
    acos_deg, asin_deg, atan_deg, clamp_unit, cos_deg, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, sin_deg, tan_deg,
};
use crate::time::day_of_year;
use crate::{Crossing, EventResult, Horizon, HoursUtc, Result};

#[cfg(feature = "chrono")]
use crate::Error;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone};

/// Degrees of longitude per hour of time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculate the UTC time of a sunrise or sunset-like event.
///
/// Works without chrono; the result is hours after 0h UT on the given date, in `0.0..24.0`.
///
/// # Arguments
/// * `year` - Year (proleptic Gregorian)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (north positive)
/// * `longitude` - Observer longitude in degrees (east positive)
/// * `crossing` - Rising (morning) or setting (evening) event
/// * `horizon` - Solar elevation that defines the event
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid calendar date and `ComputationError` if the
/// calculation produces a non-finite value (e.g. for a NaN latitude).
///
/// # Example
/// ```
/// use solar_almanac::{almanac, Crossing, EventResult, Horizon};
///
/// let result = almanac::event_utc(2014, 6, 12, 14.0, 100.0, Crossing::Rising, Horizon::SunriseSunset)
///     .unwrap();
///
/// if let EventResult::Occurs(sunrise) = result {
///     // 22:51 UT, i.e. 05:51 the next morning in Bangkok (UTC+7)
///     assert_eq!(sunrise.to_hms().0, 22);
/// }
/// ```
pub fn event_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    crossing: Crossing,
    horizon: Horizon,
) -> Result<EventResult<HoursUtc>> {
    let day_of_year = day_of_year(year, month, day)?;
    calculate_event_hours(day_of_year, latitude, longitude, crossing, horizon)
}

/// Calculate the UTC time of the official sunrise.
///
/// # Errors
/// See [`event_utc`].
pub fn sunrise_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<HoursUtc>> {
    event_utc(
        year,
        month,
        day,
        latitude,
        longitude,
        Crossing::Rising,
        Horizon::SunriseSunset,
    )
}

/// Calculate the UTC time of the official sunset.
///
/// # Errors
/// See [`event_utc`].
pub fn sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<HoursUtc>> {
    event_utc(
        year,
        month,
        day,
        latitude,
        longitude,
        Crossing::Setting,
        Horizon::SunriseSunset,
    )
}

/// Core almanac calculation for a day of the year.
fn calculate_event_hours(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    crossing: Crossing,
    horizon: Horizon,
) -> Result<EventResult<HoursUtc>> {
    let lng_hour = longitude / DEGREES_PER_HOUR;

    // Approximate time of the event, in days
    let t = f64::from(day_of_year) + (crossing.approximate_hour() - lng_hour) / 24.0;

    // Sun's mean anomaly and true longitude
    let m = 0.9856 * t - 3.289;
    let l = normalize_degrees_0_to_360(
        m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634,
    );

    // Right ascension, moved into the same quadrant as L
    let mut ra = normalize_degrees_0_to_360(atan_deg(0.91764 * tan_deg(l)));
    ra += floor(l / 90.0) * 90.0 - floor(ra / 90.0) * 90.0;
    let ra_hours = ra / DEGREES_PER_HOUR;

    // Declination
    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(clamp_unit(sin_dec)));

    // Local hour angle
    let cos_h = check_finite(
        (cos_deg(horizon.zenith_angle()) - sin_dec * sin_deg(latitude))
            / (cos_dec * cos_deg(latitude)),
        "hour angle is not finite",
    )?;
    if cos_h > 1.0 {
        log::debug!("sun stays below {horizon:?} on day {day_of_year} at latitude {latitude}");
        return Ok(EventResult::AllNight);
    }
    if cos_h < -1.0 {
        log::debug!("sun stays above {horizon:?} on day {day_of_year} at latitude {latitude}");
        return Ok(EventResult::AllDay);
    }

    let h_degrees = match crossing {
        Crossing::Rising => 360.0 - acos_deg(clamp_unit(cos_h)),
        Crossing::Setting => acos_deg(clamp_unit(cos_h)),
    };
    let h = h_degrees / DEGREES_PER_HOUR;

    let local_mean_time = h + ra_hours - 0.06571 * t - 6.622;
    let ut = normalize_hours_0_to_24(local_mean_time - lng_hour);
    log::trace!("{crossing:?} on day {day_of_year} at {ut:.5} h UT ({latitude}, {longitude})");

    Ok(EventResult::Occurs(HoursUtc::from_hours(ut)))
}

/// Calculate a rising or setting event on the local calendar day of `datetime`.
///
/// The time of day of `datetime` is ignored. The result is expressed in the same time zone and
/// lies on the same local calendar date, with whole-second precision.
///
/// # Arguments
/// * `datetime` - Any instant on the wanted day, in the wanted time zone
/// * `latitude` - Observer latitude in degrees (north positive)
/// * `longitude` - Observer longitude in degrees (east positive)
/// * `crossing` - Rising (morning) or setting (evening) event
/// * `horizon` - Solar elevation that defines the event
///
/// # Returns
/// `EventResult::Occurs` with the event time, or `AllDay`/`AllNight` when the sun does not
/// cross the horizon on that day.
///
/// # Errors
/// Returns `ComputationError` for non-finite intermediate values and `InvalidDateTime` when the
/// event falls outside chrono's representable range.
///
/// # Example
/// ```rust
/// use solar_almanac::{almanac, Crossing, Horizon};
/// use chrono::{DateTime, FixedOffset};
///
/// let now = "2014-06-12T14:00:00+07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let dusk = almanac::event_for_day(now, 14.0, 100.0, Crossing::Setting, Horizon::CivilTwilight)
///     .unwrap();
/// println!("Civil dusk: {:?}", dusk.time());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn event_for_day<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    crossing: Crossing,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    let tz = datetime.timezone();
    event_on_local_date(
        datetime.date_naive(),
        &tz,
        latitude,
        longitude,
        crossing,
        horizon,
    )
}

/// Calculate the next rising or setting event strictly after `datetime`.
///
/// Today's event is returned if it is still ahead; once it has passed (or is exactly now),
/// the event of the following local calendar day is returned instead. Days on which the sun
/// does not cross the horizon are returned as `AllDay`/`AllNight` without searching further.
///
/// # Errors
/// Same as [`event_for_day`]; additionally `InvalidDateTime` if there is no following day.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn next_event<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    crossing: Crossing,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    let tz = datetime.timezone();
    let today = datetime.date_naive();

    match event_on_local_date(today, &tz, latitude, longitude, crossing, horizon)? {
        EventResult::Occurs(event) if event <= datetime => {
            let tomorrow = today
                .succ_opt()
                .ok_or(Error::invalid_datetime("no calendar day after the given date"))?;
            log::debug!("{crossing:?} on {today} has passed, rolling over to {tomorrow}");
            event_on_local_date(tomorrow, &tz, latitude, longitude, crossing, horizon)
        }
        result => Ok(result),
    }
}

/// Calculate sunrise on the local calendar day of `datetime`.
///
/// # Errors
/// See [`event_for_day`].
///
/// # Example
/// ```rust
/// use solar_almanac::{almanac, EventResult};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2014-06-12T02:57:12+07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// match almanac::sunrise(date, 14.0, 100.0).unwrap() {
///     EventResult::Occurs(sunrise) => assert_eq!((sunrise.hour(), sunrise.minute()), (5, 51)),
///     _ => unreachable!("the sun rises every day in the tropics"),
/// }
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<DateTime<Tz>>> {
    event_for_day(
        datetime,
        latitude,
        longitude,
        Crossing::Rising,
        Horizon::SunriseSunset,
    )
}

/// Calculate sunset on the local calendar day of `datetime`.
///
/// # Errors
/// See [`event_for_day`].
#[cfg(feature = "chrono")]
pub fn sunset<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<DateTime<Tz>>> {
    event_for_day(
        datetime,
        latitude,
        longitude,
        Crossing::Setting,
        Horizon::SunriseSunset,
    )
}

/// Calculate the next sunrise strictly after `datetime`.
///
/// # Errors
/// See [`next_event`].
#[cfg(feature = "chrono")]
pub fn next_sunrise<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<DateTime<Tz>>> {
    next_event(
        datetime,
        latitude,
        longitude,
        Crossing::Rising,
        Horizon::SunriseSunset,
    )
}

/// Calculate the next sunset strictly after `datetime`.
///
/// # Errors
/// See [`next_event`].
#[cfg(feature = "chrono")]
pub fn next_sunset<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<EventResult<DateTime<Tz>>> {
    next_event(
        datetime,
        latitude,
        longitude,
        Crossing::Setting,
        Horizon::SunriseSunset,
    )
}

/// Calculate dawn (the morning crossing of a twilight horizon) on the day of `datetime`.
///
/// # Errors
/// See [`event_for_day`].
#[cfg(feature = "chrono")]
pub fn dawn<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    event_for_day(datetime, latitude, longitude, Crossing::Rising, horizon)
}

/// Calculate dusk (the evening crossing of a twilight horizon) on the day of `datetime`.
///
/// # Errors
/// See [`event_for_day`].
#[cfg(feature = "chrono")]
pub fn dusk<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    event_for_day(datetime, latitude, longitude, Crossing::Setting, horizon)
}

/// Calculate the next dawn strictly after `datetime`.
///
/// # Errors
/// See [`next_event`].
#[cfg(feature = "chrono")]
pub fn next_dawn<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    next_event(datetime, latitude, longitude, Crossing::Rising, horizon)
}

/// Calculate the next dusk strictly after `datetime`.
///
/// # Errors
/// See [`next_event`].
#[cfg(feature = "chrono")]
pub fn next_dusk<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    next_event(datetime, latitude, longitude, Crossing::Setting, horizon)
}

#[cfg(feature = "chrono")]
fn event_on_local_date<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
    latitude: f64,
    longitude: f64,
    crossing: Crossing,
    horizon: Horizon,
) -> Result<EventResult<DateTime<Tz>>> {
    calculate_event_hours(date.ordinal(), latitude, longitude, crossing, horizon)?
        .try_map(|hours| place_on_local_date(date, tz, hours))
}

/// Places a UT time of day on `date` and converts it into `tz`.
///
/// The UT hours are anchored to the UTC day of `date`; in zones far from UTC that lands on the
/// neighbouring local day, so the instant is moved by one day to the requested local date.
/// When a DST jump leaves no such instant, the unshifted instant is kept.
#[cfg(feature = "chrono")]
fn place_on_local_date<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
    hours: HoursUtc,
) -> Result<DateTime<Tz>> {
    let event = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::seconds(hours.whole_seconds()))
        .ok_or(Error::invalid_datetime("event time is out of range"))?
        .with_timezone(tz);

    let on_date = [0, -1, 1]
        .into_iter()
        .filter_map(|days| event.clone().checked_add_signed(TimeDelta::days(days)))
        .find(|candidate| candidate.date_naive() == date);

    Ok(on_date.unwrap_or(event))
}
