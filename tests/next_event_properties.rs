#![cfg(feature = "chrono")]

//! Property tests for the day and next-occurrence queries.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use proptest::prelude::*;
use solar_almanac::{almanac, Crossing, EventResult, Horizon};

/// Instants between 1970 and 2100.
fn any_utc_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (0_i64..4_102_444_800).prop_map(|seconds| DateTime::from_timestamp(seconds, 0).unwrap())
}

/// Any whole-quarter-hour offset in use today (UTC-12 to UTC+14).
fn any_offset() -> impl Strategy<Value = FixedOffset> {
    (-48_i32..=56).prop_map(|quarters| FixedOffset::east_opt(quarters * 900).unwrap())
}

/// The offset that keeps local clock time close to local solar time.
fn solar_offset(longitude: f64) -> FixedOffset {
    let hours = (longitude / 15.0).round() as i32;
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn any_crossing() -> impl Strategy<Value = Crossing> {
    prop_oneof![Just(Crossing::Rising), Just(Crossing::Setting)]
}

proptest! {
    #[test]
    fn next_event_is_strictly_after_now(
        datetime in any_utc_datetime(),
        offset in any_offset(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
        crossing in any_crossing(),
    ) {
        let now = datetime.with_timezone(&offset);
        let result =
            almanac::next_event(now, latitude, longitude, crossing, Horizon::SunriseSunset).unwrap();

        if let EventResult::Occurs(event) = result {
            prop_assert!(event > now, "{event} is not after {now}");
            prop_assert!(event - now <= TimeDelta::days(2), "{event} is too far from {now}");
            prop_assert_eq!(event.offset(), now.offset());
        }
    }

    #[test]
    fn next_event_is_todays_or_tomorrows_event(
        datetime in any_utc_datetime(),
        offset in any_offset(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
        crossing in any_crossing(),
    ) {
        let now = datetime.with_timezone(&offset);
        let horizon = Horizon::SunriseSunset;

        let today = almanac::event_for_day(now, latitude, longitude, crossing, horizon).unwrap();
        let next = almanac::next_event(now, latitude, longitude, crossing, horizon).unwrap();

        match today {
            EventResult::Occurs(event) if event > now => prop_assert_eq!(next, today),
            EventResult::Occurs(_) => {
                let tomorrow = now + TimeDelta::days(1);
                let expected =
                    almanac::event_for_day(tomorrow, latitude, longitude, crossing, horizon).unwrap();
                prop_assert_eq!(next, expected);
            }
            polar => prop_assert_eq!(next, polar),
        }
    }

    #[test]
    fn events_lie_on_the_requested_local_date(
        datetime in any_utc_datetime(),
        offset in any_offset(),
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
        crossing in any_crossing(),
    ) {
        let now = datetime.with_timezone(&offset);
        let result =
            almanac::event_for_day(now, latitude, longitude, crossing, Horizon::SunriseSunset).unwrap();

        if let EventResult::Occurs(event) = result {
            prop_assert_eq!(event.date_naive(), now.date_naive());
        }
    }

    #[test]
    fn sunrise_precedes_sunset_in_solar_time_zones(
        datetime in any_utc_datetime(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let now = datetime.with_timezone(&solar_offset(longitude));

        let sunrise = almanac::sunrise(now, latitude, longitude).unwrap();
        let sunset = almanac::sunset(now, latitude, longitude).unwrap();

        if let (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) = (sunrise, sunset) {
            prop_assert!(sunrise < sunset, "{sunrise} vs {sunset}");
        }
    }

    #[test]
    fn repeated_calls_are_identical(
        datetime in any_utc_datetime(),
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
        crossing in any_crossing(),
    ) {
        let first = almanac::event_for_day(datetime, latitude, longitude, crossing, Horizon::CivilTwilight);
        let second = almanac::event_for_day(datetime, latitude, longitude, crossing, Horizon::CivilTwilight);
        prop_assert_eq!(first, second);
    }
}
