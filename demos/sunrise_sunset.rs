//! Sunrise/sunset and twilight times across diverse global locations.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use solar_almanac::{almanac, EventResult, Horizon};

#[derive(Debug)]
struct City {
    name: &'static str,
    zone: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            zone: "Arctic/Longyearbyen",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Anchorage, Alaska",
            zone: "America/Anchorage",
            latitude: 61.216667,
            longitude: -149.866667,
        },
        City {
            name: "Auckland, New Zealand",
            zone: "Pacific/Auckland",
            latitude: -36.840556,
            longitude: 174.74,
        },
        City {
            name: "Bangkok, Thailand",
            zone: "Asia/Bangkok",
            latitude: 13.7563,
            longitude: 100.5018,
        },
        City {
            name: "Brasília, Brazil",
            zone: "America/Sao_Paulo",
            latitude: -15.8,
            longitude: -47.85,
        },
    ];

    for city in &cities {
        let tz: Tz = city.zone.parse()?;
        // Winter solstice, in the morning local time
        let now = tz.with_ymd_and_hms(2023, 12, 21, 3, 0, 0).single().ok_or("ambiguous time")?;

        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E ({})",
            city.latitude, city.longitude, city.zone
        );
        println!("Now: {}", now.format("%Y-%m-%d %H:%M %Z"));
        println!();

        let horizons = [
            ("Sunrise/Sunset", Horizon::SunriseSunset),
            ("Civil Twilight", Horizon::CivilTwilight),
            ("Nautical Twilight", Horizon::NauticalTwilight),
            ("Astronomical Twilight", Horizon::AstronomicalTwilight),
        ];

        for (label, horizon) in horizons {
            println!("{label}:");
            print_event("Begin", &almanac::dawn(now, city.latitude, city.longitude, horizon)?);
            print_event("End", &almanac::dusk(now, city.latitude, city.longitude, horizon)?);
        }

        print_event(
            "Next sunrise",
            &almanac::next_sunrise(now, city.latitude, city.longitude)?,
        );
        println!();
    }

    Ok(())
}

fn print_event(label: &str, result: &EventResult<DateTime<Tz>>) {
    match result {
        EventResult::Occurs(time) => println!("  {label}: {}", time.format("%Y-%m-%d %H:%M:%S %Z")),
        EventResult::AllDay => println!("  {label}: sun above horizon all day"),
        EventResult::AllNight => println!("  {label}: sun below horizon all day"),
    }
}
