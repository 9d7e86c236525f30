//! # Solar Almanac
//!
//! Sunrise, sunset and twilight times from the low-precision almanac solar algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation follows the "Almanac for Computers" sunrise/sunset algorithm: a handful of
//! trigonometric evaluations per event, typically accurate to a minute or two between the polar
//! circles. It is meant for scheduling (lights, blinds, timers), not for ephemeris work.
//!
//! ## Features
//!
//! - Day queries: the sunrise or sunset on the local calendar day of any `DateTime<Tz>`
//! - Next-occurrence queries that roll over to tomorrow once today's event has passed
//! - Civil, nautical and astronomical twilight, or any custom solar elevation
//! - Explicit polar day / polar night results instead of fabricated times
//! - Stateless and thread-safe; `std` or `no_std`, with or without `chrono`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the `DateTime<Tz>` based API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-almanac = "0.1"
//!
//! # no_std + chrono
//! solar-almanac = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (numeric API only)
//! solar-almanac = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_almanac::{almanac, EventResult};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Bangkok, early morning
//! let now = "2014-06-12T02:57:12+07:00".parse::<DateTime<FixedOffset>>().unwrap();
//!
//! match almanac::next_sunrise(now, 14.0, 100.0).unwrap() {
//!     EventResult::Occurs(sunrise) => println!("Next sunrise: {sunrise}"),
//!     EventResult::AllDay => println!("Midnight sun"),
//!     EventResult::AllNight => println!("Polar night"),
//! }
//!
//! let sunset = almanac::sunset(now, 14.0, 100.0).unwrap();
//! println!("Sunset today: {:?}", sunset.time());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_almanac::{almanac, EventResult};
//!
//! // Vienna, 21 June 2023, in hours after 0h UT
//! if let EventResult::Occurs(sunrise) = almanac::sunrise_utc(2023, 6, 21, 48.21, 16.37).unwrap() {
//!     let (h, m, s) = sunrise.to_hms();
//!     println!("Sunrise: {h:02}:{m:02}:{s:02} UTC");
//! }
//! ```
//!
//! ## Polar Days
//!
//! When the sun stays above ([`EventResult::AllDay`]) or below ([`EventResult::AllNight`]) the
//! horizon for the whole day, the result carries no time. Next-occurrence queries return such
//! a day as-is rather than searching ahead.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{Crossing, EventResult, Horizon, HoursUtc};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
