//! Conversion between the Gregorian calendar and the Vietnamese lunisolar
//! calendar (âm lịch).
//!
//! New moons and solar terms are placed with the classical approximation
//! formulas of Jean Meeus' *Astronomical Algorithms*, which are accurate
//! enough to find the right civil day for several centuries around 1900.
//! Any fixed time zone can be used; Vietnam uses UTC+7
//! ([`VIETNAM_TIME_ZONE`]), and with UTC+8 the result mostly agrees with the
//! Chinese calendar.
//!
//! # Examples
//!
//! ```
//! use amlich::{LunarDate, SolarDate, VIETNAM_TIME_ZONE, lunar_to_solar, solar_to_lunar};
//!
//! let lunar = solar_to_lunar(2023, 3, 22, VIETNAM_TIME_ZONE);
//! assert_eq!(LunarDate::new(2023, 2, 1, true), lunar); // 1st of leap month 2
//!
//! let solar = lunar_to_solar(2023, 2, 1, true, VIETNAM_TIME_ZONE);
//! assert_eq!(Ok(SolarDate::new(2023, 3, 22)), solar);
//! ```
//!
//! Asking for a leap month the year does not have is an error:
//!
//! ```
//! use amlich::{SolarDate, lunar_to_solar};
//!
//! let solar = lunar_to_solar(2024, 2, 1, true, 7.0);
//! assert_eq!(SolarDate::ZERO, solar.unwrap_or(SolarDate::ZERO));
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for the date types.

pub mod calendar;
pub mod date;
pub mod error;
pub mod vietnamese;

pub use calendar::CalendarDay;
pub use date::SolarDate;
pub use error::LunarDateError;
pub use vietnamese::{LunarDate, VIETNAM_TIME_ZONE, lunar_to_solar, solar_to_lunar};
