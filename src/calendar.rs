//! Day-by-day listings of solar months with their lunar dates.

use crate::date::{SolarDate, days_in_month};
use crate::vietnamese::{LunarDate, solar_to_lunar};

/// A day in both calendars.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDay {
    pub solar: SolarDate,
    pub lunar: LunarDate,
}

impl CalendarDay {
    pub fn new(solar: SolarDate, time_zone: f64) -> Self {
        let lunar = solar_to_lunar(solar.year, solar.month, solar.day, time_zone);
        Self { solar, lunar }
    }
}

/// Lists every day of the solar `month` of `year`.
///
/// Returns an empty list if `month` is not in `1..=12`.
///
/// ```
/// use amlich::calendar::month_dates;
///
/// let days = month_dates(2016, 2, 7.0);
/// assert_eq!(29, days.len());
/// assert_eq!((2016, 1, 1), (days[7].lunar.year, days[7].lunar.month, days[7].lunar.day));
/// ```
pub fn month_dates(year: i32, month: i32, time_zone: f64) -> Vec<CalendarDay> {
    let len = days_in_month(year, month).unwrap_or(0);
    (1..=len)
        .map(|day| CalendarDay::new(SolarDate::new(year, month, day), time_zone))
        .collect()
}

/// Lists every day of `year`, grouped by solar month.
pub fn year_month_dates(year: i32, time_zone: f64) -> Vec<Vec<CalendarDay>> {
    (1..=12)
        .map(|month| month_dates(year, month, time_zone))
        .collect()
}
