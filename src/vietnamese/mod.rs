//! Vietnamese lunisolar calendar (âm lịch).
//!
//! Months begin on the local civil day of a new moon. Month 11 is the month
//! containing the winter solstice; when two consecutive month-11 starts are
//! 13 lunations apart, the first month without a major solar term is a leap
//! month (tháng nhuận) and repeats the number of the month before it.
//!
//! Every computation takes the time zone as an offset from UTC in hours, see
//! [`VIETNAM_TIME_ZONE`].

use tracing::{debug, trace};

use crate::date::{SolarDate, jd_from_date, jd_to_date};
use crate::error::LunarDateError;

pub mod ephemeris;

use ephemeris::{
    NEW_MOON_EPOCH, SYNODIC_MONTH, new_moon_day, new_moon_index, sun_longitude_index,
};

/// Offset of Vietnamese standard time (UTC+7), in hours.
pub const VIETNAM_TIME_ZONE: f64 = 7.0;

/// A date in the lunisolar calendar.
///
/// `leap` is `true` for days of the intercalary month, which repeats the
/// number of the month before it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub leap: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: i32, day: i32, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }

    /// Converts the date back into the solar calendar, see [`lunar_to_solar`].
    pub fn to_solar(&self, time_zone: f64) -> Result<SolarDate, LunarDateError> {
        lunar_to_solar(self.year, self.month, self.day, self.leap, time_zone)
    }
}

/// Finds the day that starts lunar month 11 of `year`, i.e. the month
/// containing the winter solstice of that year.
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::month_eleven;
///
/// assert_eq!(SolarDate::new(2022, 11, 24), SolarDate::from_jdn(month_eleven(2022, 7.0)));
/// ```
pub fn month_eleven(year: i32, time_zone: f64) -> f64 {
    // counted from 1900-01-01 noon, not from the exact new moon
    let off = jd_from_date(year, 12, 31) - 2415021.0;
    let k = (off / SYNODIC_MONTH).floor();
    let nm = new_moon_day(k, time_zone);
    // past the 270° (winter solstice) term: the solstice is in the month before
    if sun_longitude_index(nm, time_zone) >= 9 {
        new_moon_day(k - 1.0, time_zone)
    } else {
        nm
    }
}

/// Given the start `a11` of a month 11, returns the offset of the leap month
/// counted in lunations after it.
///
/// The leap month is the first month whose start has the same major solar
/// term as the start of the previous month. The scan gives up after 13 months
/// and returns `13` in that case.
pub fn leap_month_offset(a11: f64, time_zone: f64) -> i32 {
    let k = month_index(a11);
    let term = |i: i32| sun_longitude_index(new_moon_day(k + i as f64, time_zone), time_zone);

    let mut i = 1;
    let mut arc = term(i);
    loop {
        let last = arc;
        i += 1;
        arc = term(i);
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}

/// Index of the new moon beginning the month that starts on `month_start`.
fn month_index(month_start: f64) -> f64 {
    ((month_start - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor()
}

/// Month number of a month `off` lunations after month 11, given the offset
/// of the leap month if the year has one.
fn month_at(off: i32, leap_off: Option<i32>) -> (i32, bool) {
    let (month, leap) = match leap_off {
        Some(lo) if off >= lo => (off + 10, off == lo),
        _ => (off + 11, false),
    };
    (if month > 12 { month - 12 } else { month }, leap)
}

/// Converts the solar date `year-month-day` into a lunar date.
///
/// `time_zone` is the offset of local time from UTC in hours, `7.0` for
/// Vietnam.
///
/// # Example
///
/// ```
/// use amlich::{LunarDate, solar_to_lunar};
///
/// // 2023 repeats the second month
/// assert_eq!(LunarDate::new(2023, 2, 1, false), solar_to_lunar(2023, 2, 20, 7.0));
/// assert_eq!(LunarDate::new(2023, 2, 1, true), solar_to_lunar(2023, 3, 22, 7.0));
/// ```
pub fn solar_to_lunar(year: i32, month: i32, day: i32, time_zone: f64) -> LunarDate {
    let day_number = jd_from_date(year, month, day);
    let k = new_moon_index(day_number);
    // `k` is only estimated from the mean lunation, the true new moon may
    // still be ahead even at `k`
    let month_start = [k + 1.0, k, k - 1.0]
        .into_iter()
        .map(|i| new_moon_day(i, time_zone))
        .find(|&start| start <= day_number)
        .unwrap_or_else(|| new_moon_day(k - 2.0, time_zone));

    let mut a11 = month_eleven(year, time_zone);
    let mut b11 = a11;
    let mut lunar_year = if a11 >= month_start {
        a11 = month_eleven(year - 1, time_zone);
        year
    } else {
        b11 = month_eleven(year + 1, time_zone);
        year + 1
    };

    let lunar_day = (day_number - month_start + 1.0) as i32;
    let diff = ((month_start - a11) / 29.0).floor() as i32;
    let leap_off = (b11 - a11 > 365.0).then(|| leap_month_offset(a11, time_zone));
    let (lunar_month, leap) = month_at(diff, leap_off);
    trace!(a11, b11, diff, ?leap_off, "located lunar month");

    // months 11 and 12 belong to the lunar year before
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }
    LunarDate::new(lunar_year, lunar_month, lunar_day, leap)
}

/// Converts a lunar date into the solar calendar.
///
/// Fails if `leap` is set but `month` is not the leap month of lunar year
/// `year`. Callers that expect the all-zero date in that case can use
/// `.unwrap_or(SolarDate::ZERO)`.
///
/// Day and month are otherwise not range-checked.
///
/// # Example
///
/// ```
/// use amlich::{SolarDate, lunar_to_solar};
///
/// assert_eq!(Ok(SolarDate::new(2023, 3, 22)), lunar_to_solar(2023, 2, 1, true, 7.0));
/// assert!(lunar_to_solar(2023, 3, 1, true, 7.0).is_err());
/// ```
pub fn lunar_to_solar(
    year: i32,
    month: i32,
    day: i32,
    leap: bool,
    time_zone: f64,
) -> Result<SolarDate, LunarDateError> {
    let (a11, b11) = if month < 11 {
        (month_eleven(year - 1, time_zone), month_eleven(year, time_zone))
    } else {
        (month_eleven(year, time_zone), month_eleven(year + 1, time_zone))
    };
    let k = month_index(a11);
    let mut off = month - 11;
    if off < 0 {
        off += 12;
    }

    if b11 - a11 > 365.0 {
        let leap_off = leap_month_offset(a11, time_zone);
        let (leap_month, _) = month_at(leap_off, Some(leap_off));
        trace!(a11, b11, leap_off, leap_month, "lunar year has 13 months");
        if leap && month != leap_month {
            debug!(year, month, leap_month, "no such leap month");
            return Err(LunarDateError::NoSuchLeapMonth {
                year,
                month,
                leap_month,
            });
        } else if leap || off >= leap_off {
            off += 1;
        }
    } else if leap {
        debug!(year, month, "lunar year has no leap month");
        return Err(LunarDateError::NoLeapMonth { year, month });
    }

    let month_start = new_moon_day(k + off as f64, time_zone);
    Ok(jd_to_date(month_start + day as f64 - 1.0))
}

/// The months from month 11 of `year - 1` until month 11 of `year`, the span
/// within which the leap month is decided.
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::LunarYear;
///
/// let year = LunarYear::new(2023, 7.0);
/// assert_eq!(Some(2), year.leap_month());
/// assert_eq!(SolarDate::new(2023, 1, 22), year.months[2].date);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarYear {
    pub year: i32,
    /// All month starts, including month 11 of the next span to mark the end
    /// of this one.
    pub months: Vec<MonthStart>,
}

/// First day of a lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthStart {
    pub month: i32,
    pub leap: bool,
    pub date: SolarDate,
}

impl LunarYear {
    pub fn new(year: i32, time_zone: f64) -> Self {
        let a11 = month_eleven(year - 1, time_zone);
        let b11 = month_eleven(year, time_zone);
        let k = month_index(a11);
        let leap_off = (b11 - a11 > 365.0).then(|| leap_month_offset(a11, time_zone));
        let count = if leap_off.is_some() { 13 } else { 12 };

        let months = (0..=count)
            .map(|off| {
                let (month, leap) = month_at(off, leap_off);
                MonthStart {
                    month,
                    leap,
                    date: jd_to_date(new_moon_day(k + off as f64, time_zone)),
                }
            })
            .collect();
        LunarYear { year, months }
    }

    /// Returns the number of the repeated month, if the span has one.
    pub fn leap_month(&self) -> Option<i32> {
        self.months.iter().find(|m| m.leap).map(|m| m.month)
    }

    /// Number of months in the span, 12 or 13.
    pub fn month_count(&self) -> usize {
        self.months.len() - 1
    }
}
