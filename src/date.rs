//! Gregorian (solar) dates and Julian day numbers.

use std::fmt;

/// First Julian day number of the Gregorian calendar (1582-10-15). Days
/// before it are counted in the Julian calendar.
pub const GREGORIAN_REFORM_JDN: f64 = 2299161.0;

/// A solar calendar date, `(year, month, day)`.
///
/// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
/// etc. Dates before 1582-10-15 are read in the Julian calendar.
///
/// The fields are not range-checked: any integers are accepted and produce
/// an arithmetically determined Julian day number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl SolarDate {
    /// The all-zero date, historically returned in place of a lunar date
    /// that does not exist.
    pub const ZERO: SolarDate = SolarDate::new(0, 0, 0);

    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Creates a `SolarDate` from a Julian day number.
    ///
    /// The fractional part of `jdn` is discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::SolarDate;
    ///
    /// assert_eq!(SolarDate::new(2000, 1, 1), SolarDate::from_jdn(2451545.0));
    /// ```
    pub fn from_jdn(jdn: f64) -> Self {
        jd_to_date(jdn)
    }

    /// Returns the (integral) Julian day number of the date.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::SolarDate;
    ///
    /// assert_eq!(2451545.0, SolarDate::new(2000, 1, 1).jdn());
    /// ```
    pub fn jdn(&self) -> f64 {
        jd_from_date(self.year, self.month, self.day)
    }

    /// Returns `true` for the [`SolarDate::ZERO`] sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Formats the date in ISO 8601 format.
///
/// ```
/// use amlich::SolarDate;
///
/// assert_eq!("2023-02-10", SolarDate::new(2023, 2, 10).to_string());
/// ```
impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Computes the Julian day number of `year-month-day`, i.e. the number of
/// days since January 1, 4713 BC (proleptic Julian calendar).
///
/// Day and month are not bounds-checked; `(2023, 1, 32)` lands on February 1.
pub fn jd_from_date(year: i32, month: i32, day: i32) -> f64 {
    let (yy, mm, dd) = (year as f64, month as f64, day as f64);
    let a = ((14.0 - mm) / 12.0).floor();
    let y = yy + 4800.0 - a;
    let m = mm + 12.0 * a - 3.0;
    let jd = dd + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor()
        - (y / 100.0).floor()
        + (y / 400.0).floor()
        - 32045.0;
    if jd < GREGORIAN_REFORM_JDN {
        dd + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor() - 32083.0
    } else {
        jd
    }
}

/// Converts a Julian day number into a calendar date, inverse of
/// [`jd_from_date`].
pub fn jd_to_date(jd: f64) -> SolarDate {
    let jd = jd.floor();
    let (b, c) = if jd >= GREGORIAN_REFORM_JDN {
        let a = jd + 32044.0;
        let b = ((4.0 * a + 3.0) / 146097.0).floor();
        (b, a - (b * 146097.0 / 4.0).floor())
    } else {
        (0.0, jd + 32082.0)
    };
    let d = ((4.0 * c + 3.0) / 1461.0).floor();
    let e = c - (1461.0 * d / 4.0).floor();
    let m = ((5.0 * e + 2.0) / 153.0).floor();
    let day = e - ((153.0 * m + 2.0) / 5.0).floor() + 1.0;
    let month = m + 3.0 - 12.0 * (m / 10.0).floor();
    let year = b * 100.0 + d - 4800.0 + (m / 10.0).floor();
    SolarDate::new(year as i32, month as i32, day as i32)
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` of the Gregorian `year`, or `None` if `month`
/// is not in `1..=12`.
///
/// ```
/// use amlich::date::days_in_month;
///
/// assert_eq!(Some(29), days_in_month(2016, 2));
/// assert_eq!(Some(28), days_in_month(2017, 2));
/// assert_eq!(None, days_in_month(2017, 13));
/// ```
pub fn days_in_month(year: i32, month: i32) -> Option<i32> {
    Some(match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => return None,
    })
}
