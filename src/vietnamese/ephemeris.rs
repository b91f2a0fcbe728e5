//! Approximate positions of the Sun and the Moon.
//!
//! Both series follow Jean Meeus, *Astronomical Algorithms* (1998), truncated
//! to the terms needed to place new moons and major solar terms on the right
//! civil day. All times are Julian dates (days since 4713 BC noon, UT).

use std::f64::consts::PI;

/// Degrees to radians.
const DR: f64 = PI / 180.0;

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian date of the new moon of 1900-01-01 13:52 UT, from which new moons
/// are numbered.
pub const NEW_MOON_EPOCH: f64 = 2415021.076998695;

/// Computes the time of the `k`-th new moon after the new moon of
/// 1900-01-01 13:52 UT.
///
/// `k` may be negative. Accuracy degrades far away from `k == 0` but no value
/// is rejected.
///
/// # Example
///
/// ```
/// use amlich::vietnamese::ephemeris::new_moon;
///
/// assert!((new_moon(2.0) - 2415079.976104907).abs() < 1e-6);
/// ```
pub fn new_moon(k: f64) -> f64 {
    // Julian centuries from 1900 January 0.5
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let mean = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3
        + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DR).sin();
    // sun's mean anomaly
    let m = (359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3) * DR;
    // moon's mean anomaly
    let mpr = (306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3) * DR;
    // moon's argument of latitude
    let f = (21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3) * DR;

    let c1 = (0.1734 - 0.000393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mpr.sin()
        + 0.0161 * (2.0 * mpr).sin()
        - 0.0004 * (3.0 * mpr).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mpr).sin()
        - 0.0074 * (m - mpr).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0004 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mpr).sin()
        + 0.0010 * (2.0 * f - mpr).sin()
        + 0.0005 * (2.0 * mpr + m).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    mean + c1 - delta_t
}

/// Computes the ecliptic longitude of the Sun at Julian date `jd`, in
/// radians within `[0, 2π)`.
pub fn sun_longitude(jd: f64) -> f64 {
    // Julian centuries from J2000.0
    let t = (jd - 2451545.0) / 36525.0;
    let t2 = t * t;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DR * m).sin()
        + (0.019993 - 0.000101 * t) * (DR * 2.0 * m).sin()
        + 0.000290 * (DR * 3.0 * m).sin();
    let l = (l0 + dl) * DR;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Returns which major solar term (`0..=11`, 30° each, starting from the
/// March equinox) the Sun is in at local midnight starting day `day_number`.
///
/// `time_zone` is the offset of local time from UTC in hours.
///
/// ```
/// use amlich::SolarDate;
/// use amlich::vietnamese::ephemeris::sun_longitude_index;
///
/// // after the winter solstice
/// assert_eq!(9, sun_longitude_index(SolarDate::new(2023, 12, 25).jdn(), 7.0));
/// ```
pub fn sun_longitude_index(day_number: f64, time_zone: f64) -> i32 {
    (sun_longitude(local_midnight(day_number, time_zone)) / PI * 6.0).floor() as i32
}

/// Julian day number of the local civil day containing the `k`-th new moon.
pub fn new_moon_day(k: f64, time_zone: f64) -> f64 {
    local_day(new_moon(k), time_zone)
}

/// Julian day number of the local civil day containing the instant `jd`.
pub fn local_day(jd: f64, time_zone: f64) -> f64 {
    (jd + 0.5 + time_zone / 24.0).floor()
}

/// Julian date of local midnight that begins day `day_number`.
pub fn local_midnight(day_number: f64, time_zone: f64) -> f64 {
    day_number - 0.5 - time_zone / 24.0
}

/// Index of the new moon nearest before `jd` by the mean synodic month.
pub fn new_moon_index(jd: f64) -> f64 {
    ((jd - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::jd_from_date;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_moons() {
        assert_abs_diff_eq!(2415079.976104907, new_moon(2.0), epsilon = 1e-6);
        assert_abs_diff_eq!(2414961.93439546, new_moon(-2.0), epsilon = 1e-6);
    }

    #[test]
    fn new_moon_spacing() {
        for k in -2000..3000 {
            let k = k as f64;
            let len = new_moon(k + 1.0) - new_moon(k);
            assert!((29.2..29.9).contains(&len), "k = {k}: {len}");
        }
    }

    #[test]
    fn new_moon_days() {
        // 2023-01-21 20:53 UT
        let k = new_moon_index(jd_from_date(2023, 1, 22));
        assert_eq!(jd_from_date(2023, 1, 22), new_moon_day(k, 7.0));
        assert_eq!(jd_from_date(2023, 1, 21), new_moon_day(k, 0.0));
    }

    #[test]
    fn sun_longitude_at_j2000() {
        let deg = sun_longitude(2451545.0) / DR;
        assert_abs_diff_eq!(280.382, deg, epsilon = 0.01);
    }

    #[test]
    fn sun_longitude_range() {
        let mut jd = 2400000.0;
        while jd < 2500000.0 {
            let l = sun_longitude(jd);
            assert!((0.0..2.0 * PI).contains(&l), "{jd}: {l}");
            jd += 17.3;
        }
    }

    #[test]
    fn major_terms() {
        for ((y, m, d), std) in [
            ((2023, 4, 1), 0),
            ((2023, 6, 1), 2),
            ((2023, 7, 1), 3),
            ((2023, 10, 1), 6),
            ((2023, 12, 25), 9),
            ((2024, 2, 10), 10),
            ((2024, 3, 10), 11),
        ] {
            assert_eq!(std, sun_longitude_index(jd_from_date(y, m, d), 7.0), "{y}-{m}-{d}");
        }
    }
}
