use std::collections::HashMap;

use amlich::vietnamese::LunarYear;
use amlich::{
    LunarDate, LunarDateError, SolarDate, VIETNAM_TIME_ZONE, lunar_to_solar, solar_to_lunar,
};

fn days(from: SolarDate, to: SolarDate, step: usize) -> impl Iterator<Item = SolarDate> {
    let (from, to) = (from.jdn() as i64, to.jdn() as i64);
    (from..=to).step_by(step).map(|jdn| SolarDate::from_jdn(jdn as f64))
}

fn assert_round_trip(date: SolarDate, time_zone: f64) {
    let lunar = solar_to_lunar(date.year, date.month, date.day, time_zone);
    assert!((1..=12).contains(&lunar.month), "{date}: {lunar:?}");
    assert!((1..=30).contains(&lunar.day), "{date}: {lunar:?}");
    assert_eq!(Ok(date), lunar.to_solar(time_zone), "{date}: {lunar:?}");
}

#[test]
fn round_trip_vietnam() {
    for date in days(SolarDate::new(1900, 1, 1), SolarDate::new(2100, 12, 31), 1) {
        assert_round_trip(date, VIETNAM_TIME_ZONE);
    }
}

#[test]
fn round_trip_other_time_zones() {
    for tz in [-5.0, 0.0, 5.5, 8.0, 9.0] {
        for date in days(SolarDate::new(1800, 1, 1), SolarDate::new(2199, 12, 31), 13) {
            assert_round_trip(date, tz);
        }
    }
}

#[test]
fn one_leap_month_per_year() {
    let mut leap_months: HashMap<i32, Vec<i32>> = HashMap::new();
    for date in days(SolarDate::new(1950, 1, 1), SolarDate::new(2050, 12, 31), 1) {
        let lunar = solar_to_lunar(date.year, date.month, date.day, VIETNAM_TIME_ZONE);
        if lunar.leap && lunar.day == 1 {
            leap_months.entry(lunar.year).or_default().push(lunar.month);
        }
    }
    assert!(leap_months.len() > 30);
    for (year, months) in &leap_months {
        assert_eq!(1, months.len(), "{year}: {months:?}");
    }
    assert_eq!(Some(&vec![2]), leap_months.get(&2023));
    assert_eq!(None, leap_months.get(&2024));
}

#[test]
fn leap_flag_requires_leap_month() {
    for year in 1990..2040 {
        let leap_month = LunarYear::new(year, VIETNAM_TIME_ZONE).leap_month();
        for month in 1..=10 {
            let res = lunar_to_solar(year, month, 1, true, VIETNAM_TIME_ZONE);
            match leap_month {
                Some(m) if m == month => {
                    let date = res.unwrap();
                    assert_eq!(
                        LunarDate::new(year, month, 1, true),
                        solar_to_lunar(date.year, date.month, date.day, VIETNAM_TIME_ZONE)
                    );
                }
                _ => assert!(res.unwrap_or(SolarDate::ZERO).is_zero(), "{year}-{month}"),
            }
        }
    }
}

#[test]
fn error_messages() {
    let err = lunar_to_solar(2023, 3, 1, true, VIETNAM_TIME_ZONE).unwrap_err();
    assert_eq!(
        "leap month of lunar year 2023 is 2, leap 3 requested",
        err.to_string()
    );
    let err = lunar_to_solar(2024, 2, 1, true, VIETNAM_TIME_ZONE).unwrap_err();
    assert_eq!(LunarDateError::NoLeapMonth { year: 2024, month: 2 }, err);
}
