//! Error types for lunar date conversion.

/// A lunar date that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LunarDateError {
    /// A leap month was requested in a lunar year with 12 months.
    #[error("lunar year {year} has no leap month, leap {month} requested")]
    NoLeapMonth {
        /// The requested lunar year.
        year: i32,
        /// The requested month.
        month: i32,
    },

    /// A leap month was requested but the year intercalates another month.
    #[error("leap month of lunar year {year} is {leap_month}, leap {month} requested")]
    NoSuchLeapMonth {
        /// The requested lunar year.
        year: i32,
        /// The requested month.
        month: i32,
        /// The month actually repeated in that year.
        leap_month: i32,
    },
}
