//!
//! Day-of-month validation with the Gregorian leap-year rule.
//!

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Is `(month, day)` a valid calendar day?
///
/// Day 0 and months outside 1..=12 are always invalid. February is
/// checked against `year`; the caller decides the reference year.
/// Note that the controller passes the wall-clock year here, not the
/// year being entered.
pub fn is_valid_day(month: u32, day: u32, year: i32) -> bool {
    if day == 0 {
        return false;
    }
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => day <= 31,
        4 | 6 | 9 | 11 => day <= 30,
        2 => day <= if is_leap_year(year) { 29 } else { 28 },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn test_valid_day() {
        assert!(!is_valid_day(1, 0, 2024));
        assert!(is_valid_day(1, 31, 2024));
        assert!(!is_valid_day(4, 31, 2024));
        assert!(is_valid_day(4, 30, 2024));
        assert!(is_valid_day(2, 29, 2024));
        assert!(!is_valid_day(2, 29, 2023));
        assert!(is_valid_day(2, 28, 2023));
        assert!(!is_valid_day(2, 30, 2024));
        assert!(!is_valid_day(0, 1, 2024));
        assert!(!is_valid_day(13, 1, 2024));
    }
}
