use chrono::{Datelike, Utc};

/// Earliest birth year an identity number may carry.
pub const MIN_BIRTH_YEAR: i32 = 1930;

/// Century the 2-digit year of a legacy 15-character number is read in. Legacy numbers were
/// only issued to people born in the 1900s, so `yy` always means `19yy`.
pub const LEGACY_CENTURY: i32 = 1900;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month`, or `None` if the month does not exist.
///
/// February only has 29 days when the year is a leap year strictly inside
/// `(MIN_BIRTH_YEAR, current_year)`; outside that window it always has 28.
pub fn days_in_month(year: i32, month: u32, current_year: i32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = is_leap_year(year) && year > MIN_BIRTH_YEAR && year < current_year;
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Whether `(year, month, day)` is a legal birth date: the year lies in
/// `[MIN_BIRTH_YEAR, current_year)`, the month exists and the day fits the month.
///
/// A birth year equal to `current_year` is rejected.
pub fn is_legal_past_date(year: i32, month: u32, day: u32, current_year: i32) -> bool {
    if year < MIN_BIRTH_YEAR || year >= current_year {
        return false;
    }
    match days_in_month(year, month, current_year) {
        Some(max_day) => (1..=max_day).contains(&day),
        None => false,
    }
}

pub fn expand_two_digit_year(two_digit_year: u32) -> i32 {
    LEGACY_CENTURY + (two_digit_year % 100) as i32
}

/// Current year according to the wall clock (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Parses a run of ASCII digits. Signs and whitespace are rejected, unlike `str::parse`.
pub(crate) fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;

    const CURRENT_YEAR: i32 = 2026;

    #[test]
    fn leap_years() {
        for year in [1932, 1996, 2000, 2024, 2400] {
            assert!(is_leap_year(year), "{year} should be a leap year");
        }
        for year in [1900, 1931, 2023, 2100] {
            assert!(!is_leap_year(year), "{year} should not be a leap year");
        }
    }

    #[test]
    fn leap_day_boundaries() {
        assert!(is_legal_past_date(2000, 2, 29, CURRENT_YEAR));
        assert!(is_legal_past_date(2024, 2, 29, CURRENT_YEAR));
        assert!(!is_legal_past_date(1900, 2, 29, CURRENT_YEAR));
        assert!(!is_legal_past_date(2023, 2, 29, CURRENT_YEAR));
        assert!(is_legal_past_date(2023, 2, 28, CURRENT_YEAR));
    }

    #[test]
    fn february_is_gated_by_the_year_window() {
        assert_eq!(days_in_month(2024, 2, CURRENT_YEAR), Some(29));
        // 2028 is a leap year but lies after the reference year
        assert_eq!(days_in_month(2028, 2, CURRENT_YEAR), Some(28));
        assert_eq!(days_in_month(1928, 2, CURRENT_YEAR), Some(28));
        assert_eq!(days_in_month(1932, 2, CURRENT_YEAR), Some(29));
    }

    #[test]
    fn month_lengths() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(1990, month, CURRENT_YEAR), Some(31));
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(1990, month, CURRENT_YEAR), Some(30));
        }
        assert_eq!(days_in_month(1990, 0, CURRENT_YEAR), None);
        assert_eq!(days_in_month(1990, 13, CURRENT_YEAR), None);
    }

    #[test]
    fn year_window() {
        assert!(!is_legal_past_date(1929, 5, 1, CURRENT_YEAR));
        assert!(is_legal_past_date(1930, 5, 1, CURRENT_YEAR));
        assert!(is_legal_past_date(2025, 12, 31, CURRENT_YEAR));
        assert!(!is_legal_past_date(2026, 1, 1, CURRENT_YEAR));
        assert!(!is_legal_past_date(2030, 1, 1, CURRENT_YEAR));
    }

    #[test]
    fn illegal_days() {
        assert!(!is_legal_past_date(1990, 4, 31, CURRENT_YEAR));
        assert!(!is_legal_past_date(1990, 1, 0, CURRENT_YEAR));
        assert!(!is_legal_past_date(1990, 1, 32, CURRENT_YEAR));
        assert!(!is_legal_past_date(1990, 13, 1, CURRENT_YEAR));
        assert!(!is_legal_past_date(1990, 0, 1, CURRENT_YEAR));
    }

    #[test]
    fn two_digit_years_expand_into_the_1900s() {
        assert_eq!(expand_two_digit_year(0), 1900);
        assert_eq!(expand_two_digit_year(49), 1949);
        assert_eq!(expand_two_digit_year(99), 1999);
    }

    #[test]
    fn digits_parsing() {
        assert_eq!(parse_digits("0049"), Some(49));
        assert_eq!(parse_digits("+49"), None);
        assert_eq!(parse_digits(" 4"), None);
        assert_eq!(parse_digits(""), None);
    }

    #[test]
    fn clock_year_is_plausible() {
        assert!(current_year() > MIN_BIRTH_YEAR);
    }
}
