// The date of Easter Sunday is the first Sunday after the ecclesiastical full moon that
// falls on or after March 21. The ecclesiastical moon is a calculated moon, not the
// astronomical one: lunar phases repeat on (almost) the same calendar dates every 19
// years (the Metonic cycle), so the moon's age on March 21 (the epact) can be derived
// from the year's position within that cycle, plus two slow corrections that account for
// the Gregorian reform:
//
// - centuries whose leap day is skipped (1700, 1800, 1900, ... but not 1600 or 2000)
//   shift the calendar against the moon by one day each;
// - the Metonic cycle itself drifts against the real moon by about one day every 310
//   years, absorbed by dropping one day from the epact roughly 8 times per 2500 years.
//
// With the epact in hand, the remaining work is finding how many days past March 21 the
// next Sunday lands, using the century and year-in-century leap counts to locate the
// weekday. Two raw results fall outside the valid March 22 - April 25 window (March 21
// and April 26); a final correction term detects those and pulls the date back a week.
//
// This is the "Anonymous Gregorian Computus", valid for 1583 onward (1582 is the reform
// year itself; the derivation needs whole Gregorian centuries). Every quantity is a
// small non-negative integer except the century terms, which grow with the year but
// never overflow an i64 for any representable year.

use num_integer::Integer;
use thiserror::Error;

/// First year the Gregorian computus is defined for.
pub(crate) const FIRST_GREGORIAN_EASTER_YEAR: i64 = 1583;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputusError {
    #[error("year must be an integer")]
    InvalidArgument,
    #[error("Gregorian Easter is defined for years >= 1583")]
    OutOfRange,
}

/// The date of Easter Sunday in some year: March 22 through April 25 inclusive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct EasterDate {
    year: i64,
    month: u8,
    day: u8,
}

impl EasterDate {
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Always 3 (March) or 4 (April).
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

// Every intermediate quantity of the computus, kept as an explicit named field so each
// one can be checked against a worked example. A single wrong constant in this chain
// produces correct dates for most years and silently wrong ones for the rest, so the
// intermediates are part of the tested surface, not scratch variables.
#[allow(dead_code)] // several fields are read only by the worked-example tests
pub(crate) struct Computus {
    // Position in the 19-year Metonic cycle, 0-18.
    pub(crate) golden_number: i64,
    // year / 100 and year % 100.
    pub(crate) century: i64,
    pub(crate) year_in_century: i64,
    // Leap-century bookkeeping: century / 4 and century % 4.
    pub(crate) century_leap_blocks: i64,
    pub(crate) century_leap_remainder: i64,
    // Centuries since the reform whose leap day has been skipped.
    pub(crate) gregorian_leap_skip: i64,
    // Correction for the Metonic cycle drifting against the real moon.
    pub(crate) lunar_correction: i64,
    // Age of the ecclesiastical moon on March 21, 0-29.
    pub(crate) epact: i64,
    // Leap-year bookkeeping within the century: year_in_century / 4 and % 4.
    pub(crate) year_leap_blocks: i64,
    pub(crate) year_leap_remainder: i64,
    // Days to move forward to land on a Sunday, 0-6.
    pub(crate) weekday_shift: i64,
    // 1 when the raw result would be March 21 or April 26, else 0.
    pub(crate) overflow_correction: i64,
}

impl Computus {
    pub(crate) fn for_year(year: i64) -> Self {
        let golden_number = year.mod_floor(&19);
        let (century, year_in_century) = year.div_mod_floor(&100);
        let (century_leap_blocks, century_leap_remainder) = century.div_mod_floor(&4);
        let gregorian_leap_skip = (century + 8) / 25;
        let lunar_correction = (century - gregorian_leap_skip + 1) / 3;
        let epact = (19 * golden_number + century - century_leap_blocks - lunar_correction + 15)
            .mod_floor(&30);
        let (year_leap_blocks, year_leap_remainder) = year_in_century.div_mod_floor(&4);
        let weekday_shift = (32 + 2 * century_leap_remainder + 2 * year_leap_blocks
            - epact
            - year_leap_remainder)
            .mod_floor(&7);
        let overflow_correction = (golden_number + 11 * epact + 22 * weekday_shift) / 451;

        Computus {
            golden_number,
            century,
            year_in_century,
            century_leap_blocks,
            century_leap_remainder,
            gregorian_leap_skip,
            lunar_correction,
            epact,
            year_leap_blocks,
            year_leap_remainder,
            weekday_shift,
            overflow_correction,
        }
    }

    pub(crate) fn date(&self, year: i64) -> EasterDate {
        // Offset such that dividing by 31 yields the month directly: 114 = 31*3 + 21,
        // i.e. the zero point sits 21 days into March.
        let raw_offset = self.epact + self.weekday_shift - 7 * self.overflow_correction + 114;
        let (month, day_offset) = raw_offset.div_mod_floor(&31);
        EasterDate {
            year,
            month: month as u8,
            day: (day_offset + 1) as u8,
        }
    }
}

/// Computes the date of Easter Sunday for `year`.
///
/// Defined for the Gregorian calendar only, from 1583 onward; earlier years
/// return [`ComputusError::OutOfRange`]. There is no upper bound.
pub fn easter_sunday(year: i64) -> Result<EasterDate, ComputusError> {
    if year < FIRST_GREGORIAN_EASTER_YEAR {
        return Err(ComputusError::OutOfRange);
    }
    Ok(Computus::for_year(year).date(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_easter_dates() {
        // Reference table values. 1583 is the first computable year; published tables
        // give April 10 for it (golden number 6, epact 16).
        assert_eq!(easter_sunday(1583), Ok(date(1583, 4, 10)));
        assert_eq!(easter_sunday(1900), Ok(date(1900, 4, 15)));
        assert_eq!(easter_sunday(2000), Ok(date(2000, 4, 23)));
        assert_eq!(easter_sunday(2024), Ok(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Ok(date(2025, 4, 20)));

        // Extremes of the valid window: March 22 is the earliest possible date and
        // April 25 the latest.
        assert_eq!(easter_sunday(1818), Ok(date(1818, 3, 22)));
        assert_eq!(easter_sunday(2038), Ok(date(2038, 4, 25)));
    }

    #[test]
    fn test_intermediate_quantities_worked_example() {
        // Year 2025, worked by hand:
        // 2025 = 19*106 + 11, so golden number 11.
        // century 20, year-in-century 25; 20 = 4*5 + 0; skip = 28/25 = 1;
        // lunar correction = (20 - 1 + 1)/3 = 6;
        // epact = (209 + 20 - 5 - 6 + 15) % 30 = 233 % 30 = 23;
        // 25 = 4*6 + 1; weekday shift = (32 + 0 + 12 - 23 - 1) % 7 = 20 % 7 = 6;
        // overflow = (11 + 253 + 132)/451 = 0.
        let c = Computus::for_year(2025);
        assert_eq!(c.golden_number, 11);
        assert_eq!(c.century, 20);
        assert_eq!(c.year_in_century, 25);
        assert_eq!(c.century_leap_blocks, 5);
        assert_eq!(c.century_leap_remainder, 0);
        assert_eq!(c.gregorian_leap_skip, 1);
        assert_eq!(c.lunar_correction, 6);
        assert_eq!(c.epact, 23);
        assert_eq!(c.year_leap_blocks, 6);
        assert_eq!(c.year_leap_remainder, 1);
        assert_eq!(c.weekday_shift, 6);
        assert_eq!(c.overflow_correction, 0);
        assert_eq!(c.date(2025), date(2025, 4, 20));
    }

    #[test]
    fn test_overflow_correction_years() {
        // Without the correction term 1981 would come out as April 26, one day past
        // the valid window. 1954 is the other shape of the same case.
        let c = Computus::for_year(1981);
        assert_eq!(c.epact, 29);
        assert_eq!(c.weekday_shift, 6);
        assert_eq!(c.overflow_correction, 1);
        assert_eq!(c.date(1981), date(1981, 4, 19));

        let c = Computus::for_year(1954);
        assert_eq!(c.overflow_correction, 1);
        assert_eq!(c.date(1954), date(1954, 4, 18));
    }

    #[test]
    fn test_date_window_over_full_cycle_span() {
        // A thousand years covers every century-leap pattern. Easter never falls
        // before March 22 or after April 25.
        for year in 1583..=2583 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.year(), year);
            match easter.month() {
                3 => assert!(
                    (22..=31).contains(&easter.day()),
                    "bad March date in {}: {}",
                    year,
                    easter.day()
                ),
                4 => assert!(
                    (1..=25).contains(&easter.day()),
                    "bad April date in {}: {}",
                    year,
                    easter.day()
                ),
                month => panic!("Easter {} landed in month {}", year, month),
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for year in [1583, 1900, 2025, 40000] {
            assert_eq!(easter_sunday(year), easter_sunday(year));
        }
    }

    #[test]
    fn test_golden_number_metonic_periodicity() {
        // The golden number repeats with the 19-year Metonic cycle. The final dates
        // don't (century corrections differ), but the lunar position does.
        for year in 1583..2500 {
            let a = Computus::for_year(year);
            let b = Computus::for_year(year + 19);
            assert_eq!(a.golden_number, b.golden_number);
        }
    }

    #[test]
    fn test_years_before_1583_are_rejected() {
        assert_eq!(easter_sunday(1582), Err(ComputusError::OutOfRange));
        assert_eq!(easter_sunday(1000), Err(ComputusError::OutOfRange));
        assert_eq!(easter_sunday(0), Err(ComputusError::OutOfRange));
        assert_eq!(easter_sunday(-44), Err(ComputusError::OutOfRange));
        assert!(easter_sunday(1583).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ComputusError::InvalidArgument.to_string(),
            "year must be an integer"
        );
        assert_eq!(
            ComputusError::OutOfRange.to_string(),
            "Gregorian Easter is defined for years >= 1583"
        );
    }

    fn date(year: i64, month: u8, day: u8) -> EasterDate {
        EasterDate { year, month, day }
    }
}
