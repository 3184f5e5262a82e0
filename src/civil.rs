// A plain proleptic-Gregorian calendar day. Day-number conversion uses the usual trick
// of starting the year on March 1: the leap day then falls at the very end of the year,
// so month lengths follow the fixed 153-days-per-5-months pattern and leap days
// accumulate as natural overflow in the division chain, without branching.

use std::fmt;

use num_integer::Integer;

use crate::computus::EasterDate;

// The Gregorian calendar repeats in 400-year cycles of 97 leap + 303 normal years.
const GREGORIAN_CYCLE_DAYS: i64 = 97 * 366 + 303 * 365;
const GREGORIAN_CYCLE_YEARS: i64 = 400;

// Days from 0000-03-01 (the zero point of the shifted reckoning) to 1970-01-01.
const UNIX_EPOCH_OFFSET_DAYS: i64 = 719_468;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub fn new(year: i64, month: u8, day: u8) -> Self {
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        CivilDate { year, month, day }
    }

    /// Days since 1970-01-01. Negative before the epoch.
    pub fn day_number(&self) -> i64 {
        // Shift so the year starts in March: January and February belong to the
        // preceding shifted year.
        let (year, month) = if self.month <= 2 {
            (self.year - 1, self.month as i64 + 9)
        } else {
            (self.year, self.month as i64 - 3)
        };
        let (cycle, year_of_cycle) = year.div_mod_floor(&GREGORIAN_CYCLE_YEARS);
        // 153 days per 5 months, counting from March.
        let day_of_year = (153 * month + 2) / 5 + self.day as i64 - 1;
        let day_of_cycle =
            year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;
        cycle * GREGORIAN_CYCLE_DAYS + day_of_cycle - UNIX_EPOCH_OFFSET_DAYS
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // 1970-01-01 was a Thursday.
        (self.day_number() + 4).mod_floor(&7) as u8
    }
}

impl From<EasterDate> for CivilDate {
    fn from(easter: EasterDate) -> Self {
        // The year is taken straight from the computed triple, never re-derived from
        // some other representation of the date.
        CivilDate::new(easter.year(), easter.month(), easter.day())
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}",
            MONTH_NAMES[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}
