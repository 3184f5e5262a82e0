// The "today vs. Easter" phrasing, consolidated into one routine with explicit inputs.
// The reference date is always a parameter; nothing here reads the wall clock or any
// ambient state, so the same comparison drives every caller and every test.

use num_traits::ToPrimitive;

use crate::civil::CivilDate;
use crate::computus::{ComputusError, EasterDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub tense: Tense,
    pub message: String,
}

/// Parses a year from user-entered text.
///
/// Accepts surrounding whitespace. Fractional or non-numeric input yields
/// [`ComputusError::InvalidArgument`]; range checking is left to
/// [`easter_sunday`](crate::easter_sunday).
pub fn parse_year(text: &str) -> Result<i64, ComputusError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ComputusError::InvalidArgument)?;
    if value.fract() != 0.0 {
        return Err(ComputusError::InvalidArgument);
    }
    // Rejects non-finite values and anything beyond i64 range.
    value.to_i64().ok_or(ComputusError::InvalidArgument)
}

/// Describes when `easter` falls relative to `today`.
pub fn announce(today: CivilDate, easter: EasterDate) -> Announcement {
    let date = CivilDate::from(easter);
    let days_until = date.day_number() - today.day_number();

    let (tense, message) = match days_until {
        0 => (Tense::Present, format!("Today, {date} is Easter!")),
        1 => (Tense::Future, format!("Tomorrow, {date} is Easter!")),
        -1 => (Tense::Past, format!("Yesterday, {date} was Easter!")),
        d if d > 0 && easter.year() == today.year => {
            (Tense::Future, format!("Later this year, {date} will be Easter."))
        }
        d if d < 0 && easter.year() == today.year => {
            (Tense::Past, format!("Earlier this year, {date} was Easter."))
        }
        d if d > 0 && easter.year() == today.year + 1 => {
            (Tense::Future, format!("Next year, {date} will be Easter."))
        }
        d if d < 0 && easter.year() == today.year - 1 => {
            (Tense::Past, format!("Last year, {date} was Easter."))
        }
        d if d > 0 => (Tense::Future, format!("{date} will be Easter.")),
        _ => (Tense::Past, format!("{date} was Easter.")),
    };

    Announcement { tense, message }
}
