//! Gregorian Easter computus and a small civil-date companion.

pub use announce::{announce, parse_year, Announcement, Tense};
pub use civil::CivilDate;
pub use computus::{easter_sunday, ComputusError, EasterDate};

mod announce;
mod civil;
mod computus;
