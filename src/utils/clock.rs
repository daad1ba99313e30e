//! Evaluation clock
//!
//! The only place the engine reads the wall clock. Every generator takes the
//! year as an argument; this helper fills it in when the caller leaves it out.

use chrono::Datelike;

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Use the supplied year, or the current year if none given
pub fn year_or_now(year: Option<i32>) -> i32 {
    year.unwrap_or_else(current_year)
}
