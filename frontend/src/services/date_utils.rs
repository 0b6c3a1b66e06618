use chrono::{Datelike, NaiveDate};
use js_sys::Date;

/// Today's date according to the browser clock.
pub fn today() -> Option<NaiveDate> {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
}

/// Parse the value of a `<input type="date">` field (YYYY-MM-DD).
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Whole calendar years between `birth` and `on`: the year difference,
/// minus one if the birthday hasn't come around yet in `on`'s year.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
