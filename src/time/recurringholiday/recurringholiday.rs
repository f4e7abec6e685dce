use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

/// A yearly holiday rule.
///
/// `get_holiday` returns nominal dates only; observed-day shifting is applied
/// by `HolidayRule`. Years a rule cannot place (a missing fifth weekday, a
/// year outside the Easter table) yield an empty set.
pub trait RecurringHoliday: Send + Sync {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).contains(d)
    }
}
