use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

/// The `n`-th occurrence of a weekday in a month, e.g. Thanksgiving is the
/// fourth Thursday of November. A fifth occurrence is empty in years that
/// lack one.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        let valid = (1..=12).contains(&month) && (1..=5).contains(&n);
        valid.then_some(NthWeekdayHoliday { month, n, weekday })
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}
