use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

/// The given weekday falling on or before a fixed day of a month,
/// e.g. Victoria Day is the Monday on or before May 24.
#[derive(Clone)]
pub struct WeekdayOnOrBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday,
}

impl WeekdayOnOrBeforeHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday) -> Option<WeekdayOnOrBeforeHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)?;
        Some(WeekdayOnOrBeforeHoliday { month, day, weekday })
    }
}

impl RecurringHoliday for WeekdayOnOrBeforeHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();
        if let Some(anchor) = NaiveDate::from_ymd_opt(year, self.month, self.day) {
            let days_back = (anchor.weekday().num_days_from_monday() + 7
                - self.weekday.num_days_from_monday()) % 7;
            if let Some(d) = anchor.checked_sub_days(Days::new(days_back as u64)) {
                holiday_set.insert(d);
            }
        }
        holiday_set
    }
}
