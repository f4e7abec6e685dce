use std::collections::HashSet;

use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        // 2000 is a leap year, so Feb 29 passes and is skipped in other years.
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(FixedDateHoliday { month, day })
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(2, 30).is_none());
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(7, 4).is_some());
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert_eq!(leap_day.get_holiday(2024).len(), 1);
        assert!(leap_day.get_holiday(2023).is_empty());
    }
}
