use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1)
        };
        
        let mut holiday_set = HashSet::new();
        let Some(first_of_next_month) = first_of_next_month else {
            return holiday_set;
        };

        // Walk back to the target weekday; a full week if the 1st already matches.
        let days_back = ((first_of_next_month.weekday().num_days_from_monday() as i32 
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7) as u64;
        let days_back = if days_back == 0 { 7 } else { days_back };
        
        if let Some(d) = first_of_next_month.checked_sub_days(Days::new(days_back)) {
            holiday_set.insert(d);
        }
        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memorial_day_is_last_monday_of_may() {
        let memorial_day = LastWeekdayHoliday::new(5, Weekday::Mon).unwrap();
        let holidays = memorial_day.get_holiday(2022);
        assert_eq!(holidays.len(), 1);
        assert!(holidays.contains(&NaiveDate::from_ymd_opt(2022, 5, 30).unwrap()));
    }

    #[test]
    fn handles_december() {
        // 2022-12-31 is a Saturday.
        let rule = LastWeekdayHoliday::new(12, Weekday::Sat).unwrap();
        assert!(rule.is_holiday(&NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()));
    }
}
