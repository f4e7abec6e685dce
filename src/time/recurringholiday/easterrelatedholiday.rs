use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox 
}

#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

/// Years for which the Easter computation is valid.
pub const EASTER_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1583..=4099;

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { easter_type, shift_days }
    }

    fn get_easter_day(&self, year: i32) -> Option<NaiveDate> {
        if !EASTER_YEAR_RANGE.contains(&year) {
            return None;
        }

        let g = year % 19;
        
        // Days after March 21; may be negative for the Western computation.
        let p = match self.easter_type {
            EasterType::Orthodox => {
                let i = (19 * g + 15) % 30;
                let j = (year + year / 4 + i) % 7;
                let e = if year <= 1600 {
                    10
                } else {
                    10 + year / 100 - 16 - (year / 100 - 16) / 4
                };
                i - j + e
            },
            EasterType::Western => {
                let c = year / 100;
                let c_div_4 = c / 4;
                let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
                let h_div_28 = h / 28;
                let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
                let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
                i - j
            }
        };
        
        let day = 1 + (p + 27 + (p + 6) / 40) % 31;
        let month = 3 + (p + 26) / 30;
        
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        self.get_easter_day(year)
            .and_then(|easter_day| easter_day.checked_add_signed(Duration::days(self.shift_days)))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn western_easter_sundays() {
        let easter = EasterRelatedHoliday::new(EasterType::Western, 0);
        assert!(easter.is_holiday(&ymd(2022, 4, 17)));
        assert!(easter.is_holiday(&ymd(2023, 4, 9)));
        assert!(easter.is_holiday(&ymd(2024, 3, 31)));
        // Earliest possible Easter.
        assert!(easter.is_holiday(&ymd(2285, 3, 22)));
    }

    #[test]
    fn orthodox_easter_sunday() {
        let easter = EasterRelatedHoliday::new(EasterType::Orthodox, 0);
        assert!(easter.is_holiday(&ymd(2022, 4, 24)));
    }

    #[test]
    fn shifted_holidays() {
        let good_friday = EasterRelatedHoliday::new(EasterType::Western, -2);
        let whit_monday = EasterRelatedHoliday::new(EasterType::Western, 50);
        assert!(good_friday.is_holiday(&ymd(2022, 4, 15)));
        assert!(whit_monday.is_holiday(&ymd(2022, 6, 6)));
    }

    #[test]
    fn outside_valid_range_is_empty() {
        let easter = EasterRelatedHoliday::new(EasterType::Western, 0);
        assert!(easter.get_holiday(1500).is_empty());
    }
}
