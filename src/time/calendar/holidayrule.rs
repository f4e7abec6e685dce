use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;

pub const OBSERVED_SUFFIX: &str = " (Observed)";

/// A named recurring holiday, optionally bounded to a span of years and
/// optionally observed on another day when it falls on a weekend.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    recurring_holiday: Arc<dyn RecurringHoliday>,
    observance: WeekendAdjustmentRule,
    since: Option<i32>,
    until: Option<i32>
}

impl HolidayRule {
    pub fn new(name: String, recurring_holiday: Arc<dyn RecurringHoliday>) -> HolidayRule {
        HolidayRule {
            name,
            recurring_holiday,
            observance: WeekendAdjustmentRule::default(),
            since: None,
            until: None
        }
    }

    pub fn with_observance(mut self, observance: WeekendAdjustmentRule) -> HolidayRule {
        self.observance = observance;
        self
    }

    pub fn with_years(mut self, since: Option<i32>, until: Option<i32>) -> HolidayRule {
        self.since = since;
        self.until = until;
        self
    }

    pub fn observed_name(&self) -> String {
        format!("{}{}", self.name, OBSERVED_SUFFIX)
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.since.map_or(true, |since| year >= since)
            && self.until.map_or(true, |until| year <= until)
    }

    /// Holidays this rule contributes to `year`: nominal dates plus their
    /// observed copies. An observed copy may come from a neighbouring year,
    /// e.g. January 1st on a Saturday observed on December 31st.
    pub fn get_holidays(&self, year: i32) -> Vec<(NaiveDate, String)> {
        let mut holidays = Vec::new();

        let reach = if self.observance.is_empty() { 0 } else { 1 };

        for source_year in (year - reach)..=(year + reach) {
            if !self.is_active(source_year) {
                continue;
            }
            let mut nominal_dates: Vec<NaiveDate> =
                self.recurring_holiday.get_holiday(source_year).into_iter().collect();
            nominal_dates.sort();

            for d in nominal_dates {
                if d.year() == year {
                    holidays.push((d, self.name.clone()));
                }
                if let Some(observed) = self.observance.observed(d) {
                    if observed.year() == year {
                        holidays.push((observed, self.observed_name()));
                    }
                }
            }
        }

        holidays
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Weekday;

    use super::*;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
    use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_years_day() -> HolidayRule {
        let observance = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ])).unwrap();
        HolidayRule::new("New Year's Day".to_owned(), Arc::new(FixedDateHoliday::new(1, 1).unwrap()))
            .with_observance(observance)
    }

    #[test]
    fn observed_copy_can_land_in_previous_year() {
        // 2022-01-01 is a Saturday.
        let holidays_2021 = new_years_day().get_holidays(2021);
        assert_eq!(holidays_2021, vec![
            (ymd(2021, 1, 1), "New Year's Day".to_owned()),
            (ymd(2021, 12, 31), "New Year's Day (Observed)".to_owned()),
        ]);
        let holidays_2022 = new_years_day().get_holidays(2022);
        assert_eq!(holidays_2022, vec![(ymd(2022, 1, 1), "New Year's Day".to_owned())]);
    }

    #[test]
    fn observed_copy_on_following_monday() {
        let holidays_2023 = new_years_day().get_holidays(2023);
        assert_eq!(holidays_2023, vec![
            (ymd(2023, 1, 1), "New Year's Day".to_owned()),
            (ymd(2023, 1, 2), "New Year's Day (Observed)".to_owned()),
        ]);
    }

    #[test]
    fn year_bounds() {
        let rule = HolidayRule::new("Juneteenth".to_owned(), Arc::new(FixedDateHoliday::new(6, 19).unwrap()))
            .with_years(Some(2021), None);
        assert!(rule.get_holidays(2020).is_empty());
        assert_eq!(rule.get_holidays(2021).len(), 1);
        assert!(!rule.is_active(2019));
    }
}
