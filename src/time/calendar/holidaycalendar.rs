use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::time::daterange::DateRange;

/// Holidays of one year, keyed and therefore ordered by date.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

/// A country's holiday calendar: a mapping from date to holiday name.
///
/// Implementations may compute years lazily; `prime` forces a window of
/// years to be materialized up front.
pub trait HolidayCalendar: Send + Sync {
    fn country_code(&self) -> &str;

    fn get_holiday_map(&self, year: i32) -> Arc<HolidayMap>;

    fn get(&self, d: NaiveDate) -> Option<String> {
        self.get_holiday_map(d.year()).get(&d).cloned()
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.get_holiday_map(d.year()).contains_key(&d)
    }

    /// Holidays inside `range`, ascending by date. Empty for a reversed range.
    fn holidays_between(&self, range: &DateRange) -> Vec<(NaiveDate, String)> {
        let mut holidays = Vec::new();
        for year in range.years() {
            let holiday_map = self.get_holiday_map(year);
            holidays.extend(
                holiday_map
                    .range(range.start_date()..=range.end_date())
                    .map(|(d, name)| (*d, name.clone()))
            );
        }
        holidays
    }

    fn prime(&self, years: RangeInclusive<i32>) {
        for year in years {
            self.get_holiday_map(year);
        }
    }
}
