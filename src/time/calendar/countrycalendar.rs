use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::time::calendar::holidaycalendar::{HolidayCalendar, HolidayMap};
use crate::time::calendar::holidayrule::HolidayRule;
use crate::time::recurringholiday::easterrelatedholiday::EASTER_YEAR_RANGE;

/// Rule-based calendar for one country.
///
/// Years are expanded on first use and kept for the lifetime of the calendar.
/// Two threads expanding the same year may both compute it; the result is
/// deterministic, so the second insert is only wasted work.
pub struct CountryCalendar {
    country_code: String,
    rules: Vec<HolidayRule>,
    additional_holidays: Vec<(NaiveDate, String)>,
    expanded_years: RwLock<HashMap<i32, Arc<HolidayMap>>>
}

impl CountryCalendar {
    /// # Arguments
    /// * `country_code` - ISO 3166-1 alpha-2 code
    /// * `rules` - Recurring holiday rules, in display priority order
    /// * `additional_holidays` - One-off holidays (state funerals, coronations, ...)
    pub fn new(
        country_code: String,
        rules: Vec<HolidayRule>,
        additional_holidays: Vec<(NaiveDate, String)>
    ) -> CountryCalendar {
        CountryCalendar {
            country_code,
            rules,
            additional_holidays,
            expanded_years: RwLock::new(HashMap::new())
        }
    }

    #[cfg(test)]
    fn expanded_year_count(&self) -> usize {
        self.expanded_years
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn compute_year(&self, year: i32) -> HolidayMap {
        let mut holiday_map = HolidayMap::new();

        let rule_holidays = self.rules.iter().flat_map(|rule| rule.get_holidays(year));
        let additional_holidays = self.additional_holidays
            .iter()
            .filter(|(d, _)| d.year() == year)
            .cloned();

        // Two holidays on one date share the entry, names joined in rule order.
        for (d, name) in rule_holidays.chain(additional_holidays) {
            holiday_map
                .entry(d)
                .and_modify(|existing: &mut String| {
                    if !existing.split("; ").any(|n| n == name) {
                        existing.push_str("; ");
                        existing.push_str(&name);
                    }
                })
                .or_insert(name);
        }

        holiday_map
    }
}

impl HolidayCalendar for CountryCalendar {
    fn country_code(&self) -> &str {
        &self.country_code
    }

    fn get_holiday_map(&self, year: i32) -> Arc<HolidayMap> {
        if !EASTER_YEAR_RANGE.contains(&year) {
            return Arc::new(HolidayMap::new());
        }

        if let Some(holiday_map) = self.expanded_years
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&year) {
            return Arc::clone(holiday_map);
        }

        // Computed outside the lock so readers of other years are not blocked.
        let holiday_map = Arc::new(self.compute_year(year));
        trace!(country = %self.country_code, year, holidays = holiday_map.len(), "expanded calendar year");

        let mut expanded_years = self.expanded_years
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(expanded_years.entry(year).or_insert(holiday_map))
    }
}
