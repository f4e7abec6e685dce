use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayerror::HolidayError;
use crate::time::calendar::holidayoracle::HolidayOracle;

/// Country code to calendar, populated on first use and never evicted.
///
/// # Concurrency
///
/// Hits only take the read lock. On a miss the calendar is built and primed
/// with no lock held, then inserted if still absent. Two threads missing the
/// same country may both build; the first insert wins and both get that
/// instance, so at most one calendar per country is ever retained.
pub struct CalendarCache {
    calendars: RwLock<HashMap<String, Arc<dyn HolidayCalendar>>>,
    prime_years: RangeInclusive<i32>
}

impl CalendarCache {
    /// `prime_years` is materialized on every newly built calendar.
    pub fn new(prime_years: RangeInclusive<i32>) -> CalendarCache {
        CalendarCache {
            calendars: RwLock::new(HashMap::new()),
            prime_years
        }
    }

    /// Does not validate `country_code`; the oracle's `UnsupportedCountry`
    /// is returned as is and nothing is cached for it.
    pub fn get_or_build(
        &self,
        oracle: &dyn HolidayOracle,
        country_code: &str,
    ) -> Result<Arc<dyn HolidayCalendar>, HolidayError> {
        if let Some(calendar) = self.calendars
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(country_code) {
            return Ok(Arc::clone(calendar));
        }

        let calendar = oracle.build_calendar(country_code)?;
        calendar.prime(self.prime_years.clone());
        debug!(country = country_code, years = ?self.prime_years, "cached new holiday calendar");

        let mut calendars = self.calendars
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Arc::clone(calendars.entry(country_code.to_owned()).or_insert(calendar)))
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.calendars
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.calendars
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
