use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::engine::calendarcache::CalendarCache;
use crate::engine::country::Country;
use crate::engine::countrycatalog::{CountryCatalog, CountryReference};
use crate::engine::holiday::Holiday;
use crate::manager::managererror::ManagerError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayerror::HolidayError;
use crate::time::calendar::holidayoracle::{HolidayOracle, RuleBasedOracle};
use crate::time::daterange::DateRange;

/// Answers holiday questions for the countries of its catalog.
///
/// Built once at startup and shared; every method takes `&self` and is safe
/// to call from many threads at once.
pub struct HolidayEngine {
    oracle: Arc<dyn HolidayOracle>,
    catalog: CountryCatalog,
    cache: CalendarCache
}

impl HolidayEngine {
    pub fn new(
        oracle: Arc<dyn HolidayOracle>,
        reference: &CountryReference,
        prime_years: RangeInclusive<i32>,
    ) -> HolidayEngine {
        let catalog = CountryCatalog::new(&oracle.supported_countries(), reference);
        HolidayEngine {
            oracle,
            catalog,
            cache: CalendarCache::new(prime_years)
        }
    }

    /// Engine over the rule and country data shipped with the crate.
    pub fn bundled(prime_years: RangeInclusive<i32>) -> Result<HolidayEngine, ManagerError> {
        let oracle = Arc::new(RuleBasedOracle::bundled()?);
        let reference = CountryReference::bundled()?;
        Ok(HolidayEngine::new(oracle, &reference, prime_years))
    }

    pub fn cache(&self) -> &CalendarCache {
        &self.cache
    }

    fn calendar(&self, country_code: &str) -> Result<Arc<dyn HolidayCalendar>, HolidayError> {
        self.cache.get_or_build(&*self.oracle, country_code)
    }

    pub fn is_holiday(&self, country_code: &str, date: NaiveDate) -> Result<bool, HolidayError> {
        Ok(self.calendar(country_code)?.is_holiday(date))
    }

    /// The holiday's name, or an empty string when `date` is not a holiday.
    pub fn get_holiday_name(
        &self,
        country_code: &str,
        date: NaiveDate,
    ) -> Result<String, HolidayError> {
        Ok(self.calendar(country_code)?.get(date).unwrap_or_default())
    }

    /// Holidays with `start <= date <= end`, ascending by date. A reversed
    /// range is not an error; it simply contains no dates.
    pub fn get_upcoming_holidays(
        &self,
        country_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Holiday>, HolidayError> {
        let calendar = self.calendar(country_code)?;
        let mut holidays: Vec<(NaiveDate, String)> =
            calendar.holidays_between(&DateRange::new(start, end));
        holidays.sort_by_key(|(d, _)| *d);

        Ok(holidays
            .into_iter()
            .map(|(date, holiday_name)| Holiday::new(holiday_name, date, country_code.to_owned()))
            .collect())
    }

    pub fn get_supported_countries(&self) -> Vec<Country> {
        self.catalog.countries().to_vec()
    }

    pub fn is_supported(&self, country_code: &str) -> bool {
        self.catalog.contains(country_code)
    }
}
