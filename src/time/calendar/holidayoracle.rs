use std::sync::Arc;

use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarloader::{
    CountryCalendarDefinition,
    load_country_calendar_definitions
};
use crate::time::calendar::holidayerror::HolidayError;

const BUNDLED_HOLIDAY_RULES: &str = include_str!("../../../data/holidays.json");

/// Source of per-country holiday calendars.
pub trait HolidayOracle: Send + Sync {
    /// Country codes the oracle can build calendars for, in dataset order.
    fn supported_countries(&self) -> Vec<String>;

    /// Builds a new calendar. Fails with `UnsupportedCountry` for unknown codes.
    fn build_calendar(&self, country_code: &str) -> Result<Arc<dyn HolidayCalendar>, HolidayError>;
}

/// Oracle backed by rule definitions loaded from JSON.
pub struct RuleBasedOracle {
    definitions: Vec<CountryCalendarDefinition>
}

impl RuleBasedOracle {
    pub fn new(definitions: Vec<CountryCalendarDefinition>) -> RuleBasedOracle {
        RuleBasedOracle { definitions }
    }

    pub fn from_json(json_str: &str) -> Result<RuleBasedOracle, ManagerError> {
        Ok(RuleBasedOracle::new(load_country_calendar_definitions(json_str)?))
    }

    /// The rule set shipped with the crate.
    pub fn bundled() -> Result<RuleBasedOracle, ManagerError> {
        RuleBasedOracle::from_json(BUNDLED_HOLIDAY_RULES)
    }
}

impl HolidayOracle for RuleBasedOracle {
    fn supported_countries(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|definition| definition.country_code().to_owned())
            .collect()
    }

    fn build_calendar(&self, country_code: &str) -> Result<Arc<dyn HolidayCalendar>, HolidayError> {
        let definition = self.definitions
            .iter()
            .find(|definition| definition.country_code() == country_code)
            .ok_or_else(|| HolidayError::UnsupportedCountry(country_code.to_owned()))?;
        debug!(
            country = country_code,
            rules = definition.rules().len(),
            "building holiday calendar"
        );
        Ok(Arc::new(definition.build()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::daterange::DateRange;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bundled_rules_load() {
        let oracle = RuleBasedOracle::bundled().unwrap();
        let supported = oracle.supported_countries();
        for code in ["US", "GB", "MX"] {
            assert!(supported.iter().any(|c| c == code), "{code} missing");
        }
    }

    #[test]
    fn unknown_country_is_unsupported() {
        let oracle = RuleBasedOracle::bundled().unwrap();
        assert_eq!(
            oracle.build_calendar("ZZ").err(),
            Some(HolidayError::UnsupportedCountry("ZZ".to_owned()))
        );
    }

    #[test]
    fn united_states_federal_holidays_2022() {
        let oracle = RuleBasedOracle::bundled().unwrap();
        let calendar = oracle.build_calendar("US").unwrap();
        let holidays = calendar.holidays_between(&DateRange::new(ymd(2022, 1, 1), ymd(2022, 12, 31)));
        let expected = vec![
            (ymd(2022, 1, 1), "New Year's Day"),
            (ymd(2022, 1, 17), "Martin Luther King Jr. Day"),
            (ymd(2022, 2, 21), "Washington's Birthday"),
            (ymd(2022, 5, 30), "Memorial Day"),
            (ymd(2022, 6, 19), "Juneteenth National Independence Day"),
            (ymd(2022, 6, 20), "Juneteenth National Independence Day (Observed)"),
            (ymd(2022, 7, 4), "Independence Day"),
            (ymd(2022, 9, 5), "Labor Day"),
            (ymd(2022, 10, 10), "Columbus Day"),
            (ymd(2022, 11, 11), "Veterans Day"),
            (ymd(2022, 11, 24), "Thanksgiving"),
            (ymd(2022, 12, 25), "Christmas Day"),
            (ymd(2022, 12, 26), "Christmas Day (Observed)"),
        ];
        let actual: Vec<(NaiveDate, &str)> = holidays.iter().map(|(d, n)| (*d, n.as_str())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn united_kingdom_substitute_days() {
        let oracle = RuleBasedOracle::bundled().unwrap();
        let calendar = oracle.build_calendar("GB").unwrap();
        // Christmas 2022 is a Sunday and Boxing Day a Monday.
        assert_eq!(calendar.get(ymd(2022, 12, 26)).as_deref(), Some("Boxing Day"));
        assert_eq!(calendar.get(ymd(2022, 12, 27)).as_deref(), Some("Christmas Day (Observed)"));
        assert_eq!(calendar.get(ymd(2023, 5, 8)).as_deref(), Some("Coronation of Charles III"));
    }

    #[test]
    fn mexico_moved_its_holidays_to_mondays_in_2006() {
        let oracle = RuleBasedOracle::bundled().unwrap();
        let calendar = oracle.build_calendar("MX").unwrap();
        assert!(calendar.is_holiday(ymd(2005, 2, 5)));
        assert!(!calendar.is_holiday(ymd(2022, 2, 5)));
        assert_eq!(calendar.get(ymd(2022, 2, 7)).as_deref(), Some("Constitution Day"));
    }
}
