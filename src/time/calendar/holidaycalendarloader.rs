use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use serde_json;

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::countrycalendar::CountryCalendar;
use crate::time::calendar::holidayrule::HolidayRule;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::weekdaybeforeholiday::WeekdayOnOrBeforeHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

// ─────────────────────────────────────────────────────────────────────────────
// Recurring holiday rules
// ─────────────────────────────────────────────────────────────────────────────

type RecurringHolidayResult = Result<Arc<dyn RecurringHoliday>, ManagerError>;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i64
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> RecurringHolidayResult {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(name: &str, json: serde_json::Value) -> RecurringHolidayResult {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(name, "month must be 1-12 and n must be 1-5"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(name: &str, json: serde_json::Value) -> RecurringHolidayResult {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(name, "month must be 1-12"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct MonthDayJsonProp {
    month: u32,
    day: u32,
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> RecurringHolidayResult {
    let json_prop: MonthDayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)
        .ok_or_else(|| ManagerError::invalid_rule(name, "no such day of the year"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct WeekdayOnOrBeforeHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday,
}

fn weekday_on_or_before_from_json(
    name: &str,
    json: serde_json::Value,
) -> RecurringHolidayResult {
    let json_prop: WeekdayOnOrBeforeHolidayJsonProp = parse_json_value(json)?;
    let holiday =
        WeekdayOnOrBeforeHoliday::new(json_prop.month, json_prop.day, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(name, "no such day of the year"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    WeekdayOnOrBefore
}

/// Fields shared by every rule regardless of its type.
#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    name: String,
    holiday_type: HolidayType,
    #[serde(default)]
    since: Option<i32>,
    #[serde(default)]
    until: Option<i32>,
    #[serde(default)]
    observed: HashMap<Weekday, WeekendAdjustment>,
    #[serde(default)]
    observed_shift_days: HashMap<Weekday, i64>
}

fn get_holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    let name = json_prop.name.as_str();

    let recurring_holiday = match json_prop.holiday_type {
        HolidayType::EasterRelated     => easter_related_holiday_from_json(json),
        HolidayType::FixedDate         => fixed_date_holiday_from_json(name, json),
        HolidayType::LastWeekday       => last_weekday_from_json(name, json),
        HolidayType::NthWeekday        => nth_weekday_from_json(name, json),
        HolidayType::WeekdayOnOrBefore => weekday_on_or_before_from_json(name, json)
    }?;

    let has_observed = !json_prop.observed.is_empty();
    let has_observed_shift_days = !json_prop.observed_shift_days.is_empty();
    let observance = match (has_observed, has_observed_shift_days) {
        (false, false) => WeekendAdjustmentRule::default(),
        (true, false)  => WeekendAdjustmentRule::new(&json_prop.observed)
            .ok_or_else(|| ManagerError::invalid_rule(name, "observed covers every weekday"))?,
        (false, true)  => WeekendAdjustmentRule::from_shift_days(&json_prop.observed_shift_days),
        (true, true)   => {
            return Err(ManagerError::invalid_rule(
                name,
                "set either observed or observed_shift_days, not both",
            ));
        }
    };

    if let (Some(since), Some(until)) = (json_prop.since, json_prop.until) {
        if until < since {
            return Err(ManagerError::invalid_rule(name, "until precedes since"));
        }
    }

    Ok(HolidayRule::new(json_prop.name.clone(), recurring_holiday)
        .with_observance(observance)
        .with_years(json_prop.since, json_prop.until))
}

// ─────────────────────────────────────────────────────────────────────────────
// Country calendars
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AdditionalHolidayJsonProp {
    date: NaiveDate,
    name: String
}

#[derive(Deserialize)]
struct CountryCalendarJsonProp {
    country_code: String,
    holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<AdditionalHolidayJsonProp>
}

/// Parsed rules for one country; every `build` yields a fresh calendar.
#[derive(Clone)]
pub struct CountryCalendarDefinition {
    country_code: String,
    rules: Vec<HolidayRule>,
    additional_holidays: Vec<(NaiveDate, String)>
}

impl CountryCalendarDefinition {
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn build(&self) -> CountryCalendar {
        CountryCalendar::new(
            self.country_code.clone(),
            self.rules.clone(),
            self.additional_holidays.clone()
        )
    }
}

fn get_country_calendar_from_json(
    json_value: serde_json::Value,
) -> Result<CountryCalendarDefinition, ManagerError> {
    let json_prop: CountryCalendarJsonProp = parse_json_value(json_value)?;
    let mut rules = Vec::with_capacity(json_prop.holidays.len());
    for holiday_json in json_prop.holidays {
        rules.push(get_holiday_rule_from_json(holiday_json)?);
    }

    Ok(CountryCalendarDefinition {
        country_code: json_prop.country_code,
        rules,
        additional_holidays: json_prop.additional_holidays
            .into_iter()
            .map(|h| (h.date, h.name))
            .collect()
    })
}

/// Parses a JSON array of country calendars, keeping dataset order.
pub fn load_country_calendar_definitions(
    json_str: &str,
) -> Result<Vec<CountryCalendarDefinition>, ManagerError> {
    let json_vec: Vec<serde_json::Value> = serde_json::from_str(json_str)?;
    let mut seen: HashSet<String> = HashSet::new();
    let mut definitions = Vec::with_capacity(json_vec.len());

    for json_value in json_vec {
        let definition = get_country_calendar_from_json(json_value)?;
        if !seen.insert(definition.country_code.clone()) {
            return Err(ManagerError::DuplicateCountry(definition.country_code));
        }
        definitions.push(definition);
    }

    Ok(definitions)
}
