use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::account::identityprovider::SessionToken;
use crate::engine::country::Country;
use crate::engine::holiday::Holiday;
use crate::time::daterange::DateRange;

/// Span of an upcoming-holidays query when no end date is given.
pub const DEFAULT_UPCOMING_WEEKS: i64 = 26;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayBasePayload {
    pub country_abbreviation: String,
    #[serde(default = "today")]
    pub date: NaiveDate
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IsHolidayResponse {
    pub holiday_name: String,
    pub is_holiday: bool
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub country_abbreviation: String,
    pub name: String,
    pub flag: String
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        CountryResponse {
            country_abbreviation: country.abbreviation().to_owned(),
            name: country.name().to_owned(),
            flag: country.flag().to_owned()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingHolidaysPayload {
    pub country_abbreviation: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>
}

impl UpcomingHolidaysPayload {
    /// Missing start is `today`; missing end is 26 weeks after the start.
    pub fn date_range(&self, today: NaiveDate) -> DateRange {
        let start_date = self.start_date.unwrap_or(today);
        let end_date = self
            .end_date
            .or_else(|| start_date.checked_add_signed(TimeDelta::weeks(DEFAULT_UPCOMING_WEEKS)))
            .unwrap_or(NaiveDate::MAX);
        DateRange::new(start_date, end_date)
    }

    pub fn date_range_from_today(&self) -> DateRange {
        self.date_range(today())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HolidayResponse {
    pub country_abbreviation: String,
    pub date: NaiveDate,
    pub holiday_name: String
}

impl From<Holiday> for HolidayResponse {
    fn from(holiday: Holiday) -> Self {
        HolidayResponse {
            country_abbreviation: holiday.country_abbreviation,
            date: holiday.date,
            holiday_name: holiday.holiday_name
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String
}

/// OAuth2 password-grant form, as posted by API explorers.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub expires_in: i64,
    pub id_token: String,
    pub access_token: String
}

impl From<SessionToken> for LoginResponse {
    fn from(session: SessionToken) -> Self {
        LoginResponse {
            email: session.email,
            expires_in: session.expires_in,
            id_token: session.id_token,
            access_token: session.access_token
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenResponse {
    pub access_token: String,
    pub id_token: String,
    pub token_type: String
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponse {
    pub id_token: String,
    pub email: String
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn upcoming_payload_defaults() {
        let payload: UpcomingHolidaysPayload = serde_json::from_str(r#"{"countryAbbreviation": "US"}"#).unwrap();
        let range = payload.date_range(ymd(2022, 9, 1));
        assert_eq!(range.start_date(), ymd(2022, 9, 1));
        assert_eq!(range.end_date(), ymd(2023, 3, 2));

        let payload: UpcomingHolidaysPayload =
            serde_json::from_str(r#"{"countryAbbreviation": "US", "startDate": "2023-01-01"}"#).unwrap();
        assert_eq!(payload.date_range(ymd(2022, 9, 1)).end_date(), ymd(2023, 7, 2));
    }

    #[test]
    fn holiday_payload_defaults_to_today() {
        let payload: HolidayBasePayload = serde_json::from_str(r#"{"countryAbbreviation": "GB"}"#).unwrap();
        assert_eq!(payload.date, today());
    }

    #[test]
    fn responses_use_camel_case() {
        let body = serde_json::to_value(IsHolidayResponse {
            holiday_name: "Labor Day".to_owned(),
            is_holiday: true
        }).unwrap();
        assert_eq!(body, serde_json::json!({"holidayName": "Labor Day", "isHoliday": true}));

        let body = serde_json::to_value(HolidayResponse::from(Holiday::new(
            "Independence Day".to_owned(),
            ymd(2022, 7, 4),
            "US".to_owned(),
        ))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"countryAbbreviation": "US", "date": "2022-07-04", "holidayName": "Independence Day"})
        );
    }
}
