use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::api::apierror::ApiError;
use crate::api::router::AppState;
use crate::api::viewmodels::{
    CountryResponse, HolidayBasePayload, HolidayResponse, IsHolidayResponse,
    UpcomingHolidaysPayload,
};
use crate::engine::holidayengine::HolidayEngine;

pub const MAX_ABBREVIATION_LENGTH: usize = 2;

/// Longest accepted upcoming-holidays query. Every year a query touches stays
/// expanded in the cached calendar.
pub const MAX_RANGE_YEARS: usize = 5;
const MAX_RANGE_DAYS: usize = MAX_RANGE_YEARS * 366;

pub fn holiday_router() -> Router<AppState> {
    Router::new()
        .route("/is-it-a-holiday", post(is_it_a_holiday))
        .route("/supported-countries", get(supported_countries))
        .route("/upcoming-holidays", post(upcoming_holidays))
}

/// Length is checked before catalog membership, so `"USA"` is a 422 while
/// `"ZZ"` is a 501.
pub fn validate_country_abbreviation(
    engine: &HolidayEngine,
    abbreviation: &str,
) -> Result<(), ApiError> {
    if abbreviation.chars().count() > MAX_ABBREVIATION_LENGTH {
        return Err(ApiError::UnprocessableEntity(
            "Country abbreviation should be no more than two characters.".to_owned(),
        ));
    }
    if !engine.is_supported(abbreviation) {
        return Err(ApiError::not_implemented_country(abbreviation));
    }
    Ok(())
}

pub async fn is_it_a_holiday(
    State(state): State<AppState>,
    Json(payload): Json<HolidayBasePayload>,
) -> Result<Json<IsHolidayResponse>, ApiError> {
    validate_country_abbreviation(&state.engine, &payload.country_abbreviation)?;

    let holiday_name = state.engine.get_holiday_name(&payload.country_abbreviation, payload.date)?;
    let is_holiday = state.engine.is_holiday(&payload.country_abbreviation, payload.date)?;
    Ok(Json(IsHolidayResponse { holiday_name, is_holiday }))
}

pub async fn supported_countries(State(state): State<AppState>) -> Json<Vec<CountryResponse>> {
    Json(state.engine.get_supported_countries().iter().map(CountryResponse::from).collect())
}

pub async fn upcoming_holidays(
    State(state): State<AppState>,
    Json(payload): Json<UpcomingHolidaysPayload>,
) -> Result<Json<Vec<HolidayResponse>>, ApiError> {
    validate_country_abbreviation(&state.engine, &payload.country_abbreviation)?;

    let range = payload.date_range_from_today();
    if range.is_reversed() {
        return Err(ApiError::UnprocessableEntity("End date cannot exceed start date.".to_owned()));
    }
    if range.len() > MAX_RANGE_DAYS {
        return Err(ApiError::UnprocessableEntity(format!(
            "Date range cannot exceed {MAX_RANGE_YEARS} years."
        )));
    }
    debug!(
        country = %payload.country_abbreviation,
        start = %range.start_date(),
        end = %range.end_date(),
        "upcoming holidays"
    );

    let holidays = state.engine.get_upcoming_holidays(
        &payload.country_abbreviation,
        range.start_date(),
        range.end_date(),
    )?;
    Ok(Json(holidays.into_iter().map(HolidayResponse::from).collect()))
}
