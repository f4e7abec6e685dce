use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::account::accounterror::AccountError;
use crate::time::calendar::holidayerror::HolidayError;

/// Errors surfaced to HTTP clients as `{"detail": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    NotImplemented(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String)
}

impl ApiError {
    pub fn not_implemented_country(country_abbreviation: &str) -> ApiError {
        ApiError::NotImplemented(format!("'{country_abbreviation}' has not been implemented."))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<HolidayError> for ApiError {
    fn from(e: HolidayError) -> Self {
        match e {
            HolidayError::UnsupportedCountry(code) => ApiError::not_implemented_country(&code),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::WeakPassword | AccountError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(e.to_string())
            }
            AccountError::UserAlreadyExists(_) => ApiError::Conflict(e.to_string()),
            AccountError::AuthenticationFailed => ApiError::Forbidden(e.to_string()),
            AccountError::InvalidToken => ApiError::Unauthorized(e.to_string()),
            AccountError::CredentialsNotFound { .. }
            | AccountError::CredentialsIO(_)
            | AccountError::CredentialsParse(_) => {
                error!(error = %e, "credential failure while serving a request");
                ApiError::Internal("Internal server error.".to_owned())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_country_is_not_implemented() {
        let e = ApiError::from(HolidayError::UnsupportedCountry("ZZ".to_owned()));
        assert_eq!(e.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(e.to_string(), "'ZZ' has not been implemented.");
    }

    #[test]
    fn account_errors_map_to_statuses() {
        assert_eq!(ApiError::from(AccountError::WeakPassword).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::from(AccountError::UserAlreadyExists("a@b.co".to_owned())).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(AccountError::InvalidToken).status(), StatusCode::UNAUTHORIZED);

        let forbidden = ApiError::from(AccountError::AuthenticationFailed);
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(forbidden.to_string(), "Authentication error.");
    }
}
