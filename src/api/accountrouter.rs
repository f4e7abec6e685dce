use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    routing::{get, post},
    Form, Json, Router,
};

use crate::api::apierror::ApiError;
use crate::api::router::AppState;
use crate::api::viewmodels::{
    CreateTokenResponse, CreateUserPayload, LoginPayload, LoginResponse, TokenForm,
    ValidateTokenResponse,
};

pub fn account_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/login", post(login))
        .route("/token", post(create_token))
        .route("/validate-oauth-token", get(validate_oauth_token))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<(), ApiError> {
    state.accounts.create_user(&payload.email, &payload.password)?;
    Ok(())
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state.accounts.login(&payload.email, &payload.password)?;
    Ok(Json(LoginResponse::from(session)))
}

pub async fn create_token(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Json<CreateTokenResponse>, ApiError> {
    let session = state.accounts.login(&form.username, &form.password)?;
    Ok(Json(CreateTokenResponse {
        access_token: session.access_token,
        id_token: session.id_token,
        token_type: "bearer".to_owned()
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token.trim()).filter(|t| !t.is_empty())
}

pub async fn validate_oauth_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidateTokenResponse>, ApiError> {
    let id_token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_owned()))?;
    let email = state.accounts.validate_token(id_token)?;
    Ok(Json(ValidateTokenResponse { id_token: id_token.to_owned(), email }))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.123.def"));
        assert_eq!(bearer_token(&headers), Some("abc.123.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
