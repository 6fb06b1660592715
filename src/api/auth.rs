//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::user::SessionBarber, services::auth::LoginOutcome};

use super::AuthenticatedBarber;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result; failures are reported in the body with `success = false`
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barber: Option<SessionBarber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Log a barber in
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login result", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let outcome = state.services.auth.login(&request.username, &request.password).await?;

    let response = match outcome {
        LoginOutcome::Authenticated { token, barber } => LoginResponse {
            success: true,
            token: Some(token),
            token_type: Some("Bearer".to_string()),
            barber: Some(barber),
            error: None,
        },
        LoginOutcome::Rejected(reason) => LoginResponse {
            success: false,
            token: None,
            token_type: None,
            barber: None,
            error: Some(reason.to_string()),
        },
    };
    Ok(Json(response))
}

/// Current barber
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged-in barber", body = SessionBarber),
        (status = 401, description = "Missing or invalid session", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(AuthenticatedBarber(claims): AuthenticatedBarber) -> Json<SessionBarber> {
    Json(claims.barber())
}

/// Log out. Sessions are stateless tokens, so the client just drops its token.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = LogoutResponse)
    )
)]
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true })
}
