use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ErrorDetail;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::UnprocessableEntity(ErrorDetail::new(
            "MissingAuthData",
            "Email or password is missing.",
        )));
    }

    // Parse and validate email
    let email = EmailAddress::new(body.email).map_err(|_| {
        ApiError::UnprocessableEntity(ErrorDetail::new("InvalidEmail", "Email is invalid."))
    })?;

    // Get user from database; a miss is reported as such, not masked
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::NotFound(ErrorDetail::new(
                "UserNotFound",
                "Provided e-mail is not registered yet.",
            )),
            _ => ApiError::from(e),
        })?;

    // Verify password and generate a token with fixed 2-day expiry
    let result = state
        .authenticator
        .authenticate(
            &body.password,
            &user.password_hash,
            user.id,
            state.jwt_expiration_seconds,
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => ApiError::Unauthorized(
                ErrorDetail::new("PasswordMismatch", "Provided password is incorrect."),
            ),
            auth::AuthenticationError::PasswordError(err) => ApiError::InternalServerError(
                ErrorDetail::new(
                    "InternalError",
                    format!("Password verification failed: {}", err),
                ),
            ),
            auth::AuthenticationError::JwtError(err) => ApiError::InternalServerError(
                ErrorDetail::new("InternalError", format!("Token generation failed: {}", err)),
            ),
        })?;

    Ok(ApiSuccess::with_message(
        StatusCode::OK,
        "User authenticated successfully.",
        LoginResponseData {
            token: result.access_token,
            expires_at: result.expires_at,
        },
    ))
}

/// Absent fields deserialize to empty strings so they hit the same
/// missing-data check as empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: i64,
}
