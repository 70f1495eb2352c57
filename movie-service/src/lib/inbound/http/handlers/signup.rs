use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::ErrorDetail;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    state
        .user_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| {
            ApiSuccess::with_message(
                StatusCode::CREATED,
                "User created successfully.",
                SignupResponseData {
                    id: user.id.to_string(),
                },
            )
        })
}

/// HTTP request body for signup (raw JSON)
///
/// Absent fields deserialize to empty strings so they hit the same
/// missing-data check as empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct SignupRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Email or password is missing.")]
    MissingAuthData,

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ParseSignupRequestError::MissingAuthData);
        }
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(SignupCommand::new(email, password))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        match err {
            ParseSignupRequestError::MissingAuthData => {
                ApiError::UnprocessableEntity(ErrorDetail::new(
                    "MissingAuthData",
                    "Email or password is missing.",
                ))
            }
            ParseSignupRequestError::Email(_) => ApiError::UnprocessableEntity(ErrorDetail::new(
                "InvalidEmail",
                "Provided e-mail address is invalid.",
            )),
            ParseSignupRequestError::Password(_) => {
                ApiError::UnprocessableEntity(ErrorDetail::new(
                    "TooShortPassword",
                    "Provided password is too short.",
                ))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
}
