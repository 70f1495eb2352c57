use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::comment::errors::CommentError;
use crate::user::errors::UserError;

pub mod list_comments;
pub mod login;
pub mod post_comment;
pub mod signup;

/// Successful API response: `{name: "Success", message?, data}` with the
/// given status code.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data, None)))
    }

    pub fn with_message(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody::new(data, Some(message.to_string()))),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T, message: Option<String>) -> Self {
        Self {
            name: "Success",
            message,
            data,
        }
    }
}

/// Named error detail carried by every API error.
///
/// The name is a stable machine-readable discriminator (`InvalidEmail`,
/// `AlreadyRegistered`, ...); the message is human-readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub name: &'static str,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

/// API error, serialized as `{status, name, message}` with the matching
/// HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(ErrorDetail),
    Unauthorized(ErrorDetail),
    NotFound(ErrorDetail),
    UnprocessableEntity(ErrorDetail),
    InternalServerError(ErrorDetail),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(ErrorDetail::new("InternalError", e.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(d)
            | ApiError::Unauthorized(d)
            | ApiError::NotFound(d)
            | ApiError::UnprocessableEntity(d)
            | ApiError::InternalServerError(d) => d,
        };

        (
            status,
            Json(ApiErrorBody {
                status: status.as_u16(),
                name: detail.name,
                message: detail.message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub name: &'static str,
    pub message: String,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(ErrorDetail::new(
                "UserNotFound",
                "Provided e-mail is not registered yet.",
            )),
            UserError::AlreadyRegistered(_) => ApiError::BadRequest(ErrorDetail::new(
                "AlreadyRegistered",
                "Provided e-mail is already registered. Please log in.",
            )),
            UserError::InvalidEmail(_) => ApiError::UnprocessableEntity(ErrorDetail::new(
                "InvalidEmail",
                "Provided e-mail address is invalid.",
            )),
            UserError::InvalidPassword(_) => ApiError::UnprocessableEntity(ErrorDetail::new(
                "TooShortPassword",
                "Provided password is too short.",
            )),
            UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(ErrorDetail::new(
                "ValidationErrors",
                err.to_string(),
            )),
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(ErrorDetail::new("InternalError", err.to_string()))
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::MovieNotFound(_) => ApiError::UnprocessableEntity(ErrorDetail::new(
                "MovieNotFound",
                "Movie not found.",
            )),
            CommentError::InvalidContent(_) | CommentError::InvalidCommentId(_) => {
                ApiError::UnprocessableEntity(ErrorDetail::new(
                    "ValidationErrors",
                    err.to_string(),
                ))
            }
            CommentError::DatabaseError(_) | CommentError::Unknown(_) => {
                ApiError::InternalServerError(ErrorDetail::new("InternalError", err.to_string()))
            }
        }
    }
}
