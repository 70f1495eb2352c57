use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ErrorDetail;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::movie::models::MovieId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn post_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<PostCommentRequestBody>,
) -> Result<ApiSuccess<CommentResponseData>, ApiError> {
    let movie_id = MovieId::from_string(&body.movie_id).map_err(|_| validation_error())?;
    let content = CommentContent::new(body.content).map_err(|_| validation_error())?;

    state
        .comment_service
        .post_comment(caller.user_id, movie_id, content)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

fn validation_error() -> ApiError {
    ApiError::UnprocessableEntity(ErrorDetail::new(
        "ValidationErrors",
        "Validation errors occurred.",
    ))
}

/// HTTP request body for posting a comment (raw JSON)
///
/// Absent fields deserialize to empty strings and fail validation like
/// any other malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PostCommentRequestBody {
    content: String,
    movie_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseData {
    pub id: String,
    pub creator: String,
    pub movie_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponseData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            creator: comment.creator.to_string(),
            movie_id: comment.movie_id.to_string(),
            content: comment.content.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::models::CommentId;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_request_body_wire_names() {
        let body: PostCommentRequestBody = serde_json::from_str(
            r#"{"content": "great", "movieId": "8f14e45f-ceea-4e8f-b0d4-91f1b07a1e55"}"#,
        )
        .unwrap();
        assert_eq!(body.content, "great");
        assert!(MovieId::from_string(&body.movie_id).is_ok());
    }

    #[test]
    fn test_absent_fields_fail_validation() {
        // A body without movieId at all still reaches the ID check
        let body: PostCommentRequestBody =
            serde_json::from_str(r#"{"content": "great"}"#).unwrap();
        assert!(body.movie_id.is_empty());
        assert!(MovieId::from_string(&body.movie_id).is_err());
    }

    #[test]
    fn test_response_data_from_comment() {
        let comment = Comment {
            id: CommentId::new(),
            creator: UserId::new(),
            movie_id: MovieId::new(),
            content: CommentContent::new("great".to_string()).unwrap(),
            created_at: Utc::now(),
        };

        let data = CommentResponseData::from(&comment);
        assert_eq!(data.id, comment.id.to_string());
        assert_eq!(data.content, "great");

        let json = serde_json::to_value(&data).unwrap();
        assert!(json["movieId"].is_string());
        assert!(json["createdAt"].is_string());
    }
}
