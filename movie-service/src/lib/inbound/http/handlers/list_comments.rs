use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::comment::models::CommentView;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    page: Option<i64>,
    per_page: Option<i64>,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<CommentListQuery>,
) -> Result<ApiSuccess<CommentListResponseData>, ApiError> {
    // Missing params fall back to page 1, two per page; values below 1 are clamped
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(2).max(1);

    state
        .comment_service
        .list_comments(page, per_page)
        .await
        .map_err(ApiError::from)
        .map(|page| {
            let comments = page.comments.iter().map(|c| c.into()).collect();
            ApiSuccess::new(
                StatusCode::OK,
                CommentListResponseData {
                    total: page.total,
                    comments,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentListResponseData {
    pub total: i64,
    pub comments: Vec<CommentListItem>,
}

/// One listed comment with its references populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListItem {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub creator: CreatorRef,
    pub movie: MovieRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorRef {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRef {
    pub id: String,
    pub title: String,
}

impl From<&CommentView> for CommentListItem {
    fn from(view: &CommentView) -> Self {
        Self {
            id: view.id.to_string(),
            content: view.content.as_str().to_string(),
            created_at: view.created_at,
            creator: CreatorRef {
                id: view.creator_id.to_string(),
                email: view.creator_email.clone(),
            },
            movie: MovieRef {
                id: view.movie_id.to_string(),
                title: view.movie_title.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::models::CommentContent;
    use crate::domain::comment::models::CommentId;
    use crate::domain::movie::models::MovieId;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_list_item_populates_references() {
        let view = CommentView {
            id: CommentId::new(),
            content: CommentContent::new("nice".to_string()).unwrap(),
            created_at: Utc::now(),
            creator_id: UserId::new(),
            creator_email: "a@b.com".to_string(),
            movie_id: MovieId::new(),
            movie_title: "The Matrix".to_string(),
        };

        let item = CommentListItem::from(&view);
        assert_eq!(item.creator.email, "a@b.com");
        assert_eq!(item.movie.title, "The Matrix");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["creator"]["email"], "a@b.com");
        assert_eq!(json["movie"]["title"], "The Matrix");
        assert!(json["createdAt"].is_string());
    }
}
