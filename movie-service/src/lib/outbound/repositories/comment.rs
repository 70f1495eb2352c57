use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentView;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Listing row: a comment joined with its creator and movie.
#[derive(sqlx::FromRow)]
struct CommentViewRow {
    id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    creator_id: Uuid,
    creator_email: String,
    movie_id: Uuid,
    movie_title: String,
}

impl CommentViewRow {
    fn into_view(self) -> Result<CommentView, CommentError> {
        Ok(CommentView {
            id: CommentId(self.id),
            content: CommentContent::new(self.content)?,
            created_at: self.created_at,
            creator_id: UserId(self.creator_id),
            creator_email: self.creator_email,
            movie_id: MovieId(self.movie_id),
            movie_title: self.movie_title,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, creator, movie_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.creator.0)
        .bind(comment.movie_id.0)
        .bind(comment.content.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(comment)
    }

    async fn count(&self) -> Result<i64, CommentError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<CommentView>, CommentError> {
        // Insertion order, ties broken by id for a stable page boundary
        let rows = sqlx::query_as::<_, CommentViewRow>(
            r#"
            SELECT c.id, c.content, c.created_at,
                   u.id AS creator_id, u.email AS creator_email,
                   m.id AS movie_id, m.title AS movie_title
            FROM comments c
            JOIN users u ON u.id = c.creator
            JOIN movies m ON m.id = c.movie_id
            ORDER BY c.created_at, c.id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CommentViewRow::into_view).collect()
    }
}
