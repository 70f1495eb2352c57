use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::models::CommentId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;
use crate::movie::errors::MovieError;

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    details: Json<MovieDetails>,
    comments: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl MovieRow {
    fn into_movie(self) -> Movie {
        Movie {
            id: MovieId(self.id),
            title: self.title,
            details: self.details.0,
            comments: self.comments.into_iter().map(CommentId).collect(),
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn create(&self, movie: Movie) -> Result<Movie, MovieError> {
        let comment_ids: Vec<Uuid> = movie.comments.iter().map(|c| c.0).collect();

        sqlx::query(
            r#"
            INSERT INTO movies (id, title, details, comments, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(movie.id.0)
        .bind(&movie.title)
        .bind(Json(&movie.details))
        .bind(&comment_ids)
        .bind(movie.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("movies_title_key")
                {
                    return MovieError::TitleAlreadyExists(movie.title.clone());
                }
            }
            MovieError::DatabaseError(e.to_string())
        })?;

        Ok(movie)
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, details, comments, created_at
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.map(MovieRow::into_movie))
    }

    async fn append_comment(
        &self,
        id: &MovieId,
        comment_id: &CommentId,
    ) -> Result<bool, MovieError> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET comments = array_append(comments, $2)
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(comment_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
