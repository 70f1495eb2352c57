use async_trait::async_trait;

use crate::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentPage;
use crate::domain::comment::models::CommentView;
use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Post a comment on a movie.
    ///
    /// Creates the comment, then appends its id to the movie's and the
    /// creator's reference lists as two separate saves.
    ///
    /// # Arguments
    /// * `creator` - Authenticated user posting the comment
    /// * `movie_id` - Target movie ID
    /// * `content` - Validated comment content
    ///
    /// # Returns
    /// Created comment entity
    ///
    /// # Errors
    /// * `MovieNotFound` - Movie does not exist (no comment is created)
    /// * `DatabaseError` - Database operation failed
    async fn post_comment(
        &self,
        creator: UserId,
        movie_id: MovieId,
        content: CommentContent,
    ) -> Result<Comment, CommentError>;

    /// Retrieve one page of comments plus the total count.
    ///
    /// Comments come back in insertion order, each populated with the
    /// creator's email and the movie's title.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self, page: i64, per_page: i64) -> Result<CommentPage, CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment entity.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// Count all comments in the collection.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn count(&self) -> Result<i64, CommentError>;

    /// Retrieve a page of comments joined with creator email and movie
    /// title, in insertion order.
    ///
    /// # Arguments
    /// * `offset` - Number of comments to skip
    /// * `limit` - Maximum number of comments to return
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<CommentView>, CommentError>;
}
