use async_trait::async_trait;

use crate::domain::comment::models::CommentId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::movie::errors::MovieError;

/// Persistence operations for the movie aggregate.
///
/// Movies enter the system out of band in this scope; there is no HTTP
/// surface for them. `create` is the seam used by seeding and tests.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Persist new movie to storage.
    ///
    /// # Errors
    /// * `TitleAlreadyExists` - Movie title is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, movie: Movie) -> Result<Movie, MovieError>;

    /// Retrieve movie by identifier.
    ///
    /// # Returns
    /// Optional movie entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError>;

    /// Append a comment reference to the movie's comment list.
    ///
    /// # Returns
    /// True if the movie row existed and was updated, false otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn append_comment(
        &self,
        id: &MovieId,
        comment_id: &CommentId,
    ) -> Result<bool, MovieError>;
}
