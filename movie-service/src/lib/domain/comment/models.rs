use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::comment::errors::CommentContentError;
use crate::comment::errors::CommentIdError;
use crate::domain::movie::models::MovieId;
use crate::domain::user::models::UserId;

/// Comment entity.
///
/// Created once per post; never mutated or deleted.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub creator: UserId,
    pub movie_id: MovieId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new random comment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a comment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment content value object with validation.
///
/// Ensures content is non-empty and within the 4000 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    const MAX_LENGTH: usize = 4000;

    /// Create a new validated comment content.
    ///
    /// # Errors
    /// * `Empty` - Content is empty string
    /// * `TooLong` - Content exceeds 4000 characters
    pub fn new(content: String) -> Result<Self, CommentContentError> {
        let length = content.len();
        if length == 0 {
            Err(CommentContentError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CommentContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(content))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A comment joined with its creator's email and its movie's title,
/// as returned by the listing query ("populated" references).
#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: CommentId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
    pub creator_id: UserId,
    pub creator_email: String,
    pub movie_id: MovieId,
    pub movie_title: String,
}

/// One page of comments plus the total collection count.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub total: i64,
    pub comments: Vec<CommentView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_content_valid() {
        let content = CommentContent::new("Great movie!".to_string());
        assert!(content.is_ok());
        assert_eq!(content.unwrap().as_str(), "Great movie!");
    }

    #[test]
    fn test_comment_content_empty() {
        assert!(matches!(
            CommentContent::new(String::new()),
            Err(CommentContentError::Empty)
        ));
    }

    #[test]
    fn test_comment_content_too_long() {
        let result = CommentContent::new("x".repeat(4001));
        assert!(matches!(
            result,
            Err(CommentContentError::TooLong { max: 4000, actual: 4001 })
        ));
    }
}
