use thiserror::Error;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CommentContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentContentError {
    #[error("Comment content is empty")]
    Empty,

    #[error("Comment content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid comment content: {0}")]
    InvalidContent(#[from] CommentContentError),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
