use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentPage;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Concrete implementation of CommentServicePort.
///
/// Sequences the comment insert and the two reference-list appends; there
/// is no transaction spanning them (matching the storage model, where each
/// save is an independent document write).
pub struct CommentService<CR, MR, UR>
where
    CR: CommentRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    comment_repository: Arc<CR>,
    movie_repository: Arc<MR>,
    user_repository: Arc<UR>,
}

impl<CR, MR, UR> CommentService<CR, MR, UR>
where
    CR: CommentRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    /// Create a new comment service with injected dependencies.
    pub fn new(
        comment_repository: Arc<CR>,
        movie_repository: Arc<MR>,
        user_repository: Arc<UR>,
    ) -> Self {
        Self {
            comment_repository,
            movie_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<CR, MR, UR> CommentServicePort for CommentService<CR, MR, UR>
where
    CR: CommentRepository,
    MR: MovieRepository,
    UR: UserRepository,
{
    async fn post_comment(
        &self,
        creator: UserId,
        movie_id: MovieId,
        content: CommentContent,
    ) -> Result<Comment, CommentError> {
        // Verify movie exists before anything is written
        self.movie_repository
            .find_by_id(&movie_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?
            .ok_or(CommentError::MovieNotFound(movie_id.to_string()))?;

        let comment = Comment {
            id: CommentId::new(),
            creator,
            movie_id,
            content,
            created_at: Utc::now(),
        };

        let saved_comment = self.comment_repository.create(comment).await?;

        // Two separate saves, movie first; no transaction spans them
        let movie_appended = self
            .movie_repository
            .append_comment(&movie_id, &saved_comment.id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if !movie_appended {
            // Movie row vanished between the existence check and the append
            tracing::warn!(
                movie_id = %movie_id,
                comment_id = %saved_comment.id,
                "Movie no longer exists, reference not recorded"
            );
        }

        let appended = self
            .user_repository
            .append_comment(&creator, &saved_comment.id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if !appended {
            // Missing creator row is tolerated; the comment itself stands
            tracing::warn!(
                user_id = %creator,
                comment_id = %saved_comment.id,
                "Comment creator no longer exists, reference not recorded"
            );
        }

        tracing::debug!(
            comment_id = %saved_comment.id,
            movie_id = %saved_comment.movie_id,
            "Comment posted"
        );

        Ok(saved_comment)
    }

    async fn list_comments(&self, page: i64, per_page: i64) -> Result<CommentPage, CommentError> {
        // Negative offsets are impossible: callers clamp page/per_page to >= 1
        let offset = (page - 1) * per_page;

        let total = self.comment_repository.count().await?;
        let comments = self.comment_repository.list_page(offset, per_page).await?;

        Ok(CommentPage { total, comments })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::comment::errors::CommentContentError;
    use crate::domain::comment::models::CommentView;
    use crate::domain::movie::errors::MovieError;
    use crate::domain::movie::models::Movie;
    use crate::domain::movie::models::MovieDetails;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn count(&self) -> Result<i64, CommentError>;
            async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<CommentView>, CommentError>;
        }
    }

    mock! {
        pub TestMovieRepository {}

        #[async_trait]
        impl MovieRepository for TestMovieRepository {
            async fn create(&self, movie: Movie) -> Result<Movie, MovieError>;
            async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, MovieError>;
            async fn append_comment(&self, id: &MovieId, comment_id: &CommentId) -> Result<bool, MovieError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn append_comment(&self, id: &UserId, comment_id: &CommentId) -> Result<bool, UserError>;
        }
    }

    fn some_movie(id: MovieId) -> Movie {
        Movie {
            id,
            title: "The Matrix".to_string(),
            details: MovieDetails::default(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_post_comment_success() {
        let mut comment_repository = MockTestCommentRepository::new();
        let mut movie_repository = MockTestMovieRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let movie_id = MovieId::new();
        let user_id = UserId::new();

        movie_repository
            .expect_find_by_id()
            .withf(move |id| *id == movie_id)
            .times(1)
            .returning(move |id| Ok(Some(some_movie(*id))));

        comment_repository
            .expect_create()
            .withf(move |comment| {
                comment.creator == user_id
                    && comment.movie_id == movie_id
                    && comment.content.as_str() == "Loved it"
            })
            .times(1)
            .returning(|comment| Ok(comment));

        movie_repository
            .expect_append_comment()
            .withf(move |id, _| *id == movie_id)
            .times(1)
            .returning(|_, _| Ok(true));

        user_repository
            .expect_append_comment()
            .withf(move |id, _| *id == user_id)
            .times(1)
            .returning(|_, _| Ok(true));

        let service = CommentService::new(
            Arc::new(comment_repository),
            Arc::new(movie_repository),
            Arc::new(user_repository),
        );

        let content = CommentContent::new("Loved it".to_string()).unwrap();
        let result = service.post_comment(user_id, movie_id, content).await;

        assert!(result.is_ok());
        let comment = result.unwrap();
        assert_eq!(comment.creator, user_id);
        assert_eq!(comment.movie_id, movie_id);
    }

    #[tokio::test]
    async fn test_post_comment_movie_not_found_creates_nothing() {
        let mut comment_repository = MockTestCommentRepository::new();
        let mut movie_repository = MockTestMovieRepository::new();
        let user_repository = MockTestUserRepository::new();

        movie_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        // No comment row may be written when the movie is missing
        comment_repository.expect_create().times(0);
        movie_repository.expect_append_comment().times(0);

        let service = CommentService::new(
            Arc::new(comment_repository),
            Arc::new(movie_repository),
            Arc::new(user_repository),
        );

        let content = CommentContent::new("Loved it".to_string()).unwrap();
        let result = service
            .post_comment(UserId::new(), MovieId::new(), content)
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CommentError::MovieNotFound(_)));
    }

    #[tokio::test]
    async fn test_post_comment_missing_creator_tolerated() {
        let mut comment_repository = MockTestCommentRepository::new();
        let mut movie_repository = MockTestMovieRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        movie_repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(some_movie(*id))));

        comment_repository
            .expect_create()
            .times(1)
            .returning(|comment| Ok(comment));

        movie_repository
            .expect_append_comment()
            .times(1)
            .returning(|_, _| Ok(true));

        // Creator row vanished between authentication and the append
        user_repository
            .expect_append_comment()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = CommentService::new(
            Arc::new(comment_repository),
            Arc::new(movie_repository),
            Arc::new(user_repository),
        );

        let content = CommentContent::new("Loved it".to_string()).unwrap();
        let result = service
            .post_comment(UserId::new(), MovieId::new(), content)
            .await;

        // The comment still succeeds
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_post_comment_missing_movie_row_tolerated() {
        let mut comment_repository = MockTestCommentRepository::new();
        let mut movie_repository = MockTestMovieRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        movie_repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(some_movie(*id))));

        comment_repository
            .expect_create()
            .times(1)
            .returning(|comment| Ok(comment));

        // Movie row vanished between the existence check and the append
        movie_repository
            .expect_append_comment()
            .times(1)
            .returning(|_, _| Ok(false));

        user_repository
            .expect_append_comment()
            .times(1)
            .returning(|_, _| Ok(true));

        let service = CommentService::new(
            Arc::new(comment_repository),
            Arc::new(movie_repository),
            Arc::new(user_repository),
        );

        let content = CommentContent::new("Loved it".to_string()).unwrap();
        let result = service
            .post_comment(UserId::new(), MovieId::new(), content)
            .await;

        // The comment still succeeds
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_comments_offset_and_total() {
        let mut comment_repository = MockTestCommentRepository::new();
        let movie_repository = MockTestMovieRepository::new();
        let user_repository = MockTestUserRepository::new();

        comment_repository.expect_count().times(1).returning(|| Ok(7));

        comment_repository
            .expect_list_page()
            .with(eq(4), eq(2)) // page 3, per_page 2 -> skip 4
            .times(1)
            .returning(|_, _| {
                Ok(vec![CommentView {
                    id: CommentId::new(),
                    content: CommentContent::new("nice".to_string()).unwrap(),
                    created_at: Utc::now(),
                    creator_id: UserId::new(),
                    creator_email: "a@b.com".to_string(),
                    movie_id: MovieId::new(),
                    movie_title: "The Matrix".to_string(),
                }])
            });

        let service = CommentService::new(
            Arc::new(comment_repository),
            Arc::new(movie_repository),
            Arc::new(user_repository),
        );

        let page = service.list_comments(3, 2).await.unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.comments.len(), 1);
        assert_eq!(page.comments[0].creator_email, "a@b.com");
    }

    #[test]
    fn test_comment_content_still_validates() {
        // Guard that the value object wired through the service rejects junk
        assert!(matches!(
            CommentContent::new(String::new()),
            Err(CommentContentError::Empty)
        ));
    }
}
