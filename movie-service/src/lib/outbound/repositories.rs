pub mod comment;
pub mod movie;
pub mod user;

pub use comment::PostgresCommentRepository;
pub use movie::PostgresMovieRepository;
pub use user::PostgresUserRepository;
