use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::list_comments::list_comments;
use super::handlers::login::login;
use super::handlers::post_comment::post_comment;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::comment::service::CommentService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::comment::PostgresCommentRepository;
use crate::outbound::repositories::movie::PostgresMovieRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub comment_service: Arc<
        CommentService<PostgresCommentRepository, PostgresMovieRepository, PostgresUserRepository>,
    >,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_seconds: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    comment_service: Arc<
        CommentService<PostgresCommentRepository, PostgresMovieRepository, PostgresUserRepository>,
    >,
    authenticator: Arc<Authenticator>,
    jwt_expiration_seconds: i64,
) -> Router {
    let state = AppState {
        user_service,
        comment_service,
        authenticator,
        jwt_expiration_seconds,
    };

    // route_layer on a method router only wraps the methods registered
    // before it, so POST requires a bearer token while GET stays public
    let comment_routes = post(post_comment)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .get(list_comments);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/comments", comment_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
