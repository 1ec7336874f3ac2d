use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::register::register;
use super::handlers::sessions::create_session::create_session;
use super::handlers::sessions::delete_session::delete_session;
use super::handlers::sessions::get_session::get_session;
use super::handlers::sessions::list_sessions::list_sessions;
use super::handlers::sessions::no_longer_participate::no_longer_participate;
use super::handlers::sessions::participate::participate;
use super::handlers::sessions::update_session::update_session;
use super::handlers::teachers::get_teacher::get_teacher;
use super::handlers::teachers::list_teachers::list_teachers;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::middleware::authenticate;
use super::middleware::require_authentication;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::IdentityLoader;
use crate::session::ports::SessionServicePort;
use crate::teacher::ports::TeacherServicePort;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub teacher_service: Arc<dyn TeacherServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub identity_loader: Arc<dyn IdentityLoader>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register));

    let protected_routes = Router::new()
        .route("/api/user/:id", get(get_user).delete(delete_user))
        .route("/api/teacher", get(list_teachers))
        .route("/api/teacher/:id", get(get_teacher))
        .route("/api/session", get(list_sessions).post(create_session))
        .route(
            "/api/session/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route(
            "/api/session/:id/participate/:user_id",
            post(participate).delete(no_longer_participate),
        )
        .route_layer(middleware::from_fn(require_authentication));

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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
