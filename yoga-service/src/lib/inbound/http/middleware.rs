use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::unauthorized;
use super::unauthorized::AUTHENTICATION_REQUIRED;
use crate::auth::models::Authentication;
use crate::auth::models::SecurityContext;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Per-request authenticator, run in front of every route.
///
/// Replaces whatever `SecurityContext` the request carried with a fresh one,
/// populated only when the bearer token is valid and its subject still
/// resolves to a user. Never rejects: protected routes decide through
/// [`require_authentication`].
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    req.extensions_mut().remove::<SecurityContext>();

    let context = resolve_context(&state, req.headers()).await;
    req.extensions_mut().insert(context);

    next.run(req).await
}

async fn resolve_context(state: &AppState, headers: &HeaderMap) -> SecurityContext {
    let Some(token) = bearer_token(headers) else {
        tracing::debug!("No bearer token, continuing unauthenticated");
        return SecurityContext::empty();
    };

    if !state.authenticator.validate_token(token) {
        tracing::debug!("Invalid bearer token, continuing unauthenticated");
        return SecurityContext::empty();
    }

    let username = match state.authenticator.subject_of(token) {
        Ok(username) => username,
        Err(e) => {
            tracing::warn!(error = %e, "Cannot read token subject");
            return SecurityContext::empty();
        }
    };

    match state.identity_loader.load_by_username(&username).await {
        Ok(principal) => {
            tracing::debug!(username = %username, "Request authenticated");
            SecurityContext::authenticated(Authentication::new(principal))
        }
        Err(e) => {
            tracing::warn!(username = %username, error = %e, "Cannot set user authentication");
            SecurityContext::empty()
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Gate for protected routes: lets the request through only when the
/// authenticator attached a principal.
pub async fn require_authentication(req: Request, next: Next) -> Response {
    let authenticated = req
        .extensions()
        .get::<SecurityContext>()
        .is_some_and(SecurityContext::is_authenticated);

    if !authenticated {
        return unauthorized::respond(req.uri().path(), Some(AUTHENTICATION_REQUIRED));
    }

    next.run(req).await
}
