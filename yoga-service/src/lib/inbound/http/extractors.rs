use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;

use super::unauthorized;
use super::unauthorized::AUTHENTICATION_REQUIRED;
use crate::auth::models::Principal;
use crate::auth::models::SecurityContext;

/// The principal the request authenticator attached to this request.
///
/// Rejects with the 401 responder when the request is anonymous.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .and_then(SecurityContext::principal)
            .cloned()
            .map(CurrentPrincipal)
            .ok_or_else(|| unauthorized::respond(parts.uri.path(), Some(AUTHENTICATION_REQUIRED)))
    }
}
