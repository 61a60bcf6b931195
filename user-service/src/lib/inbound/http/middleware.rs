use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Resolved identity placed in request extensions once a bearer token has been
/// verified and its subject found in the directory.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Session resolver: maps an inbound bearer token to a user record, or rejects.
///
/// A request moves to exactly one of two terminal states. Authenticated: the
/// token verifies and its subject still exists in the directory; the resolved
/// user rides along in request extensions. Rejected: anything else, including
/// a valid token whose account has since been deleted. Every rejection uses
/// the same response so the caller cannot tell which check failed.
pub async fn authenticate<US: UserServicePort>(
    State(state): State<AppState<US>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let subject = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::Unauthorized.into_response()
    })?;

    let email = EmailAddress::new(subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a usable email");
        ApiError::Unauthorized.into_response()
    })?;

    // Stale-token check: the account may have been deleted after issuance
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token subject no longer resolves to a user");
            ApiError::Unauthorized.into_response()
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized.into_response())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized.into_response())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized.into_response())
}
