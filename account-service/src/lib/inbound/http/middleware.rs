use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated subject in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub subject: UserId,
}

/// Middleware that verifies bearer tokens and attaches the subject to the request.
///
/// Requests without a `Bearer <token>` authorization header are rejected with
/// 401; requests whose token fails verification are rejected with 403. Every
/// request is verified from scratch.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims = state.token_signer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::Forbidden("Invalid token".to_string())
    })?;

    req.extensions_mut().insert(AuthContext {
        subject: UserId(claims.sub),
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Access denied".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Access denied".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Access denied".to_string()))
}
