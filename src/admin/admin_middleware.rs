use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    auth::HasRole,
    error::{AppError, Result},
    middleware::Caller,
    state::AppState,
};

/// Gate for admin-only routes. Must run after a session middleware has put
/// the caller into the request extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    Caller(caller): Caller,
    request: Request,
    next: Next,
) -> Result<Response> {
    if !caller.has_role(&state.config.admin_role) {
        tracing::warn!(user_id = %caller.user_id, path = %request.uri().path(), "Admin access denied");
        return Err(AppError::permission_denied());
    }

    Ok(next.run(request).await)
}
