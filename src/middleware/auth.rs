use crate::{
    auth::{verify_jwt, CallerContext},
    error::{AppError, Result},
    state::AppState,
};
use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

pub const SESSION_COOKIE: &str = "access_token";

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("Bearer")
        .then(|| token.trim())
}

/// Tries the bearer header, then the session cookie. The first token that
/// verifies wins, so a stale header does not hide a valid cookie.
pub fn resolve_caller(headers: &HeaderMap, jar: &CookieJar, secret: &str) -> Result<CallerContext> {
    let cookie = jar.get(SESSION_COOKIE).map(|c| c.value());
    let mut rejection = AppError::Unauthorized("Invalid credentials".to_string());

    for token in [bearer_token(headers), cookie].into_iter().flatten() {
        match verify_jwt(token, secret).and_then(CallerContext::from_claims) {
            Ok(caller) => return Ok(caller),
            Err(e) => rejection = e,
        }
    }

    Err(rejection)
}

/// API routes: no session means a 401 JSON body.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    let caller = resolve_caller(req.headers(), &jar, &state.config.jwt_secret)?;
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

/// Page routes: no session sends the browser to the login page.
pub async fn page_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match resolve_caller(req.headers(), &jar, &state.config.jwt_secret) {
        Ok(caller) => {
            req.extensions_mut().insert(caller);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("Redirecting unauthenticated page request: {}", e);
            Redirect::to(&state.config.login_url).into_response()
        }
    }
}

// Extractor for the caller resolved by one of the middlewares above
pub struct Caller(pub CallerContext);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<CallerContext>()
            .cloned()
            .map(Caller)
            .ok_or(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
