//! Context resolver for extracting the caller identity from HTTP requests.

use accounts_auth::{AUTH_HEADER, AUTH_SCHEME, error::Error as AuthError, jwt::JwtKeys};
use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{
    auth_token::decode_token,
    ctx::{Ctx, CtxUser},
    prelude::*,
    state::ApiState,
};

fn bearer_token(headers: &HeaderMap) -> std::result::Result<&str, AuthError> {
    let value = headers
        .get(AUTH_HEADER)
        .ok_or(AuthError::TokenMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case(AUTH_SCHEME) || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Derives the request context from the `Authorization` header.
///
/// Never fails: a missing, malformed, forged or expired token yields
/// [`Ctx::Anonymous`] with the reason.
pub fn resolve_ctx(keys: &JwtKeys, headers: &HeaderMap) -> Ctx {
    let user = bearer_token(headers).and_then(|token| decode_token(keys, token));
    match user {
        Ok(token) => Ctx::Authenticated(CtxUser::from(token)),
        Err(reason) => Ctx::Anonymous(reason),
    }
}

/// Middleware resolving the request context and storing it in the request
/// extensions.
///
/// # Examples
///
/// ```rust
/// use axum::{Router, middleware};
/// use accounts_web::{ctx::resolver::mw_ctx_resolver, state::ApiState};
///
/// fn app(state: ApiState) -> Router {
///     Router::new().layer(middleware::from_fn_with_state(state, mw_ctx_resolver))
/// }
/// ```
pub async fn mw_ctx_resolver(
    State(state): State<ApiState>,
    headers: HeaderMap,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = resolve_ctx(&state.keys, &headers);
    if let Ctx::Authenticated(user) = &ctx {
        debug!("Request authenticated as user {}", user.id);
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Ctx>()
            .cloned()
            .ok_or(Error::CtxMissing)
    }
}
