//! Access token issuance and the login flow.

use accounts_auth::{error::Error as AuthError, jwt::JwtKeys};
use accounts_models::user::User;
use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{prelude::*, state::ApiState};

/// Message returned alongside a freshly issued token.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged successfully.";
/// Message returned for every failed login, whatever the reason.
pub const LOGIN_FAILURE_MESSAGE: &str = "Invalid email or password.";

/// Claims embedded in an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// User id.
    pub id: i32,
    /// Username at issuance time.
    pub username: String,
    /// Issued at.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
}

impl AuthToken {
    /// Creates claims for `id`/`username` expiring `token_duration` from now.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accounts_web::auth_token::AuthToken;
    /// use chrono::TimeDelta;
    ///
    /// let token = AuthToken::new(1, "a", TimeDelta::hours(1)).unwrap();
    /// assert_eq!(token.exp - token.iat, 3600);
    /// ```
    pub fn new(id: i32, username: &str, token_duration: TimeDelta) -> Result<Self> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(token_duration)
            .ok_or(Error::AuthTokenCreation)?;

        Ok(Self {
            id,
            username: String::from(username),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        })
    }
}

/// Signs `token` into its compact string form.
pub fn encode_token(keys: &JwtKeys, token: &AuthToken) -> Result<String> {
    Ok(keys.encode(token).map_err(|err| {
        error!("Failed to encode JWT {err}");
        err
    })?)
}

/// Verifies a compact token and returns its claims.
pub fn decode_token(keys: &JwtKeys, token: &str) -> std::result::Result<AuthToken, AuthError> {
    keys.decode::<AuthToken>(token).map_err(|err| {
        debug!("Rejected access token: {err}");
        err
    })
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub message: String,
    pub access_token: Option<String>,
}

impl LoginResult {
    fn success(access_token: String) -> Self {
        Self {
            message: String::from(LOGIN_SUCCESS_MESSAGE),
            access_token: Some(access_token),
        }
    }

    fn failure() -> Self {
        Self {
            message: String::from(LOGIN_FAILURE_MESSAGE),
            access_token: None,
        }
    }
}

/// Checks `email`/`password` against the store.
///
/// An unknown email and a wrong password both fail with
/// [`Error::WrongCredentials`]. An unknown email is still checked against
/// [`ApiState::dummy_hash`] so both failures cost one hash verification.
pub async fn authenticate(state: &ApiState, email: &str, password: &str) -> Result<User> {
    let user = state.repository.find_first_by_email(email).await?;
    let hash = match &user {
        Some(user) => user.password.clone(),
        None => String::from(&*state.dummy_hash),
    };

    let hasher = state.hasher.clone();
    let password = String::from(password);
    let is_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await??;
    match user {
        Some(user) if is_valid => Ok(user),
        _ => Err(Error::WrongCredentials),
    }
}

/// Logs a user in.
///
/// Credential failures are reported in-band through
/// [`LOGIN_FAILURE_MESSAGE`]; only infrastructure failures are errors.
pub async fn login(state: &ApiState, email: &str, password: &str) -> Result<LoginResult> {
    let user = match authenticate(state, email, password).await {
        Ok(user) => user,
        Err(Error::WrongCredentials) => {
            info!("Login rejected");
            return Ok(LoginResult::failure());
        }
        Err(err) => return Err(err),
    };

    let claims = AuthToken::new(user.id, &user.username, state.token_ttl)?;
    let token = encode_token(&state.keys, &claims)?;
    info!("User {} logged in", user.id);
    Ok(LoginResult::success(token))
}
