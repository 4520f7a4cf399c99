//! Request context management.
//!
//! Every request carries a [`Ctx`]: either the identity proven by its bearer
//! token, or the reason no identity could be established.

use accounts_auth::error::Error as AuthError;
use serde::{Deserialize, Serialize};

use crate::{auth_token::AuthToken, prelude::*};

pub mod resolver;

/// Identity carried by a valid access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtxUser {
    /// User id.
    pub id: i32,
    /// Username at token issuance time.
    pub username: String,
}

impl From<AuthToken> for CtxUser {
    fn from(token: AuthToken) -> Self {
        Self {
            id: token.id,
            username: token.username,
        }
    }
}

/// Per-request authentication context.
#[derive(Debug, Clone)]
pub enum Ctx {
    /// No usable token. Holds why.
    Anonymous(AuthError),
    /// Verified token.
    Authenticated(CtxUser),
}

impl Ctx {
    /// Returns the authenticated user, or the reason there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accounts_auth::error::Error as AuthError;
    /// use accounts_web::ctx::{Ctx, CtxUser};
    ///
    /// let ctx = Ctx::Authenticated(CtxUser { id: 1, username: "a".into() });
    /// assert_eq!(ctx.user().unwrap().id, 1);
    ///
    /// let ctx = Ctx::Anonymous(AuthError::TokenMissing);
    /// assert!(ctx.user().is_err());
    /// ```
    pub fn user(&self) -> Result<&CtxUser> {
        match self {
            Ctx::Authenticated(user) => Ok(user),
            Ctx::Anonymous(reason) => Err(Error::Auth(reason.clone())),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Ctx::Authenticated(_))
    }
}
