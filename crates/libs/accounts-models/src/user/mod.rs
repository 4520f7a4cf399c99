//! User account model.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A persisted user account.
///
/// `password` always holds a password hash, never plaintext.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique, store-assigned user id.
    pub id: i32,
    /// Email address used to log in.
    pub email: String,
    /// Display name.
    pub username: String,
    /// Password hash.
    pub password: String,
    /// When this user was created.
    pub created_at: DateTime<Utc>,
    /// When this user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    /// Password hash.
    pub password: String,
}

/// Partial update of a user. `None` fields are left untouched.
#[derive(AsChangeset, PartialEq, Debug, Clone, Default, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    /// Password hash.
    pub password: Option<String>,
}

impl UserUpdate {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Applies the present fields to `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}
