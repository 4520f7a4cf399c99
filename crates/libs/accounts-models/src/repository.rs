//! User repository port and its PostgreSQL implementation.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::connection::DbConnection,
    prelude::*,
    schema::users,
    user::{User, UserCreate, UserUpdate},
};

/// Persistence operations on user accounts.
///
/// Every call round-trips to the backing store; nothing is cached in-process.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user ordered by id.
    async fn find_many(&self) -> Result<Vec<User>>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;

    /// Finds the lowest-id user with the given email.
    async fn find_first_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Inserts a new user and returns it with its assigned id.
    async fn create(&self, user: UserCreate) -> Result<User>;

    /// Applies `changes` to the user with `id`.
    ///
    /// Fails with [`Error::UserNotFound`] if there is no such user.
    async fn update(&self, id: i32, changes: UserUpdate) -> Result<User>;

    /// Deletes the user with `id` and returns the removed record.
    ///
    /// Fails with [`Error::UserNotFound`] if there is no such user.
    async fn delete(&self, id: i32) -> Result<User>;
}

#[async_trait]
impl UserRepository for DbConnection {
    async fn find_many(&self) -> Result<Vec<User>> {
        self.interact(|conn| {
            Ok(users::table
                .order(users::id.asc())
                .select(User::as_select())
                .load(conn)?)
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        self.interact(move |conn| {
            Ok(users::table
                .find(id)
                .select(User::as_select())
                .first(conn)
                .optional()?)
        })
        .await
    }

    async fn find_first_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_owned();
        self.interact(move |conn| {
            Ok(users::table
                .filter(users::email.eq(email))
                .order(users::id.asc())
                .select(User::as_select())
                .first(conn)
                .optional()?)
        })
        .await
    }

    async fn create(&self, user: UserCreate) -> Result<User> {
        self.interact(move |conn| {
            Ok(diesel::insert_into(users::table)
                .values(&user)
                .returning(User::as_returning())
                .get_result(conn)?)
        })
        .await
    }

    async fn update(&self, id: i32, changes: UserUpdate) -> Result<User> {
        self.interact(move |conn| {
            let updated = if changes.is_empty() {
                users::table
                    .find(id)
                    .select(User::as_select())
                    .first(conn)
                    .optional()?
            } else {
                diesel::update(users::table.find(id))
                    .set((&changes, users::updated_at.eq(Utc::now())))
                    .returning(User::as_returning())
                    .get_result(conn)
                    .optional()?
            };
            updated.ok_or(Error::UserNotFound(id))
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<User> {
        self.interact(move |conn| {
            diesel::delete(users::table.find(id))
                .returning(User::as_returning())
                .get_result(conn)
                .optional()?
                .ok_or(Error::UserNotFound(id))
        })
        .await
    }
}
