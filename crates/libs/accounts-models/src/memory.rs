//! In-process [`UserRepository`] backed by a map.
//!
//! Mirrors the PostgreSQL repository's semantics (serial ids, lowest-id email
//! lookup, typed not-found) without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    prelude::*,
    repository::UserRepository,
    user::{User, UserCreate, UserUpdate},
};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

/// Map-backed user repository.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    state: RwLock<MemoryState>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_many(&self) -> Result<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_first_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, user: UserCreate) -> Result<User> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: state.last_id,
            email: user.email,
            username: user.username,
            password: user.password,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, changes: UserUpdate) -> Result<User> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id).ok_or(Error::UserNotFound(id))?;
        if !changes.is_empty() {
            changes.apply(user);
            user.updated_at = Utc::now();
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<User> {
        self.state
            .write()
            .await
            .users
            .remove(&id)
            .ok_or(Error::UserNotFound(id))
    }
}
