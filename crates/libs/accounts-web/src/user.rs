//! User account operations behind the API layer.

use accounts_auth::secret_hash::SecretHasher;
use accounts_models::user::{User, UserCreate, UserUpdate};
use tracing::info;

use crate::{prelude::*, state::ApiState};

/// Fields supplied when creating a user. `password` is plaintext.
#[derive(Debug, Clone)]
pub struct UserPost {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Fields supplied when updating a user. `password` is plaintext.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

async fn hash_secret(hasher: &SecretHasher, password: String) -> Result<String> {
    let hasher = hasher.clone();
    Ok(tokio::task::spawn_blocking(move || hasher.hash(&password)).await??)
}

/// Lists every user.
pub async fn fetch_users(state: &ApiState) -> Result<Vec<User>> {
    Ok(state.repository.find_many().await?)
}

/// Fetches one user, `None` if the id is unknown.
pub async fn fetch_user(state: &ApiState, id: i32) -> Result<Option<User>> {
    Ok(state.repository.find_by_id(id).await?)
}

/// Creates a user, storing only the hash of its password.
pub async fn create_user(state: &ApiState, payload: UserPost) -> Result<User> {
    let password = hash_secret(&state.hasher, payload.password).await?;
    let user = state
        .repository
        .create(UserCreate {
            email: payload.email,
            username: payload.username,
            password,
        })
        .await?;
    info!("Created user {}", user.id);
    Ok(user)
}

/// Updates the given fields of a user. A new password is re-hashed.
pub async fn update_user(state: &ApiState, id: i32, payload: UserPatch) -> Result<User> {
    let password = match payload.password {
        Some(password) => Some(hash_secret(&state.hasher, password).await?),
        None => None,
    };
    let user = state
        .repository
        .update(
            id,
            UserUpdate {
                email: payload.email,
                username: payload.username,
                password,
            },
        )
        .await?;
    info!("Updated user {}", user.id);
    Ok(user)
}

/// Deletes a user and returns the removed record.
pub async fn delete_user(state: &ApiState, id: i32) -> Result<User> {
    let user = state.repository.delete(id).await?;
    info!("Deleted user {}", user.id);
    Ok(user)
}
