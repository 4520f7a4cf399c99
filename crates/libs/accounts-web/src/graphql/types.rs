//! GraphQL object and input types.

use accounts_models::user::User;
use async_graphql::{InputObject, SimpleObject};

use crate::{auth_token::LoginResult, user::UserPatch};

/// Public view of a user. The password hash is never exposed.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "User")]
pub struct UserApi {
    pub id: i32,
    pub email: String,
    pub username: String,
}

impl From<User> for UserApi {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

/// Login outcome. `access_token` is only set on success.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub message: String,
    pub access_token: Option<String>,
}

impl From<LoginResult> for AccessToken {
    fn from(result: LoginResult) -> Self {
        Self {
            message: result.message,
            access_token: result.access_token,
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
#[graphql(name = "UpdateUser")]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserInput> for UserPatch {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
            password: input.password,
        }
    }
}
