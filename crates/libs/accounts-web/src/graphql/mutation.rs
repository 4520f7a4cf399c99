use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    auth_token,
    graphql::{
        api_state, request_ctx,
        types::{AccessToken, UpdateUserInput, UserApi},
    },
    user::{self, UserPost},
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a new user. Open to anonymous callers.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<UserApi> {
        let state = api_state(ctx)?;
        let payload = UserPost {
            username,
            email,
            password,
        };
        let user = user::create_user(state, payload)
            .await
            .map_err(|err| err.extend())?;
        Ok(UserApi::from(user))
    }

    /// Updates the given fields of a user. Requires authentication.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        data: UpdateUserInput,
    ) -> Result<UserApi> {
        let state = api_state(ctx)?;
        request_ctx(ctx)?.user().map_err(|err| err.extend())?;

        let user = user::update_user(state, id, data.into())
            .await
            .map_err(|err| err.extend())?;
        Ok(UserApi::from(user))
    }

    /// Deletes a user and returns it. Requires authentication.
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<UserApi> {
        let state = api_state(ctx)?;
        request_ctx(ctx)?.user().map_err(|err| err.extend())?;

        let user = user::delete_user(state, id)
            .await
            .map_err(|err| err.extend())?;
        Ok(UserApi::from(user))
    }

    /// Exchanges credentials for an access token.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AccessToken> {
        let state = api_state(ctx)?;
        let result = auth_token::login(state, &email, &password)
            .await
            .map_err(|err| err.extend())?;
        Ok(AccessToken::from(result))
    }
}
