use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    graphql::{api_state, request_ctx, types::UserApi},
    user::{fetch_user, fetch_users},
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every user, ordered by id.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserApi>> {
        let state = api_state(ctx)?;
        let users = fetch_users(state).await.map_err(|err| err.extend())?;
        Ok(users.into_iter().map(UserApi::from).collect())
    }

    /// One user, or null if the id is unknown.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<UserApi>> {
        let state = api_state(ctx)?;
        let user = fetch_user(state, id).await.map_err(|err| err.extend())?;
        Ok(user.map(UserApi::from))
    }

    /// The caller, as identified by the bearer token.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<UserApi>> {
        let state = api_state(ctx)?;
        let caller = request_ctx(ctx)?.user().map_err(|err| err.extend())?;
        let user = fetch_user(state, caller.id)
            .await
            .map_err(|err| err.extend())?;
        Ok(user.map(UserApi::from))
    }
}
