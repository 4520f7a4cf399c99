//! GraphQL schema of the accounts API.
//!
//! Resolvers read the shared [`ApiState`] from the schema data and the
//! per-request [`Ctx`] from the request data.

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

use crate::{ctx::Ctx, prelude::*, state::ApiState};

pub mod mutation;
pub mod query;
pub mod types;

use mutation::MutationRoot;
use query::QueryRoot;

/// Maximum nesting accepted in a single query.
pub const MAX_QUERY_DEPTH: usize = 8;

pub type AccountsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema over `state`.
pub fn build_schema(state: ApiState) -> AccountsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .limit_depth(MAX_QUERY_DEPTH)
        .finish()
}

fn api_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ApiState> {
    ctx.data_opt::<ApiState>()
        .ok_or_else(|| Error::CtxMissing.extend())
}

fn request_ctx<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Ctx> {
    ctx.data_opt::<Ctx>()
        .ok_or_else(|| Error::CtxMissing.extend())
}
