//! HTTP surface of the accounts service.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    ctx::{Ctx, resolver::mw_ctx_resolver},
    graphql::{AccountsSchema, build_schema},
    state::ApiState,
};

/// Path serving both the GraphQL endpoint and its explorer.
pub const GRAPHQL_PATH: &str = "/graphql";
/// Body of `GET /`.
pub const GREETING: &str = "Hello from the accounts service!";

/// Builds the application router over `state`.
///
/// # Examples
///
/// ```rust,no_run
/// use accounts_web::{api::router, state::ApiState};
///
/// # async fn example(state: ApiState) -> std::io::Result<()> {
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router(state)).await?;
/// # Ok(())
/// # }
/// ```
pub fn router(state: ApiState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(root))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(schema)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(state, mw_ctx_resolver))
}

async fn root() -> &'static str {
    GREETING
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn graphql_handler(
    State(schema): State<AccountsSchema>,
    ctx: Ctx,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(ctx)).await.into()
}
