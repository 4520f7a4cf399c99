use std::{error::Error, sync::Arc};

use accounts_auth::secret_hash::HashConfig;
use accounts_models::memory::MemoryUserRepository;
use accounts_web::{
    api::{GRAPHQL_PATH, router},
    config::{AuthConfig, DEFAULT_TOKEN_TTL},
    state::ApiState,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret";

pub struct TestApp {
    pub state: ApiState,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AuthConfig::new(
            String::from(SECRET),
            DEFAULT_TOKEN_TTL,
            HashConfig {
                memory_kib: 8,
                iterations: 1,
                parallelism: 1,
            },
        )
        .expect("Failed to build auth config");
        let state = ApiState::new(Arc::new(MemoryUserRepository::new()), &config)
            .expect("Failed to build api state");
        Self {
            router: router(state.clone()),
            state,
        }
    }

    pub async fn send(
        &self,
        request: Request<Body>,
    ) -> Result<(StatusCode, String), Box<dyn Error>> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(body.to_vec())?))
    }

    /// Posts a GraphQL document, optionally with a raw `Authorization` value.
    pub async fn graphql(
        &self,
        query: &str,
        authorization: Option<&str>,
    ) -> Result<Value, Box<dyn Error>> {
        let mut request = Request::builder()
            .method("POST")
            .uri(GRAPHQL_PATH)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(authorization) = authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }
        let request = request.body(Body::from(json!({ "query": query }).to_string()))?;

        let (status, body) = self.send(request).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(serde_json::from_str(&body)?)
    }
}
