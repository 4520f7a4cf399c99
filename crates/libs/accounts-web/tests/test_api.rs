use std::error::Error;

use accounts_web::{
    api::{GRAPHQL_PATH, GREETING},
    auth_token::{AuthToken, LOGIN_FAILURE_MESSAGE, LOGIN_SUCCESS_MESSAGE, encode_token},
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::TimeDelta;
use common::TestApp;
use serde_json::{Value, json};

mod common;

const CREATE_A: &str = r#"mutation {
    createUser(username: "a", email: "a@x.com", password: "pw") { id username email }
}"#;

async fn login(app: &TestApp, email: &str, password: &str) -> Result<Value, Box<dyn Error>> {
    let query = format!(
        r#"mutation {{ login(email: "{email}", password: "{password}") {{ message accessToken }} }}"#
    );
    let body = app.graphql(&query, None).await?;
    Ok(body["data"]["login"].clone())
}

#[tokio::test]
async fn test_root_greeting() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();
    let request = Request::builder().uri("/").body(Body::empty())?;

    let (status, body) = app.send(request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, GREETING);
    Ok(())
}

#[tokio::test]
async fn test_graphiql_is_served() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();
    let request = Request::builder().uri(GRAPHQL_PATH).body(Body::empty())?;

    let (status, body) = app.send(request).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("graphiql"));
    Ok(())
}

#[tokio::test]
async fn test_user_lifecycle() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();

    let body = app.graphql(CREATE_A, None).await?;
    let id = body["data"]["createUser"]["id"]
        .as_i64()
        .ok_or("missing id")?;
    assert_eq!(body["data"]["createUser"]["username"], "a");

    let stored = app
        .state
        .repository
        .find_by_id(id as i32)
        .await?
        .ok_or("user not stored")?;
    assert_ne!(stored.password, "pw");

    let success = login(&app, "a@x.com", "pw").await?;
    assert_eq!(success["message"], LOGIN_SUCCESS_MESSAGE);
    let token = success["accessToken"].as_str().ok_or("missing token")?;

    let failure = login(&app, "a@x.com", "wrong").await?;
    assert_eq!(
        failure,
        json!({ "message": LOGIN_FAILURE_MESSAGE, "accessToken": null })
    );
    assert_eq!(failure, login(&app, "nobody@x.com", "pw").await?);

    let delete = format!("mutation {{ deleteUser(id: {id}) {{ id }} }}");
    let body = app
        .graphql(&delete, Some(&format!("Bearer {token}")))
        .await?;
    assert_eq!(body["data"]["deleteUser"]["id"], id);

    let body = app
        .graphql(&format!("{{ user(id: {id}) {{ id }} }}"), None)
        .await?;
    assert_eq!(body["data"]["user"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_me_follows_bearer_token() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();
    app.graphql(CREATE_A, None).await?;
    let token = login(&app, "a@x.com", "pw").await?["accessToken"]
        .as_str()
        .ok_or("missing token")?
        .to_owned();

    let body = app
        .graphql("{ me { username } }", Some(&format!("Bearer {token}")))
        .await?;
    assert_eq!(body["data"]["me"]["username"], "a");

    let body = app.graphql("{ me { username } }", None).await?;
    assert_eq!(body["errors"][0]["message"], "Authentication required");
    Ok(())
}

#[tokio::test]
async fn test_rejected_tokens() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();
    let delete = "mutation { deleteUser(id: 1) { id } }";

    let expired = encode_token(
        &app.state.keys,
        &AuthToken::new(1, "a", TimeDelta::seconds(-10))?,
    )?;
    let cases = [
        (format!("Bearer {expired}"), "Authentication token expired"),
        (String::from("Token abc"), "Malformed authorization header"),
        (String::from("Bearer abc.def.ghi"), "Invalid authentication token"),
    ];

    for (authorization, message) in cases {
        let body = app.graphql(delete, Some(&authorization)).await?;
        assert_eq!(body["errors"][0]["message"], message);
        assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
    }

    // Anonymous reads ignore a bad token.
    let body = app.graphql("{ users { id } }", Some("Token abc")).await?;
    assert_eq!(body["data"]["users"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_required_arguments_are_validated() -> Result<(), Box<dyn Error>> {
    let app = TestApp::new();

    let body = app
        .graphql(r#"mutation { createUser(username: "a") { id } }"#, None)
        .await?;
    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
    assert!(app.state.repository.find_many().await?.is_empty());
    Ok(())
}
