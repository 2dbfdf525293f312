mod common;

use anyhow::Result;
use common::{TestServer, TEST_SECRET};
use jsonwebtoken::{decode, DecodingKey, Validation};
use movie_catalog_api::auth::Claims;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn signup_without_username_or_password_is_rejected() -> Result<()> {
    let server = TestServer::spawn().await?;

    for body in [
        json!({ "name": "No Username", "password": "pw" }),
        json!({ "name": "No Password", "username": "nopass" }),
        json!({ "name": "Blank", "username": "  ", "password": "pw" }),
    ] {
        let res = server.client.post(server.url("/signup")).json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {}", body);

        let payload = res.json::<Value>().await?;
        assert_eq!(payload["success"], false);
        assert!(payload["msg"].is_string(), "missing msg: {}", payload);
    }

    // Nothing was stored: the username is still free
    assert_eq!(server.signup("nopass", "pw").await?, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn signup_then_signin_succeeds() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/signup"))
        .json(&json!({ "name": "Alice", "username": "alice", "password": "hunter2" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["msg"], "Successfully created new user.");

    let (status, body) = server.signin("alice", "hunter2").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().unwrap_or_default().starts_with("JWT "), "token: {}", body);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_conflicts_and_keeps_original() -> Result<()> {
    let server = TestServer::spawn().await?;

    assert_eq!(server.signup("bob", "original").await?, StatusCode::CREATED);
    assert_eq!(server.signup("bob", "impostor").await?, StatusCode::CONFLICT);

    let (status, _) = server.signin("bob", "original").await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = server.signin("bob", "impostor").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn signin_failures_are_unauthorized() -> Result<()> {
    let server = TestServer::spawn().await?;
    assert_eq!(server.signup("carol", "right").await?, StatusCode::CREATED);

    let (status, body) = server.signin("nobody", "right").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, body) = server.signin("carol", "wrong").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert!(body.get("token").is_none());
    Ok(())
}

#[tokio::test]
async fn issued_token_is_valid_for_one_hour() -> Result<()> {
    let server = TestServer::spawn().await?;
    let auth = server.authorize("dave").await?;
    let token = auth.strip_prefix("JWT ").expect("JWT scheme");

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )?
    .claims;

    assert_eq!(claims.username, "dave");
    assert_eq!(claims.exp - claims.iat, 3600);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/signup"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}
